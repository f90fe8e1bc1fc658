use std::path::{Path, PathBuf};

use log::warn;

use super::isbn::{check_isbn, IsbnResult};
use super::matcher::VolumeMatch;
use crate::error::LookupError;
use crate::models::{CatalogRecord, LibraryExtra, NovelInfo};
use crate::utils::{collapse_spaces, normalize, FileDigest};

/// A candidate file in the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub path: PathBuf,
    /// File name without its extension; the key used for matching.
    pub stem: String,
    /// Extension with its leading dot, e.g. `.pdf`.
    pub extension: String,
}

impl LocalFile {
    pub fn from_path(path: &Path) -> Option<LocalFile> {
        let stem = path.file_stem()?.to_str()?.to_string();
        let extension = format!(".{}", path.extension()?.to_str()?);

        Some(LocalFile {
            path: path.to_path_buf(),
            stem,
            extension,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }
}

/// Everything known about a file's volume before the file is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledVolume {
    /// Destination file name without extension; also names the sidecar.
    pub stem: String,
    pub extension: String,
    pub title: String,
    pub isbn: IsbnResult,
    pub author: String,
    pub series: String,
    pub cover_url: String,
}

impl AssembledVolume {
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    pub fn into_record(self, filepath: &Path, digest: &FileDigest) -> CatalogRecord {
        let isbn10 = self.isbn.isbn10.clone().unwrap_or_default();
        let isbn13 = self.isbn.isbn13.clone().unwrap_or_default();

        CatalogRecord {
            id: self.isbn.id(),
            filepath: filepath.display().to_string(),
            isbn_pretty: self.isbn.isbn_pretty.clone().unwrap_or_default(),
            md5: digest.md5.clone(),
            title: self.title.clone(),
            authors: vec![self.author.clone()],
            cover_url: self.cover_url.clone(),
            library_extra: LibraryExtra {
                author: self.author,
                coverurl: self.cover_url,
                crc32: digest.crc32.clone(),
                extension: self.extension.trim_start_matches('.').to_string(),
                filesize: digest.size,
                identifier: format!("{},{}", isbn13, isbn10),
                md5: digest.md5.clone(),
                series: self.series,
                sha1: digest.sha1.clone(),
                title: self.title,
            },
            isbn10,
            isbn13,
        }
    }
}

/// `Volume {number} - {title}_{isbn13}`, leaving out the parts that are unknown.
///
/// Spaces are collapsed over the whole stem, which also names the sidecar.
pub fn destination_stem(number: &str, title: &str, isbn13: Option<&str>) -> String {
    let mut stem = format!("Volume {}", normalize(number));

    if !title.is_empty() {
        stem.push_str(" - ");
        stem.push_str(&normalize(title));
    }

    if let Some(isbn13) = isbn13 {
        stem.push('_');
        stem.push_str(isbn13);
    }

    collapse_spaces(&stem)
}

pub struct Assembler<'a> {
    novel: &'a NovelInfo,
    author: String,
    base_url: &'a str,
}

impl<'a> Assembler<'a> {
    /// Fails when the novel has no linked author, before any file is touched.
    pub fn new(novel: &'a NovelInfo, base_url: &'a str) -> Result<Assembler<'a>, LookupError> {
        Ok(Assembler {
            author: novel.author()?,
            novel,
            base_url,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// `None` when the file has no volume; such files are left alone.
    pub fn assemble(
        &self,
        file: &LocalFile,
        matched: VolumeMatch<'_>,
        index: usize,
    ) -> Option<AssembledVolume> {
        let volume = matched.volume()?;
        let fields = volume.typed();

        let title = fields.volume_title.unwrap_or_default();
        let number = fields.volume.unwrap_or_else(|| index.to_string());

        let isbn = resolve_isbn(fields.isbn13.as_deref(), fields.isbn10.as_deref());
        if !isbn.valid {
            warn!("ISBN ERROR for {}", volume.url);
        }

        Some(AssembledVolume {
            stem: destination_stem(&number, &title, isbn.isbn13.as_deref()),
            extension: file.extension.clone(),
            title,
            isbn,
            author: self.author.clone(),
            series: self.novel.title.clone(),
            cover_url: format!("{}{}", self.base_url, volume.cover_url),
        })
    }
}

/// ISBN-13 first, then ISBN-10; invalid when neither validates.
pub fn resolve_isbn(isbn13: Option<&str>, isbn10: Option<&str>) -> IsbnResult {
    let isbn = check_isbn(isbn13);

    if isbn.valid {
        isbn
    } else {
        check_isbn(isbn10)
    }
}
