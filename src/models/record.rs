use serde::{Deserialize, Serialize};

/// One renamed volume file, as submitted to the catalog and written as a sidecar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    /// ISBN-13 as an integer; `None` when the volume has no valid ISBN.
    pub id: Option<u64>,
    pub filepath: String,
    pub isbn10: String,
    pub isbn13: String,
    pub isbn_pretty: String,
    pub md5: String,
    pub title: String,
    pub authors: Vec<String>,
    pub cover_url: String,
    pub library_extra: LibraryExtra,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LibraryExtra {
    pub author: String,
    pub coverurl: String,
    pub crc32: String,
    pub extension: String,
    pub filesize: u64,
    pub identifier: String,
    pub md5: String,
    pub series: String,
    pub sha1: String,
    pub title: String,
}
