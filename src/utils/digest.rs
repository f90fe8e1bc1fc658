use std::fs;
use std::path::Path;

use anyhow::Context;
use sha1::{Digest, Sha1};

/// Content hashes of one file, all lowercase hex.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDigest {
    pub md5: String,
    pub sha1: String,
    /// Unpadded, so it can be shorter than eight characters.
    pub crc32: String,
    pub size: u64,
}

pub fn digest_bytes(bytes: &[u8]) -> FileDigest {
    FileDigest {
        md5: format!("{:x}", md5::compute(bytes)),
        sha1: hex::encode(Sha1::digest(bytes)),
        crc32: format!("{:x}", crc32fast::hash(bytes)),
        size: bytes.len() as u64,
    }
}

pub fn digest_file(path: &Path) -> anyhow::Result<FileDigest> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;

    Ok(digest_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{digest_bytes, digest_file};

    #[test]
    fn digest_of_known_content() {
        let digest = digest_bytes(b"hello world");

        assert_eq!("5eb63bbbe01eeed093cb22bb8f5acdc3", digest.md5);
        assert_eq!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed", digest.sha1);
        assert_eq!("d4a1185", digest.crc32);
        assert_eq!(11, digest.size);
    }

    #[test]
    fn digest_of_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("1.pdf");
        fs::write(&path, b"hello world")?;

        assert_eq!(digest_bytes(b"hello world"), digest_file(&path)?);

        Ok(())
    }

    #[test]
    fn digest_of_missing_file_fails() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        assert!(digest_file(&dir.path().join("missing.pdf")).is_err());

        Ok(())
    }
}
