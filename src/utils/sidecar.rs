use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Path of the JSON sidecar for the file stem `name` inside `dir`.
///
/// `name` is used as given; callers pass an already normalized stem.
pub fn sidecar_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

/// Writes `value` as JSON next to the files in `dir`, replacing an older sidecar.
pub fn write_sidecar<T: Serialize>(dir: &Path, name: &str, value: &T) -> anyhow::Result<PathBuf> {
    let path = sidecar_path(dir, name);
    let json = serde_json::to_string(value)?;

    fs::write(&path, json).with_context(|| format!("write sidecar {}", path.display()))?;

    Ok(path)
}

pub fn read_sidecar<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read sidecar {}", path.display()))?;

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::{read_sidecar, sidecar_path, write_sidecar};
    use crate::models::SearchResult;

    #[test]
    fn sidecar_name_is_stem_plus_json() {
        let path = sidecar_path(std::path::Path::new("/tmp"), "Volume 1 - - Question");

        assert_eq!(std::path::Path::new("/tmp/Volume 1 - - Question.json"), path);
    }

    #[test]
    fn write_then_read() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let value = SearchResult {
            text: "Novel".to_string(),
            url: "/light_novel/Novel".to_string(),
        };

        let path = write_sidecar(dir.path(), "Volume 1 - Prologue_9781234567897", &value)?;

        assert_eq!(
            dir.path().join("Volume 1 - Prologue_9781234567897.json"),
            path
        );
        assert_eq!(value, read_sidecar::<SearchResult>(&path)?);

        Ok(())
    }
}
