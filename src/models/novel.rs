use serde::{Deserialize, Serialize};

use super::field::{field_text, find_field, FieldValue, MetadataField};
use crate::error::LookupError;

pub const AUTHOR: &str = "Author";
pub const VOLUME: &str = "Volume";
pub const VOLUME_TITLE: &str = "Volume Title";
pub const ISBN_10: &str = "ISBN-10";
pub const ISBN_13: &str = "ISBN-13";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NovelInfo {
    pub title: String,
    pub cover_url: String,
    pub fields: Vec<MetadataField>,
    pub volumes: Vec<VolumeInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub url: String,
    pub cover_url: String,
    pub fields: Vec<MetadataField>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NovelFields {
    pub author: Option<FieldValue>,
    pub extra: Vec<MetadataField>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolumeFields {
    pub volume: Option<String>,
    pub volume_title: Option<String>,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    pub extra: Vec<MetadataField>,
}

fn extra(fields: &[MetadataField], known: &[&str]) -> Vec<MetadataField> {
    fields
        .iter()
        .filter(|field| !known.contains(&field.name.as_str()))
        .cloned()
        .collect()
}

impl NovelInfo {
    pub fn typed(&self) -> NovelFields {
        NovelFields {
            author: find_field(&self.fields, AUTHOR, None).map(|field| field.value.clone()),
            extra: extra(&self.fields, &[AUTHOR]),
        }
    }

    /// First linked name of the novel-level `Author` field.
    pub fn author(&self) -> Result<String, LookupError> {
        let author = self.typed().author.ok_or(LookupError::MissingField {
            field: AUTHOR.to_string(),
        })?;

        author
            .as_links()
            .and_then(|links| links.first())
            .map(|link| link.text.clone())
            .ok_or(LookupError::EmptyLinks {
                field: AUTHOR.to_string(),
            })
    }
}

impl VolumeInfo {
    pub fn typed(&self) -> VolumeFields {
        let text = |name: &str| field_text(&self.fields, name).map(str::to_string);

        VolumeFields {
            volume: text(VOLUME),
            volume_title: text(VOLUME_TITLE),
            isbn10: text(ISBN_10),
            isbn13: text(ISBN_13),
            extra: extra(&self.fields, &[VOLUME, VOLUME_TITLE, ISBN_10, ISBN_13]),
        }
    }
}
