mod field;
mod novel;
mod record;
mod search;

pub use field::{field_text, find_field, FieldValue, LinkedValue, MetadataField};
pub use novel::{
    NovelFields, NovelInfo, VolumeFields, VolumeInfo, AUTHOR, ISBN_10, ISBN_13, VOLUME,
    VOLUME_TITLE,
};
pub use record::{CatalogRecord, LibraryExtra};
pub use search::SearchResult;
