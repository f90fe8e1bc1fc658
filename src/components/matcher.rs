use crate::models::{field_text, VolumeInfo, VOLUME};
use crate::utils::to_int;

/// How a file was tied to a scraped volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeMatch<'a> {
    /// The volume's `Volume` field equals the file key.
    ByNumber(&'a VolumeInfo),
    /// No number matched; the key was used as a 1-based index into scrape order.
    ByPosition(&'a VolumeInfo),
    Unmatched,
}

impl<'a> VolumeMatch<'a> {
    pub fn volume(&self) -> Option<&'a VolumeInfo> {
        match self {
            VolumeMatch::ByNumber(volume) | VolumeMatch::ByPosition(volume) => Some(volume),
            VolumeMatch::Unmatched => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            VolumeMatch::ByNumber(_) => "number",
            VolumeMatch::ByPosition(_) => "position",
            VolumeMatch::Unmatched => "unmatched",
        }
    }
}

/// Finds the volume a file belongs to.
///
/// The key and every `Volume` field are coerced with [`to_int`], so a key
/// without a leading number is `0` and matches volumes such as `Extra`.
pub fn match_volume<'a>(volumes: &'a [VolumeInfo], filename_key: &str) -> VolumeMatch<'a> {
    let key = to_int(filename_key);

    let by_number = volumes.iter().find(|volume| {
        field_text(&volume.fields, VOLUME).map_or(false, |number| to_int(number) == key)
    });

    if let Some(volume) = by_number {
        return VolumeMatch::ByNumber(volume);
    }

    if key < 1 {
        return VolumeMatch::Unmatched;
    }

    usize::try_from(key - 1)
        .ok()
        .and_then(|index| volumes.get(index))
        .map_or(VolumeMatch::Unmatched, VolumeMatch::ByPosition)
}
