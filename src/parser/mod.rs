use anyhow::anyhow;
use scraper::{ElementRef, Html, Selector};

use crate::models::{FieldValue, LinkedValue, MetadataField, NovelInfo, SearchResult};

mod client;
mod lndb;
mod novel;
mod search;
mod volume;

pub use client::{referer, PageClient};
pub use lndb::Lndb;
pub use novel::{novel_url, NovelPage};
pub use search::{SearchAll, SearchPage};
pub use volume::VolumePage;

pub trait Parser {
    type RequestData;
    type ParseData;

    fn request_data(&self) -> anyhow::Result<&Self::RequestData>;

    fn url(&self) -> anyhow::Result<String>;

    fn request(self) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn parse(&self) -> anyhow::Result<Self::ParseData>;
}

/// Where novels and their volumes come from.
pub trait MetadataSource {
    fn search(&self, keyword: &str) -> anyhow::Result<Vec<SearchResult>>;

    fn novel(&self, result: &SearchResult) -> anyhow::Result<NovelInfo>;
}

pub(crate) fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|err| anyhow!("invalid selector `{}`: {}", css, err))
}

pub(crate) fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// `href` as an absolute URL, prefixing `base_url` to relative ones.
pub(crate) fn absolute(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", base_url, href)
    }
}

/// Name/value rows of a page's side-info table.
///
/// ```html
/// <tr><td>Volume Title</td><td>Prologue</td></tr>
/// <tr><td>Author</td><td><a href="/author/jane">Jane Doe</a></td></tr>
/// ```
///
/// The value is the anchors of the last cell when there are any, the second cell's text otherwise.
pub fn extract_side_info(
    document: &Html,
    info: &str,
    info_list: &str,
) -> anyhow::Result<Vec<MetadataField>> {
    let info_selector = selector(info)?;
    let cell_selector = selector(info_list)?;
    let anchor_selector = selector("a")?;

    let fields = document
        .select(&info_selector)
        .filter_map(|row| {
            let cells = row.select(&cell_selector).collect::<Vec<_>>();
            let last = cells.last()?;

            let links = last
                .select(&anchor_selector)
                .map(|anchor| LinkedValue {
                    text: text_of(&anchor),
                    url: anchor.value().attr("href").unwrap_or_default().to_string(),
                })
                .collect::<Vec<_>>();

            let texts = cells
                .iter()
                .map(|cell| text_of(cell).trim().to_string())
                .collect::<Vec<_>>();

            let value = if links.is_empty() {
                FieldValue::Text(texts.get(1).cloned().unwrap_or_default())
            } else {
                FieldValue::Links(links)
            };

            Some(MetadataField {
                name: texts[0].clone(),
                value,
            })
        })
        .collect::<Vec<_>>();

    Ok(fields)
}
