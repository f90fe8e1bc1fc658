use log::{debug, trace};
use scraper::Html;

use super::{absolute, extract_side_info, selector, text_of, PageClient, Parser, VolumePage};
use crate::config::Config;
use crate::models::{MetadataField, NovelInfo};

/// Novel pages are read through their `view` route.
pub fn novel_url(result_url: &str) -> String {
    result_url.replace("/light_novel/", "/light_novel/view/")
}

/// What the novel page itself says, before any volume page is fetched.
#[derive(Debug, PartialEq)]
pub struct NovelOverview {
    pub title: String,
    pub cover_url: String,
    pub fields: Vec<MetadataField>,
    pub volume_urls: Vec<String>,
}

pub struct NovelPage<'a> {
    client: &'a PageClient,
    config: &'a Config,
    result_url: String,
    request_data: Option<String>,
}

impl<'a> NovelPage<'a> {
    pub fn new(client: &'a PageClient, config: &'a Config, result_url: &str) -> NovelPage<'a> {
        NovelPage {
            client,
            config,
            result_url: result_url.to_string(),
            request_data: None,
        }
    }

    pub fn with_request_data(mut self, html: &str) -> NovelPage<'a> {
        self.request_data = Some(html.to_string());
        self
    }

    pub fn parse_overview(&self) -> anyhow::Result<NovelOverview> {
        trace!("NovelPage::parse_overview()");
        let document = Html::parse_document(self.request_data()?);
        let selectors = &self.config.light_novel.selectors;

        let title = document
            .select(&selector(&selectors.title)?)
            .map(|element| text_of(&element))
            .collect::<String>()
            .trim()
            .to_string();

        let cover_url = document
            .select(&selector(&selectors.cover)?)
            .last()
            .and_then(|img| img.value().attr("src"))
            .map(|src| format!("{}{}", self.config.base_url, src))
            .unwrap_or_default();

        let volume_urls = document
            .select(&selector(&selectors.volumes)?)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(|href| absolute(&self.config.base_url, href))
            .collect::<Vec<_>>();

        Ok(NovelOverview {
            title,
            cover_url,
            fields: extract_side_info(&document, &selectors.info, &selectors.info_list)?,
            volume_urls,
        })
    }
}

impl<'a> Parser for NovelPage<'a> {
    type RequestData = String;
    type ParseData = NovelInfo;

    fn request_data(&self) -> anyhow::Result<&Self::RequestData> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> anyhow::Result<String> {
        Ok(novel_url(&self.result_url))
    }

    fn request(mut self) -> anyhow::Result<Self> {
        trace!("NovelPage::request()");
        let html = self.client.get(&self.url()?)?;

        self.request_data = Some(html);
        Ok(self)
    }

    /// Fetches every volume page in page order.
    fn parse(&self) -> anyhow::Result<Self::ParseData> {
        trace!("NovelPage::parse()");
        let overview = self.parse_overview()?;

        debug!("{} volumes for {}", overview.volume_urls.len(), overview.title);

        let volumes = overview
            .volume_urls
            .iter()
            .map(|url| {
                VolumePage::new(self.client, self.config, url)
                    .request()?
                    .parse()
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(NovelInfo {
            title: overview.title,
            cover_url: overview.cover_url,
            fields: overview.fields,
            volumes,
        })
    }
}
