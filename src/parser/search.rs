use anyhow::anyhow;
use log::trace;
use scraper::Html;
use serde::Deserialize;

use super::{absolute, selector, text_of, PageClient, Parser};
use crate::config::Config;
use crate::models::SearchResult;

fn join_words(text: &str, separator: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(separator)
}

/// The HTML search page, one anchor per matching novel.
pub struct SearchPage<'a> {
    client: &'a PageClient,
    config: &'a Config,
    query: String,
    request_data: Option<String>,
}

impl<'a> SearchPage<'a> {
    pub fn new(client: &'a PageClient, config: &'a Config, query: &str) -> SearchPage<'a> {
        SearchPage {
            client,
            config,
            query: query.to_string(),
            request_data: None,
        }
    }

    pub fn with_request_data(mut self, html: &str) -> SearchPage<'a> {
        self.request_data = Some(html.to_string());
        self
    }
}

impl<'a> Parser for SearchPage<'a> {
    type RequestData = String;
    type ParseData = Vec<SearchResult>;

    fn request_data(&self) -> anyhow::Result<&Self::RequestData> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> anyhow::Result<String> {
        Ok(format!(
            "{}{}{}",
            self.config.base_url,
            self.config.search.page,
            join_words(&self.query, "+")
        ))
    }

    fn request(mut self) -> anyhow::Result<Self> {
        trace!("SearchPage::request()");
        let html = self.client.get(&self.url()?)?;

        self.request_data = Some(html);
        Ok(self)
    }

    /// Results sorted by their label.
    fn parse(&self) -> anyhow::Result<Self::ParseData> {
        trace!("SearchPage::parse()");
        let document = Html::parse_document(self.request_data()?);
        let results_selector = selector(&self.config.search.results)?;

        let mut results = document
            .select(&results_selector)
            .map(|anchor| SearchResult {
                text: text_of(&anchor).trim().to_string(),
                url: absolute(
                    &self.config.base_url,
                    anchor.value().attr("href").unwrap_or_default(),
                ),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.text.cmp(&b.text));

        Ok(results)
    }
}

#[derive(Deserialize, Debug)]
struct AutocompleteEntry {
    label: String,
    category: String,
}

/// The JSON autocomplete endpoint; covers every category, not only light novels.
pub struct SearchAll<'a> {
    client: &'a PageClient,
    config: &'a Config,
    query: String,
    request_data: Option<String>,
}

impl<'a> SearchAll<'a> {
    pub fn new(client: &'a PageClient, config: &'a Config, query: &str) -> SearchAll<'a> {
        SearchAll {
            client,
            config,
            query: query.to_string(),
            request_data: None,
        }
    }

    pub fn with_request_data(mut self, json: &str) -> SearchAll<'a> {
        self.request_data = Some(json.to_string());
        self
    }
}

impl<'a> Parser for SearchAll<'a> {
    type RequestData = String;
    type ParseData = Vec<SearchResult>;

    fn request_data(&self) -> anyhow::Result<&Self::RequestData> {
        self.request_data
            .as_ref()
            .ok_or_else(|| anyhow!("Can't get request_data"))
    }

    fn url(&self) -> anyhow::Result<String> {
        Ok(format!(
            "{}{}{}",
            self.config.base_url,
            self.config.search.all,
            join_words(&self.query, "+")
        ))
    }

    fn request(mut self) -> anyhow::Result<Self> {
        trace!("SearchAll::request()");
        let json = self.client.get(&self.url()?)?;

        self.request_data = Some(json);
        Ok(self)
    }

    /// `{label, category}` entries become `{base_url}/{category}/{label}` with words joined by `_`.
    fn parse(&self) -> anyhow::Result<Self::ParseData> {
        trace!("SearchAll::parse()");
        let entries = serde_json::from_str::<Vec<AutocompleteEntry>>(self.request_data()?)?;

        let results = entries
            .into_iter()
            .map(|entry| SearchResult {
                url: format!(
                    "{}/{}/{}",
                    self.config.base_url,
                    join_words(&entry.category.to_lowercase(), "_"),
                    join_words(&entry.label, "_")
                ),
                text: entry.label,
            })
            .collect();

        Ok(results)
    }
}
