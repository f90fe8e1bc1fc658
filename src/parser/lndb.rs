use log::info;

use super::{MetadataSource, NovelPage, PageClient, Parser, SearchAll, SearchPage};
use crate::config::Config;
use crate::models::{NovelInfo, SearchResult};

/// Light-novel metadata scraped from LNDB-style pages.
pub struct Lndb {
    client: PageClient,
    config: Config,
    /// Use the JSON autocomplete endpoint instead of the HTML search page.
    search_all: bool,
}

impl Lndb {
    pub fn new(config: Config, search_all: bool) -> anyhow::Result<Lndb> {
        Ok(Lndb {
            client: PageClient::new(&config)?,
            config,
            search_all,
        })
    }
}

impl MetadataSource for Lndb {
    fn search(&self, keyword: &str) -> anyhow::Result<Vec<SearchResult>> {
        let results = if self.search_all {
            SearchAll::new(&self.client, &self.config, keyword)
                .request()?
                .parse()?
        } else {
            SearchPage::new(&self.client, &self.config, keyword)
                .request()?
                .parse()?
        };

        info!("{} results for {:?}", results.len(), keyword);

        Ok(results)
    }

    fn novel(&self, result: &SearchResult) -> anyhow::Result<NovelInfo> {
        NovelPage::new(&self.client, &self.config, &result.url)
            .request()?
            .parse()
    }
}
