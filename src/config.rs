use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// Replayed as the `Host` header on page requests.
    pub host: String,
    pub cookie: String,
    pub user_agent: String,
    pub search: SearchConfig,
    pub light_novel: LightNovelConfig,
    pub volume: SideInfoSelectors,
    pub catalog: CatalogConfig,
    pub extensions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Path appended to `base_url`, followed by the `+`-joined keywords.
    pub page: String,
    pub all: String,
    /// Anchors on the search page, one per result.
    pub results: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LightNovelConfig {
    pub selectors: NovelSelectors,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NovelSelectors {
    pub title: String,
    pub cover: String,
    pub info: String,
    pub info_list: String,
    pub volumes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SideInfoSelectors {
    pub cover: String,
    /// One element per metadata row.
    pub info: String,
    /// Cells inside a row: name first, value last.
    pub info_list: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://lndb.info".to_string(),
            host: "lndb.info".to_string(),
            cookie: String::new(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:69.0) Gecko/20100101 Firefox/69.0"
                .to_string(),
            search: SearchConfig::default(),
            light_novel: LightNovelConfig::default(),
            volume: SideInfoSelectors::default(),
            catalog: CatalogConfig::default(),
            extensions: vec![".pdf".to_string()],
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page: "/search?text=".to_string(),
            all: "/search/all?term=".to_string(),
            results: "#searchResults a".to_string(),
        }
    }
}

impl Default for NovelSelectors {
    fn default() -> Self {
        NovelSelectors {
            title: "#lightnovel > h1".to_string(),
            cover: "#lightnovel .cover img".to_string(),
            info: "#lightnovel .secondary-info tr".to_string(),
            info_list: "td".to_string(),
            volumes: "#lightnovel .volume-list a".to_string(),
        }
    }
}

impl Default for SideInfoSelectors {
    fn default() -> Self {
        SideInfoSelectors {
            cover: "#volume img".to_string(),
            info: "#volume .secondary-info tr".to_string(),
            info_list: "td".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: "http://127.0.0.1:3232/api/v2/book".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;

        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        if path.exists() {
            Config::from_file(path)
        } else {
            Ok(Config::default())
        }
    }
}
