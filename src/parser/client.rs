use anyhow::Context;
use log::{debug, trace};
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HOST, REFERER, USER_AGENT};

use crate::config::Config;

/// Blocking HTTP client that replays the configured browser headers on every request.
pub struct PageClient {
    client: Client,
    host: String,
    cookie: String,
    user_agent: String,
}

/// The page a novel view is reached from.
pub fn referer(url: &str) -> String {
    url.replace("/light_novel/view/", "/light_novel/")
}

impl PageClient {
    pub fn new(config: &Config) -> anyhow::Result<PageClient> {
        let client = Client::builder().build()?;

        Ok(PageClient {
            client,
            host: config.host.clone(),
            cookie: config.cookie.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn get(&self, url: &str) -> anyhow::Result<String> {
        trace!("PageClient::get()");
        debug!("{}", url);

        let mut request = self.client.get(url).header(REFERER, referer(url));

        if !self.cookie.is_empty() {
            request = request.header(COOKIE, &self.cookie);
        }
        if !self.host.is_empty() {
            request = request.header(HOST, &self.host);
        }
        if !self.user_agent.is_empty() {
            request = request.header(USER_AGENT, &self.user_agent);
        }

        let text = request
            .send()
            .and_then(|response| response.text())
            .with_context(|| format!("get {}", url))?;

        Ok(text)
    }
}
