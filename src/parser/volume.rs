use log::{trace, warn};
use scraper::Html;

use super::{extract_side_info, selector, PageClient, Parser};
use crate::config::Config;
use crate::models::VolumeInfo;

/// One volume page: cover image plus the volume's side-info table.
pub struct VolumePage<'a> {
    client: &'a PageClient,
    config: &'a Config,
    url: String,
    request_data: Option<String>,
}

impl<'a> VolumePage<'a> {
    pub fn new(client: &'a PageClient, config: &'a Config, url: &str) -> VolumePage<'a> {
        VolumePage {
            client,
            config,
            url: url.to_string(),
            request_data: None,
        }
    }

    pub fn with_request_data(mut self, html: &str) -> VolumePage<'a> {
        self.request_data = Some(html.to_string());
        self
    }
}

impl<'a> Parser for VolumePage<'a> {
    type RequestData = String;
    type ParseData = VolumeInfo;

    fn request_data(&self) -> anyhow::Result<&Self::RequestData> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> anyhow::Result<String> {
        Ok(self.url.clone())
    }

    fn request(mut self) -> anyhow::Result<Self> {
        trace!("VolumePage::request()");
        let html = self.client.get(&self.url()?)?;

        self.request_data = Some(html);
        Ok(self)
    }

    /// The cover is the second image matching the cover selector; the first is the site banner.
    fn parse(&self) -> anyhow::Result<Self::ParseData> {
        trace!("VolumePage::parse()");
        let document = Html::parse_document(self.request_data()?);
        let selectors = &self.config.volume;

        let cover_url = document
            .select(&selector(&selectors.cover)?)
            .nth(1)
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
            .unwrap_or_else(|| {
                warn!("no cover for {}", self.url);
                String::new()
            });

        Ok(VolumeInfo {
            url: self.url.clone(),
            cover_url,
            fields: extract_side_info(&document, &selectors.info, &selectors.info_list)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::VolumePage;
    use crate::config::Config;
    use crate::models::MetadataField;
    use crate::parser::{PageClient, Parser};

    const VOLUME_HTML: &str = r#"<html><body>
        <div id="volume">
            <img src="/images/banner.png">
            <img src="/images/covers/novel-1.jpg">
            <table class="secondary-info">
                <tr><td>Volume</td><td>1</td></tr>
                <tr><td>Volume Title</td><td>Prologue</td></tr>
                <tr><td>ISBN-10</td><td>123456789X</td></tr>
                <tr><td>ISBN-13</td><td>9781234567897</td></tr>
            </table>
        </div>
    </body></html>"#;

    #[test]
    fn parse_volume() -> anyhow::Result<()> {
        let config = Config::default();
        let client = PageClient::new(&config)?;

        let page = VolumePage::new(&client, &config, "http://lndb.info/light_novel/view/Novel/1")
            .with_request_data(VOLUME_HTML);

        let volume = page.parse()?;

        assert_eq!("http://lndb.info/light_novel/view/Novel/1", volume.url);
        assert_eq!("/images/covers/novel-1.jpg", volume.cover_url);
        assert_eq!(
            vec![
                MetadataField::text("Volume", "1"),
                MetadataField::text("Volume Title", "Prologue"),
                MetadataField::text("ISBN-10", "123456789X"),
                MetadataField::text("ISBN-13", "9781234567897"),
            ],
            volume.fields
        );

        Ok(())
    }

    #[test]
    fn missing_cover_is_empty() -> anyhow::Result<()> {
        let config = Config::default();
        let client = PageClient::new(&config)?;

        let page = VolumePage::new(&client, &config, "http://lndb.info/v")
            .with_request_data(r#"<div id="volume"><img src="/only.png"></div>"#);

        assert_eq!("", page.parse()?.cover_url);

        Ok(())
    }
}
