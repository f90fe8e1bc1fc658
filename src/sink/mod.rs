use anyhow::Context;
use log::{debug, info, trace};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::models::CatalogRecord;

const SUCCESS_MARKER: &str = r#"{"success":true}"#;

/// What the catalog answered for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkResponse {
    pub success: bool,
    pub body: String,
}

impl SinkResponse {
    /// Success is the marker appearing anywhere in the body, whatever the status.
    pub fn from_body(body: String) -> SinkResponse {
        SinkResponse {
            success: body.contains(SUCCESS_MARKER),
            body,
        }
    }
}

pub trait CatalogSink {
    fn submit(&self, record: &CatalogRecord) -> anyhow::Result<SinkResponse>;
}

pub struct HttpSink {
    client: Client,
    endpoint: String,
}

pub fn create(endpoint: &str) -> anyhow::Result<HttpSink> {
    let client = Client::builder().build()?;

    Ok(HttpSink {
        client,
        endpoint: endpoint.to_string(),
    })
}

impl CatalogSink for HttpSink {
    fn submit(&self, record: &CatalogRecord) -> anyhow::Result<SinkResponse> {
        trace!("HttpSink::submit()");
        info!("submitting {}", record.filepath);

        // `json` keeps a content type that is already set.
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(record)
            .send()
            .with_context(|| format!("post {}", self.endpoint))?;

        debug!("status = {}", response.status());

        let text = String::from_utf8_lossy(&response.bytes()?).into_owned();
        info!("{}", text);

        Ok(SinkResponse::from_body(text))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::sync::mpsc;
    use std::thread;

    use super::{create, CatalogSink, SinkResponse};
    use crate::models::{CatalogRecord, LibraryExtra};

    fn record() -> CatalogRecord {
        CatalogRecord {
            id: Some(9781234567897),
            filepath: "/books/Volume 1 - Prologue_9781234567897.pdf".to_string(),
            isbn10: "123456789X".to_string(),
            isbn13: "9781234567897".to_string(),
            isbn_pretty: "978-1-234-56789-7".to_string(),
            md5: "md5".to_string(),
            title: "Prologue".to_string(),
            authors: vec!["Jane Doe".to_string()],
            cover_url: "http://lndb.info/cover.jpg".to_string(),
            library_extra: LibraryExtra {
                author: "Jane Doe".to_string(),
                coverurl: "http://lndb.info/cover.jpg".to_string(),
                crc32: "d4a1185".to_string(),
                extension: "pdf".to_string(),
                filesize: 11,
                identifier: "9781234567897,123456789X".to_string(),
                md5: "md5".to_string(),
                series: "Novel".to_string(),
                sha1: "sha1".to_string(),
                title: "Prologue".to_string(),
            },
        }
    }

    /// Answers one request with `body` and hands back what it received.
    fn spawn_catalog(
        status: u16,
        body: &'static str,
    ) -> (String, mpsc::Receiver<(String, String, String)>) {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let endpoint = format!("http://{}/api/v2/book", server.server_addr());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if let Ok(mut request) = server.recv() {
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string())
                    .unwrap_or_default();
                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let _ = tx.send((request.url().to_string(), content_type, received));
                let _ = request
                    .respond(tiny_http::Response::from_string(body).with_status_code(status));
            }
        });

        (endpoint, rx)
    }

    #[test]
    fn success_marker_anywhere_in_body() {
        assert!(SinkResponse::from_body(r#"{"success":true}"#.to_string()).success);
        assert!(SinkResponse::from_body(r#"ok {"success":true} done"#.to_string()).success);
        assert!(!SinkResponse::from_body(r#"{"success": true}"#.to_string()).success);
        assert!(!SinkResponse::from_body(r#"{"success":false}"#.to_string()).success);
        assert!(!SinkResponse::from_body(String::new()).success);
    }

    #[test]
    fn submit_posts_json() -> anyhow::Result<()> {
        let (endpoint, rx) = spawn_catalog(200, r#"{"success":true}"#);
        let sink = create(&endpoint)?;

        let response = sink.submit(&record())?;

        assert!(response.success);

        let (path, content_type, body) = rx.recv()?;
        assert_eq!("/api/v2/book", path);
        assert_eq!("application/json; charset=utf-8", content_type);
        assert_eq!(record(), serde_json::from_str::<CatalogRecord>(&body)?);

        Ok(())
    }

    #[test]
    fn submit_failure_body() -> anyhow::Result<()> {
        let (endpoint, _rx) = spawn_catalog(500, r#"{"success":false,"error":"duplicate"}"#);
        let sink = create(&endpoint)?;

        let response = sink.submit(&record())?;

        assert!(!response.success);
        assert!(response.body.contains("duplicate"));

        Ok(())
    }

    #[test]
    fn submit_unreachable_is_error() -> anyhow::Result<()> {
        let sink = create("http://127.0.0.1:1/api/v2/book")?;

        assert!(sink.submit(&record()).is_err());

        Ok(())
    }
}
