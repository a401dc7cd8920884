// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Query string pairs for a GET request.
pub type Query<'a> = [(&'a str, String)];

/// Blocking HTTP GET capability.
///
/// Implementations know nothing about caching; the resolvers decide when to
/// call them.
pub trait PageFetcher {
    /// GET `url` with `query` appended and return the body of a 2xx response.
    fn get_text(&self, url: &str, query: &Query<'_>) -> Result<String>;

    /// Fetch a page and parse it as HTML.
    fn fetch_page(&self, url: &str) -> Result<Html> {
        let text = self.get_text(url, &[])?;
        Ok(Html::parse_document(&text))
    }

    /// Fetch a JSON document without validating its shape.
    fn fetch_json(&self, url: &str, query: &Query<'_>) -> Result<Value> {
        let text = self.get_text(url, query)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn get_text(&self, url: &str, query: &Query<'_>) -> Result<String> {
        (**self).get_text(url, query)
    }
}

/// Create a configured HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// `PageFetcher` backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn get_text(&self, url: &str, query: &Query<'_>) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }
        Ok(response.text()?)
    }
}
