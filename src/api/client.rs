/// HTTP client for the Unsplash photo search API
///
/// Wraps a shared `reqwest::Client` (cheap to clone) together with the
/// resolved configuration. Both operations are async and meant to be run
/// through `iced::Task::perform` on the tokio executor.

use crate::config::{Config, IMAGES_PER_PAGE, USER_AGENT};
use crate::error::Result;
use crate::state::data::{SearchPage, SearchResponse};

/// Client for searching photos and downloading their thumbnails
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    config: Config,
}

impl UnsplashClient {
    /// Build a client for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the GET request for one page of results.
    ///
    /// # Arguments
    /// * `query` - Search term (url-encoded by reqwest)
    /// * `page` - 1-based page number
    pub fn search_request(&self, query: &str, page: u32) -> Result<reqwest::Request> {
        let page = page.to_string();
        let per_page = IMAGES_PER_PAGE.to_string();

        let request = self
            .http
            .get(&self.config.api_url)
            .query(&[
                ("query", query),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("client_id", self.config.access_key.as_str()),
            ])
            .build()?;
        Ok(request)
    }

    /// Fetch one page of search results.
    ///
    /// Transport errors, non-2xx statuses and malformed bodies all come back
    /// as `SearchError`; the body of a failed response is never parsed.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage> {
        let request = self.search_request(query, page)?;
        let response = self.http.execute(request).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let body: SearchResponse = serde_json::from_slice(&bytes)?;
        Ok(body.into())
    }

    /// Download the raw bytes of a thumbnail
    pub async fn download_thumbnail(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
