//! HTTP client for the UKFast API

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::api::params::RequestParameters;
use crate::api::response::{ApiResponse, ErrorResponse};
use crate::config::Config;

const USER_AGENT: &str = concat!("ukfast-cli/", env!("CARGO_PKG_VERSION"));

/// UKFast API client
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn url(&self, segments: &[&str], query: &[(String, String)]) -> Result<Url> {
        let base = self.config.base_url();
        let mut url = Url::parse(&base).with_context(|| format!("Invalid API URL {}", base))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid API URL {}", base))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Build request with authentication headers
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        for (key, value) in self.config.auth_headers() {
            req = req.header(key, value);
        }

        req.header("Accept", "application/json")
    }

    /// Send a request, mapping non-2xx statuses to an error
    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        trace!("Error response: {}", text);

        let detail = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .and_then(|body| body.summary())
            .unwrap_or(text);

        Err(anyhow!("API error ({}): {}", status, detail))
    }

    /// Make a GET request to the API
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(String, String)],
    ) -> Result<ApiResponse<T>> {
        let url = self.url(path, query)?;
        debug!("GET {}", url);

        let response = self.send(self.build_request(Method::GET, url)).await?;
        let text = response.text().await?;
        trace!("Response: {}", text);

        let api_response: ApiResponse<T> = serde_json::from_str(&text)?;
        Ok(api_response)
    }

    /// GET every page of a list endpoint, in page order
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: &[&str],
        params: &RequestParameters,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let response: ApiResponse<Vec<T>> =
                self.get(path, &params.with_page(page).query_pairs()).await?;
            let total_pages = response.total_pages();
            items.extend(response.data);

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!("Retrieved {} items from {} page(s)", items.len(), page);
        Ok(items)
    }

    /// Make a POST request without body, discarding any response body
    pub async fn post_empty(&self, path: &[&str]) -> Result<()> {
        let url = self.url(path, &[])?;
        debug!("POST {}", url);

        self.send(self.build_request(Method::POST, url)).await?;
        Ok(())
    }

    /// GET a file, returning its content and the server-suggested filename
    pub async fn download(&self, path: &[&str]) -> Result<(String, Option<String>)> {
        let url = self.url(path, &[])?;
        debug!("GET (download) {}", url);

        let response = self.send(self.build_request(Method::GET, url)).await?;
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_filename);

        let content = response.text().await?;
        Ok((content, filename))
    }
}

/// Extract `filename` from a Content-Disposition header value
fn disposition_filename(header: &str) -> Option<String> {
    header.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let value = value.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}
