//! Main Friday client implementation.

use crate::error::{Error, Result};
use crate::types::*;
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.fridaydata.tech";
const API_KEY_HEADER: &str = "x-api-key";

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent_suffix: None,
        }
    }

    /// Set the API base URL. Trailing slashes are dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout. Requests have no client-side timeout otherwise.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key is required".into()));
        }
        if self.base_url.is_empty() {
            return Err(Error::Config("base URL must not be empty".into()));
        }

        if !self.base_url.starts_with("https://") {
            warn!(
                base_url = %self.base_url,
                "API base URL is not using HTTPS. This is insecure."
            );
        }

        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|_| Error::Config("User-Agent is not a valid header value".into()))?,
        );

        let mut http_client = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }
        let http_client = http_client.build().map_err(Error::Transport)?;

        Ok(Client {
            base_url: self.base_url,
            http_client,
        })
    }
}

/// The Friday API client.
///
/// Holds the base URL and a connection pool whose default headers carry the
/// API key. Cloning is cheap and shares the pool.
///
/// # Example
///
/// ```rust,no_run
/// use friday::{Client, ScrapeRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), friday::Error> {
///     let client = Client::new("your-api-key")?;
///
///     let page = client
///         .scrape(ScrapeRequest::new("https://example.com").formats(["markdown"]))
///         .await?;
///
///     println!("{}", page);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// The normalized base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and analyze a LinkedIn profile.
    pub async fn get_profile(&self, profile_url: &str) -> Result<Value> {
        let query = [("profile_url", profile_url)];
        self.request(Method::GET, "/profile", Some(&query[..]), None::<&()>)
            .await
    }

    /// Analyze a company from its LinkedIn URL.
    pub async fn analyze_company(&self, linkedin_url: &str) -> Result<Value> {
        let request = AnalyzeCompanyRequest {
            linkedin_url: linkedin_url.to_string(),
        };
        self.post("/analyze-company", &request).await
    }

    /// Scrape a single page.
    pub async fn scrape(&self, request: ScrapeRequest) -> Result<Value> {
        self.post("/scrape", &request).await
    }

    /// Crawl a site starting from a URL.
    pub async fn crawl(&self, request: CrawlRequest) -> Result<Value> {
        self.post("/crawl", &request).await
    }

    /// Run a web search.
    pub async fn search(&self, request: SearchRequest) -> Result<Value> {
        self.post("/search", &request).await
    }

    /// Extract information from a page using AI.
    pub async fn extract(&self, request: ExtractRequest) -> Result<Value> {
        self.post("/extract", &request).await
    }

    /// Get the API key's status and rate limit information.
    pub async fn get_status(&self) -> Result<Value> {
        self.request(Method::GET, "/status", None, None::<&()>).await
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value> {
        self.request(Method::POST, endpoint, None, Some(body)).await
    }

    /// Send one request and decode the JSON response.
    ///
    /// `endpoint` is joined to the base URL with exactly one `/`, whether or
    /// not it starts with one. Non-success statuses become [`Error::Http`];
    /// nothing is retried.
    pub async fn request<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = join_url(&self.base_url, endpoint);
        debug!(method = %method, url = %url, "Sending request");

        let mut req = self.http_client.request(method, &url);
        if let Some(q) = query {
            req = req.query(q);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let response = req.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = %status, url = %url, "Received response");

        if !status.is_success() {
            warn!(status = %status, url = %url, "Request failed");
            return Err(Error::from_response(response).await);
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url, endpoint.trim_start_matches('/'))
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://x.test", "/status"), "https://x.test/status");
        assert_eq!(join_url("https://x.test", "status"), "https://x.test/status");
        assert_eq!(
            join_url("https://x.test/api", "/analyze-company"),
            "https://x.test/api/analyze-company"
        );
    }

    #[test]
    fn test_base_url_normalized() {
        let a = Client::builder("key").base_url("https://x.test/").build().unwrap();
        let b = Client::builder("key").base_url("https://x.test").build().unwrap();
        assert_eq!(a.base_url(), "https://x.test");
        assert_eq!(a.base_url(), b.base_url());
    }

    #[test]
    fn test_default_base_url() {
        let client = Client::new("key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_rejects_bad_config() {
        assert!(matches!(Client::new(""), Err(Error::Config(_))));
        assert!(matches!(
            Client::builder("key").base_url("///").build(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Client::new("bad\nkey"),
            Err(Error::Config(_))
        ));
    }
}
