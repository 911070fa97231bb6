//! Request payloads for the Friday API.
//!
//! Responses are returned as [`serde_json::Value`]; their shape is defined by
//! the server.

use serde::Serialize;
use serde_json::Value;

/// Output format requested when no formats are given.
pub const DEFAULT_FORMAT: &str = "html";

/// Page limit for crawls when none is given.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Search location when none is given.
pub const DEFAULT_LOCATION: &str = "US";

/// Number of search results when none is given.
pub const DEFAULT_NUM_RESULTS: u32 = 15;

fn default_formats() -> Vec<String> {
    vec![DEFAULT_FORMAT.to_string()]
}

/// Request for analyzing a company.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AnalyzeCompanyRequest {
    /// Company's LinkedIn URL.
    pub linkedin_url: String,
}

/// Request for scraping a single page.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    /// URL to scrape.
    pub url: String,
    /// Output formats, e.g. `html`, `markdown`, `text`, `links`.
    pub formats: Vec<String>,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            formats: default_formats(),
        }
    }
}

impl ScrapeRequest {
    /// Scrape `url` with the default formats.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the output formats.
    pub fn formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }
}

/// Request for crawling a site from a starting URL.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlRequest {
    /// Starting URL.
    pub url: String,
    /// Output formats for each page.
    pub formats: Vec<String>,
    /// Maximum number of pages to crawl.
    pub max_pages: u32,
}

impl Default for CrawlRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            formats: default_formats(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl CrawlRequest {
    /// Crawl from `url` with the default formats and page limit.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the output formats.
    pub fn formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page limit.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Request for a web search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query.
    pub query: String,
    /// Country code for the search location, e.g. `US`, `UK`.
    pub location: String,
    /// Number of results to return.
    pub num_results: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            num_results: DEFAULT_NUM_RESULTS,
        }
    }
}

impl SearchRequest {
    /// Search for `query` with the default location and result count.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the search location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the number of results.
    pub fn num_results(mut self, num_results: u32) -> Self {
        self.num_results = num_results;
        self
    }
}

/// Request for AI-based extraction from a page.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ExtractRequest {
    /// Website URL to analyze.
    pub url: String,
    /// What information to extract.
    pub query: String,
    /// Shape of the expected output, sent verbatim. Object or array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_schema: Option<Value>,
}

impl ExtractRequest {
    /// Extract `query` from `url` without a custom schema.
    pub fn new(url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: query.into(),
            custom_schema: None,
        }
    }

    /// Attach a custom output schema.
    pub fn custom_schema(mut self, schema: Value) -> Self {
        self.custom_schema = Some(schema);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scrape_defaults() {
        let body = serde_json::to_value(ScrapeRequest::new("https://a.com")).unwrap();
        assert_eq!(body, json!({"url": "https://a.com", "formats": ["html"]}));
    }

    #[test]
    fn test_crawl_overrides() {
        let req = CrawlRequest::new("https://a.com")
            .formats(["markdown"])
            .max_pages(5);
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"url": "https://a.com", "formats": ["markdown"], "max_pages": 5})
        );

        let body = serde_json::to_value(CrawlRequest::new("https://a.com")).unwrap();
        assert_eq!(body["max_pages"], json!(10));
    }

    #[test]
    fn test_search_defaults() {
        let body = serde_json::to_value(SearchRequest::new("rust sdk")).unwrap();
        assert_eq!(
            body,
            json!({"query": "rust sdk", "location": "US", "num_results": 15})
        );
    }

    #[test]
    fn test_extract_custom_schema_omitted() {
        let body = serde_json::to_value(ExtractRequest::new("https://a.com", "q")).unwrap();
        assert_eq!(body, json!({"url": "https://a.com", "query": "q"}));
        assert!(body.get("custom_schema").is_none());

        let schema = json!([{"name": "string"}]);
        let body = serde_json::to_value(
            ExtractRequest::new("https://a.com", "q").custom_schema(schema.clone()),
        )
        .unwrap();
        assert_eq!(body["custom_schema"], schema);
    }
}
