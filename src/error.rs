//! Error types for the Friday SDK.

use thiserror::Error;

/// Result type for Friday operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Friday SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or transport failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl Error {
    /// Build an HTTP error from a non-success response, keeping the raw body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Error::Http { status, body }
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an HTTP error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human readable message from a JSON error body.
    ///
    /// Looks at the `message`, `error` and `detail` fields in that order.
    pub fn message(&self) -> Option<String> {
        let body: serde_json::Value = serde_json::from_str(self.body()?).ok()?;
        ["message", "error", "detail"]
            .iter()
            .find_map(|key| body.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// True when the API key was rejected.
    pub fn is_authentication(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the key's rate limit was hit.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> Error {
        Error::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_and_body() {
        let err = http(401, r#"{"detail":"Invalid API key"}"#);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(r#"{"detail":"Invalid API key"}"#));
        assert!(err.is_authentication());
        assert!(!err.is_rate_limited());

        let err = Error::Config("nope".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }

    #[test]
    fn test_message() {
        assert_eq!(
            http(400, r#"{"message":"bad url","error":"x"}"#).message(),
            Some("bad url".to_string())
        );
        assert_eq!(
            http(429, r#"{"error":"Rate limit exceeded"}"#).message(),
            Some("Rate limit exceeded".to_string())
        );
        assert_eq!(
            http(401, r#"{"detail":"Invalid API key"}"#).message(),
            Some("Invalid API key".to_string())
        );
        assert_eq!(http(502, "<html>Bad Gateway</html>").message(), None);
        assert_eq!(http(500, r#"{"code":1}"#).message(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            http(404, "not found").to_string(),
            "HTTP error (404): not found"
        );
    }
}
