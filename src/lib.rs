//! Rust SDK for the Friday API.
//!
//! Friday exposes LinkedIn profile and company analysis, web scraping,
//! crawling, search and AI-based extraction over HTTP. Every call returns the
//! decoded JSON body as-is.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use friday::{Client, ExtractRequest};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), friday::Error> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let result = client
//!         .extract(
//!             ExtractRequest::new("https://supabase.com", "Extract the main features")
//!                 .custom_schema(json!({"features": ["string"]})),
//!         )
//!         .await?;
//!
//!     println!("{:#}", result);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use reqwest::Method;
pub use types::*;
pub use version::SDK_VERSION;
