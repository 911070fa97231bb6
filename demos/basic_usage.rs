//! Basic usage example.
//!
//! Checks the API key status, then scrapes a page as markdown.
//!
//! Run with: `FRIDAY_API_KEY=your-key cargo run --example basic_usage`

use friday::{Client, ScrapeRequest};

#[tokio::main]
async fn main() -> Result<(), friday::Error> {
    // Create a client with your API key
    let api_key = std::env::var("FRIDAY_API_KEY").expect("FRIDAY_API_KEY must be set");
    let client = Client::new(api_key)?;

    // Rate limit information for this key
    let status = client.get_status().await?;
    println!("Key status: {:#}", status);

    // Scrape a page, asking for markdown instead of the default html
    let page = client
        .scrape(ScrapeRequest::new("https://example.com").formats(["markdown"]))
        .await?;

    println!("Scraped page: {:#}", page);

    Ok(())
}
