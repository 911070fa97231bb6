//! Full SDK Demo - calls every Friday endpoint against the live API
//!
//! Failures are reported as warnings and the demo moves on to the next call.
//!
//! Run with: `FRIDAY_API_KEY=your-key cargo run --example full_demo`

use colored::Colorize;
use friday::{
    Client, CrawlRequest, ExtractRequest, ScrapeRequest, SearchRequest, SDK_VERSION,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{json, Value};
use std::future::Future;
use std::time::Duration;

// Configuration - Set via environment variables
fn get_api_key() -> String {
    std::env::var("FRIDAY_API_KEY").expect("FRIDAY_API_KEY environment variable is required")
}
fn get_base_url() -> String {
    std::env::var("FRIDAY_BASE_URL").unwrap_or_else(|_| "https://api.fridaydata.tech".into())
}
const PROFILE_URL: &str = "https://linkedin.com/in/yashpanditrao";
const COMPANY_URL: &str = "https://linkedin.com/company/raisegate";
const SITE_URL: &str = "https://raisegate.com";
const EXTRACT_URL: &str = "https://supabase.com";

fn header(text: &str) {
    println!();
    println!("{}", format!(" {} ", text).on_blue().bold());
    println!();
}

fn info(label: &str, value: &str) {
    println!("  {}: {}", label.dimmed(), value);
}

fn success(text: &str) {
    println!("{} {}", "✔".green(), text);
}

fn warn(text: &str) {
    println!("{} {}", "⚠".yellow(), text);
}

fn print_json(value: &Value) {
    let formatted = serde_json::to_string_pretty(value).unwrap_or_default();
    let preview: String = formatted.lines().take(20).collect::<Vec<_>>().join("\n");
    println!("{}", preview.dimmed());
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn step<F>(title: &str, call: F) -> bool
where
    F: Future<Output = friday::Result<Value>>,
{
    header(title);
    let pb = spinner(&format!("{}...", title));
    let outcome = call.await;
    pb.finish_and_clear();

    match outcome {
        Ok(value) => {
            success(&format!("{} succeeded", title));
            print_json(&value);
            true
        }
        Err(e) => {
            warn(&format!("{} failed: {}", title, e));
            if let Some(message) = e.message() {
                info("Server message", &message);
            }
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), friday::Error> {
    println!();
    println!(
        "{}",
        "╔═══════════════════════════════════════════════════════════╗"
            .magenta()
            .bold()
    );
    println!(
        "{}{}{}",
        "║".magenta().bold(),
        "          Friday Rust SDK - Full Demo                      ".bold(),
        "║".magenta().bold()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════════════════╝"
            .magenta()
            .bold()
    );

    header("Configuration");
    let api_key = get_api_key();
    let base_url = get_base_url();
    info("SDK Version", SDK_VERSION);
    info("Base URL", &base_url);
    info(
        "API Key",
        &format!("{}...", api_key.chars().take(6).collect::<String>()),
    );

    let client = Client::builder(&api_key)
        .base_url(&base_url)
        .user_agent_suffix("full-demo")
        .build()?;

    let mut passed = 0;
    let mut total = 0;
    let mut tally = |ok: bool| {
        total += 1;
        if ok {
            passed += 1;
        }
    };

    tally(step("Status", client.get_status()).await);
    tally(step("Profile", client.get_profile(PROFILE_URL)).await);
    tally(step("Company Analysis", client.analyze_company(COMPANY_URL)).await);
    tally(
        step(
            "Scrape",
            client.scrape(ScrapeRequest::new(SITE_URL).formats(["html", "markdown"])),
        )
        .await,
    );
    tally(
        step(
            "Crawl",
            client.crawl(CrawlRequest::new(SITE_URL).max_pages(2)),
        )
        .await,
    );
    tally(
        step(
            "Search",
            client.search(
                SearchRequest::new("fundraising platforms for startups").num_results(5),
            ),
        )
        .await,
    );
    tally(
        step(
            "Extract",
            client.extract(
                ExtractRequest::new(EXTRACT_URL, "Extract the main features")
                    .custom_schema(json!({"features": [{"name": "string", "summary": "string"}]})),
            ),
        )
        .await,
    );

    header("Summary");
    info("Calls succeeded", &format!("{}/{}", passed, total));

    Ok(())
}
