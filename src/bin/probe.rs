use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;
use serde_json::Value;

use daylog::modules::config::Config;

// Operator diagnostic: show exactly what the enrichment endpoint returns.
// Unlike the fetcher, every failure here is reported.
#[tokio::main]
pub async fn main() -> Result<()> {
    dotenv().ok();
    let cfg = Config::parse();

    let client = Client::new();
    let response = client
        .get(cfg.endpoint.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", cfg.endpoint))?;

    // --- Print Response Details ---
    println!("Status: {}", response.status());
    println!("HTTP Version: {:?}", response.version());
    println!("---");

    println!("Headers:\n{:#?}", response.headers());
    println!("---");

    // `.text()` consumes the response, so it comes last
    let body = response.text().await?;
    match serde_json::from_str::<Value>(&body) {
        Ok(json) => {
            println!("Body:\n{}", serde_json::to_string_pretty(&json)?);
            match json.get("title").and_then(|v| v.as_str()) {
                Some(title) => println!("---\ntitle: {}", title),
                None => println!("---\nno `title` field"),
            }
        }
        Err(_) => println!("Body (not JSON):\n{}", body),
    }

    Ok(())
}
