//! Example: Fetching public market data from Biscoint.
//!
//! This example demonstrates how to fetch publicly available market data
//! without authentication.
//!
//! Run with: cargo run --example public_data

use biscoint_api_client::rest::{BiscointApiExt, BiscointClient, TickerRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = BiscointClient::public();

    // Raw ticker payload, exactly as the exchange returned it
    println!("=== Ticker (raw) ===");
    let raw = client.get_ticker(&TickerRequest::default()).await?;
    println!("{}", serde_json::to_string_pretty(&raw)?);

    // Same endpoint, priced for 0.01 BTC and decoded
    println!("\n=== Ticker (0.01 BTC) ===");
    let request = TickerRequest::default().amount("0.01").is_quote(false);
    let ticker = client.ticker(&request).await?;
    println!("{}/{}: bid={} ask={} last={}", ticker.base, ticker.quote, ticker.bid, ticker.ask, ticker.last);

    println!("\n=== Withdrawal Fees ===");
    let fees = client.fees().await?;
    for (currency, fee) in &fees.withdrawal {
        println!("{}: rate={} fixed={:?}", currency, fee.rate, fee.fixed);
    }

    println!("\n=== Rate Limits ===");
    let meta = client.meta().await?;
    for (endpoint, methods) in &meta.endpoints {
        for (method, info) in methods {
            let rate = info.rate_limit.as_ref().map(|r| r.rate.as_str()).unwrap_or("-");
            println!("{} {} ({}): {}", method.to_uppercase(), endpoint, info.access, rate);
        }
    }

    Ok(())
}
