//! Example: Requesting and confirming an offer.
//!
//! Reads `BISCOINT_API_KEY` and `BISCOINT_API_SECRET` from the environment
//! (or a `.env` file). The offer is only confirmed when `CONFIRM=1` is set.
//!
//! Run with: cargo run --example offer_flow

use std::sync::Arc;

use biscoint_api_client::auth::EnvCredentials;
use biscoint_api_client::rest::{BiscointApiExt, BiscointClient, OfferRequest, TradesRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BiscointClient::builder()
        .credentials(Arc::new(EnvCredentials::from_env()))
        .build();

    println!("=== Balance ===");
    for (currency, amount) in client.balance().await? {
        println!("{currency}: {amount}");
    }

    println!("\n=== Last Trades ===");
    for trade in client.trades(&TradesRequest::new().length(5)).await? {
        println!("{} {} {} @ {}", trade.date, trade.op, trade.base_amount, trade.ef_price);
    }

    println!("\n=== Offer ===");
    let offer = client.offer(&OfferRequest::buy("50.00", true)).await?;
    println!(
        "{}: {} {} for {} {} (expires {})",
        offer.offer_id, offer.op, offer.base_amount, offer.quote_amount, offer.quote, offer.expires_at
    );

    if std::env::var("CONFIRM").ok().as_deref() == Some("1") {
        let receipt = client.confirm(&offer.offer_id).await?;
        println!("Confirmed at {}", receipt.confirmed_at);
    } else {
        println!("Set CONFIRM=1 to execute this offer.");
    }

    Ok(())
}
