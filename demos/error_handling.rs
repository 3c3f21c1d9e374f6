//! Example: Working with BiscointError.
//!
//! Run with: cargo run --example error_handling

use biscoint_api_client::rest::BiscointClient;
use biscoint_api_client::{BiscointError, Operation};

#[tokio::main]
async fn main() {
    // A read-only deployment: offers can be quoted but never confirmed.
    let client = BiscointClient::builder()
        .disable(Operation::ConfirmOffer)
        .build();

    match client.confirm_offer("some-offer-id").await {
        Err(BiscointError::Unsupported(op)) => println!("Rejected locally: {op}"),
        other => println!("Unexpected: {other:?}"),
    }

    // No credentials configured, so signed endpoints fail before any request.
    match client.get_balance().await {
        Err(BiscointError::MissingCredentials) => println!("Balance needs credentials"),
        other => println!("Unexpected: {other:?}"),
    }

    let err = BiscointError::Status {
        status: 401,
        body: r#"{"message":"Invalid signature"}"#.to_string(),
    };
    println!("{err} (client error: {})", err.is_client_error());
}
