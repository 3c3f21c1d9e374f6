//! # Biscoint Client
//!
//! An async Rust client library for the Biscoint exchange REST API.
//!
//! ## Features
//!
//! - Public market data: ticker, fees, API metadata
//! - Signed trading endpoints: balance, trade history, offers
//! - HMAC-SHA256 request signing compatible with the exchange's reference signer
//! - Untyped `data` payloads, with optional typed decoding
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use biscoint_api_client::rest::{BiscointClient, TickerRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BiscointClient::public();
//!     let ticker = client.get_ticker(&TickerRequest::default()).await?;
//!     println!("Ticker: {ticker}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BiscointError;
pub use rest::{BiscointApi, BiscointApiExt, BiscointClient, Operation};
pub use types::Side;

/// Result type alias using BiscointError
pub type Result<T> = std::result::Result<T, BiscointError>;
