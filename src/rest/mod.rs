//! Biscoint REST API client.
//!
//! Provides access to the Biscoint market-data and trading endpoints.
//!
//! # Trait-based API
//!
//! The [`BiscointApi`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Restricted facades that reject some operations as unsupported
//! - Typed decoding through [`BiscointApiExt`]
//!
//! ```rust,ignore
//! use biscoint_api_client::rest::{BiscointApi, BiscointClient};
//!
//! async fn use_client<C: BiscointApi>(client: &C) -> Result<(), biscoint_api_client::BiscointError> {
//!     let fees = client.get_fees().await?;
//!     println!("Fees: {fees}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod params;
pub mod private;
pub mod public;
mod traits;

pub use client::{BiscointClient, BiscointClientBuilder, DEFAULT_TIMEOUT};
pub use endpoints::{
    API_KEY_HEADER, API_VERSION, BISCOINT_BASE_URL, MAX_TRADES_LENGTH, Operation, SIGNATURE_HEADER,
};
pub use params::{ParamValue, Params, REQUEST_KEY};
pub use private::{Balance, Offer, OfferReceipt, OfferRequest, Trade, TradesRequest};
pub use public::{Fees, Meta, Ticker, TickerRequest};
pub use traits::{BiscointApi, BiscointApiExt, from_data};
