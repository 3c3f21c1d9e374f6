//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BiscointError;
use crate::rest::BiscointClient;
use crate::rest::endpoints::Operation;
use crate::rest::params::Params;

impl BiscointClient {
    /// Get the ticker for a currency pair.
    ///
    /// Bid and ask are priced for the reference `amount` of the request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use biscoint_api_client::rest::{BiscointClient, TickerRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BiscointClient::public();
    ///     let request = TickerRequest::default().amount("0.01").is_quote(false);
    ///     let ticker = client.get_ticker(&request).await?;
    ///     println!("ask: {}", ticker["ask"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, request: &TickerRequest) -> Result<Value, BiscointError> {
        self.call(Operation::Ticker, request.into()).await
    }

    /// Get the fee schedule.
    pub async fn get_fees(&self) -> Result<Value, BiscointError> {
        self.call(Operation::Fees, Params::new()).await
    }

    /// Get API metadata, including per-endpoint rate limits.
    pub async fn get_meta(&self) -> Result<Value, BiscointError> {
        self.call(Operation::Meta, Params::new()).await
    }
}
