//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every request is signed and carries the `BSCNT-APIKEY` and `BSCNT-SIGN`
//! headers.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BiscointError;
use crate::rest::BiscointClient;
use crate::rest::endpoints::Operation;
use crate::rest::params::Params;

impl BiscointClient {
    /// Get account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use biscoint_api_client::rest::BiscointClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BiscointClient::new("key", "secret");
    ///
    ///     let balance = client.get_balance().await?;
    ///     println!("BRL: {}", balance["BRL"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance(&self) -> Result<Value, BiscointError> {
        self.call(Operation::Balance, Params::new()).await
    }

    /// Get the most recent trades, newest first.
    ///
    /// `op` and `length` are only sent when set.
    pub async fn get_trades(&self, request: &TradesRequest) -> Result<Value, BiscointError> {
        self.call(Operation::Trades, request.into()).await
    }

    /// Request an offer.
    ///
    /// The returned offer carries an `offerId` and an `expiresAt` deadline
    /// for [`confirm_offer`](Self::confirm_offer).
    pub async fn get_offer(&self, request: &OfferRequest) -> Result<Value, BiscointError> {
        self.call(Operation::Offer, request.into()).await
    }

    /// Confirm an offer and execute the trade.
    pub async fn confirm_offer(&self, offer_id: &str) -> Result<Value, BiscointError> {
        let params = Params::new().with("offerId", offer_id);
        self.call(Operation::ConfirmOffer, params).await
    }
}
