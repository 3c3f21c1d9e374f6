//! Trait definitions for the Biscoint REST API client.
//!
//! [`BiscointApi`] abstracts every REST operation. Each method has a default
//! body that fails with [`BiscointError::Unsupported`] without touching the
//! network, so a partial implementation (a mock, a read-only facade) only
//! overrides what it supports.
//!
//! [`BiscointApiExt`] is implemented for every `BiscointApi` and decodes the
//! returned `data` into typed models.
//!
//! # Example
//!
//! ```rust,ignore
//! use biscoint_api_client::rest::{BiscointApi, BiscointApiExt, BiscointClient, TickerRequest};
//!
//! async fn last_price<C: BiscointApi>(client: &C) -> Result<(), biscoint_api_client::BiscointError> {
//!     let ticker = client.ticker(&TickerRequest::default()).await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BiscointError;
use crate::rest::endpoints::Operation;
use crate::rest::private::{Balance, Offer, OfferReceipt, OfferRequest, Trade, TradesRequest};
use crate::rest::public::{Fees, Meta, Ticker, TickerRequest};

/// Trait defining all Biscoint REST API operations.
///
/// All methods are async and return the untyped `data` field of the
/// response envelope.
pub trait BiscointApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the ticker for a currency pair.
    fn get_ticker(
        &self,
        _request: &TickerRequest,
    ) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Ticker)
    }

    /// Get the fee schedule.
    fn get_fees(&self) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Fees)
    }

    /// Get API metadata.
    fn get_meta(&self) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Meta)
    }

    // ========== Private Endpoints ==========

    /// Get account balance.
    fn get_balance(&self) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Balance)
    }

    /// Get trade history.
    fn get_trades(
        &self,
        _request: &TradesRequest,
    ) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Trades)
    }

    /// Request an offer.
    fn get_offer(
        &self,
        _request: &OfferRequest,
    ) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::Offer)
    }

    /// Confirm an offer and execute the trade.
    fn confirm_offer(
        &self,
        _offer_id: &str,
    ) -> impl Future<Output = Result<Value, BiscointError>> + Send {
        unsupported(Operation::ConfirmOffer)
    }
}

fn unsupported(
    operation: Operation,
) -> impl Future<Output = Result<Value, BiscointError>> + Send {
    std::future::ready(Err(BiscointError::Unsupported(operation)))
}

/// Decode an untyped `data` payload into a typed model.
pub fn from_data<T: DeserializeOwned>(data: Value) -> Result<T, BiscointError> {
    Ok(serde_json::from_value(data)?)
}

/// Typed variants of the [`BiscointApi`] operations.
pub trait BiscointApiExt: BiscointApi {
    /// Get the ticker as a [`Ticker`].
    fn ticker(
        &self,
        request: &TickerRequest,
    ) -> impl Future<Output = Result<Ticker, BiscointError>> + Send {
        async move { from_data(self.get_ticker(request).await?) }
    }

    /// Get the fee schedule as [`Fees`].
    fn fees(&self) -> impl Future<Output = Result<Fees, BiscointError>> + Send {
        async move { from_data(self.get_fees().await?) }
    }

    /// Get API metadata as [`Meta`].
    fn meta(&self) -> impl Future<Output = Result<Meta, BiscointError>> + Send {
        async move { from_data(self.get_meta().await?) }
    }

    /// Get account balance as a [`Balance`] map.
    fn balance(&self) -> impl Future<Output = Result<Balance, BiscointError>> + Send {
        async move { from_data(self.get_balance().await?) }
    }

    /// Get trade history as [`Trade`]s, newest first.
    fn trades(
        &self,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<Vec<Trade>, BiscointError>> + Send {
        async move { from_data(self.get_trades(request).await?) }
    }

    /// Request an [`Offer`].
    fn offer(
        &self,
        request: &OfferRequest,
    ) -> impl Future<Output = Result<Offer, BiscointError>> + Send {
        async move { from_data(self.get_offer(request).await?) }
    }

    /// Confirm an offer, returning its [`OfferReceipt`].
    fn confirm(
        &self,
        offer_id: &str,
    ) -> impl Future<Output = Result<OfferReceipt, BiscointError>> + Send {
        async move { from_data(self.confirm_offer(offer_id).await?) }
    }
}

impl<T: BiscointApi> BiscointApiExt for T {}
