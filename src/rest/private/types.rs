//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use time::OffsetDateTime;

use crate::rest::params::Params;
use crate::types::{DEFAULT_BASE, DEFAULT_QUOTE, Side};

/// Account balance, keyed by currency.
pub type Balance = HashMap<String, Decimal>;

/// Request parameters for trade history.
///
/// Unset fields are omitted from the request; the exchange then applies its
/// own defaults (currently the last 10 trades of either side).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesRequest {
    /// Only return trades on this side.
    pub op: Option<Side>,
    /// Number of trades to return, at most [`MAX_TRADES_LENGTH`](crate::rest::endpoints::MAX_TRADES_LENGTH).
    pub length: Option<u32>,
}

impl TradesRequest {
    /// Create a request with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by side.
    pub fn op(mut self, op: Side) -> Self {
        self.op = Some(op);
        self
    }

    /// Limit the number of trades returned.
    ///
    /// Values above [`MAX_TRADES_LENGTH`](crate::rest::endpoints::MAX_TRADES_LENGTH)
    /// are sent as given; the exchange rejects or clamps them.
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
}

impl From<&TradesRequest> for Params {
    fn from(request: &TradesRequest) -> Self {
        Params::new()
            .with("op", request.op)
            .with("length", request.length)
    }
}

/// A trade in the account history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade ID.
    pub id: String,
    /// Side.
    pub op: Side,
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Amount in base currency.
    pub base_amount: Decimal,
    /// Amount in quote currency.
    pub quote_amount: Decimal,
    /// Key that executed the trade.
    #[serde(default)]
    pub api_key_id: Option<String>,
    /// Effective price.
    pub ef_price: Decimal,
    /// Execution time.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Request parameters for creating an offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRequest {
    /// Buy or sell the base currency.
    pub op: Side,
    /// Amount to trade.
    pub amount: String,
    /// Whether `amount` is denominated in the quote currency.
    pub is_quote: bool,
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
}

impl OfferRequest {
    /// Create an offer request for the default BTC/BRL pair.
    pub fn new(op: Side, amount: impl Into<String>, is_quote: bool) -> Self {
        Self {
            op,
            amount: amount.into(),
            is_quote,
            base: DEFAULT_BASE.to_string(),
            quote: DEFAULT_QUOTE.to_string(),
        }
    }

    /// Buy offer.
    pub fn buy(amount: impl Into<String>, is_quote: bool) -> Self {
        Self::new(Side::Buy, amount, is_quote)
    }

    /// Sell offer.
    pub fn sell(amount: impl Into<String>, is_quote: bool) -> Self {
        Self::new(Side::Sell, amount, is_quote)
    }

    /// Set the base currency.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set the quote currency.
    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }
}

impl From<&OfferRequest> for Params {
    fn from(request: &OfferRequest) -> Self {
        Params::new()
            .with("op", request.op)
            .with("amount", &request.amount)
            .with("isQuote", request.is_quote)
            .with("base", &request.base)
            .with("quote", &request.quote)
    }
}

/// A time-limited quote that can be confirmed to execute the trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Offer ID, passed to `confirm_offer`.
    pub offer_id: String,
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Side.
    pub op: Side,
    /// Whether the requested amount was in the quote currency.
    pub is_quote: bool,
    /// Amount in base currency.
    pub base_amount: Decimal,
    /// Amount in quote currency.
    pub quote_amount: Decimal,
    /// Effective price.
    pub ef_price: Decimal,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The offer can no longer be confirmed after this time.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// Key that created the offer.
    #[serde(default)]
    pub api_key_id: Option<String>,
}

impl Offer {
    /// Check if the offer has expired at the given instant.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

/// Receipt for a confirmed offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferReceipt {
    /// Offer ID.
    pub offer_id: String,
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Side.
    pub op: Side,
    /// Whether the requested amount was in the quote currency.
    pub is_quote: bool,
    /// Amount in base currency.
    pub base_amount: Decimal,
    /// Amount in quote currency.
    pub quote_amount: Decimal,
    /// Effective price.
    pub ef_price: Decimal,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Confirmation time.
    #[serde(with = "time::serde::rfc3339")]
    pub confirmed_at: OffsetDateTime,
    /// Key that confirmed the offer.
    #[serde(default)]
    pub api_key_id: Option<String>,
}
