//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use time::OffsetDateTime;

use crate::rest::params::Params;
use crate::types::{DEFAULT_BASE, DEFAULT_QUOTE};

/// Default amount used to price the ticker.
pub const DEFAULT_TICKER_AMOUNT: &str = "1000.00";

/// Request parameters for the ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRequest {
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Reference amount the bid/ask are priced for.
    pub amount: String,
    /// Whether `amount` is denominated in the quote currency.
    pub is_quote: bool,
}

impl Default for TickerRequest {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            quote: DEFAULT_QUOTE.to_string(),
            amount: DEFAULT_TICKER_AMOUNT.to_string(),
            is_quote: true,
        }
    }
}

impl TickerRequest {
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

    /// Set the reference amount.
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Set whether the amount is in the quote currency.
    pub fn is_quote(mut self, is_quote: bool) -> Self {
        self.is_quote = is_quote;
        self
    }
}

impl From<&TickerRequest> for Params {
    fn from(request: &TickerRequest) -> Self {
        Params::new()
            .with("base", &request.base)
            .with("quote", &request.quote)
            .with("amount", &request.amount)
            .with("isQuote", request.is_quote)
    }
}

/// Market snapshot for a currency pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Traded volume.
    pub vol: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Last traded price.
    pub last: Decimal,
    /// Best ask for the reference amount.
    pub ask: Decimal,
    /// Quote amount the ask was priced for.
    pub ask_quote_amount_ref: Decimal,
    /// Base amount the ask was priced for.
    pub ask_base_amount_ref: Decimal,
    /// Best bid for the reference amount.
    pub bid: Decimal,
    /// Quote amount the bid was priced for.
    pub bid_quote_amount_ref: Decimal,
    /// Base amount the bid was priced for.
    pub bid_base_amount_ref: Decimal,
    /// Snapshot time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Fee schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct Fees {
    /// Withdrawal fees keyed by currency.
    #[serde(default)]
    pub withdrawal: HashMap<String, WithdrawalFee>,
}

/// Withdrawal fee for one currency.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalFee {
    /// Proportional fee rate.
    pub rate: Decimal,
    /// Fixed fees keyed by transfer method (e.g. `slow`, `fast`, `ted`).
    #[serde(default)]
    pub fixed: HashMap<String, Decimal>,
}

/// API metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// API version.
    pub version: String,
    /// Endpoint descriptions keyed by endpoint name, then HTTP method.
    #[serde(default)]
    pub endpoints: HashMap<String, HashMap<String, EndpointMeta>>,
}

/// Description of one endpoint method.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointMeta {
    /// Access type (`public` or `private`).
    #[serde(rename = "type")]
    pub access: String,
    /// Rate limit applied by the exchange.
    #[serde(default)]
    pub rate_limit: Option<RateLimit>,
}

/// Exchange-side rate limit for an endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// Window length in milliseconds.
    pub window_ms: u64,
    /// Requests allowed per window.
    pub max_requests: u64,
    /// Human-readable rate.
    pub rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::params::ParamValue;

    #[test]
    fn test_ticker_request_defaults() {
        let params = Params::from(&TickerRequest::default());
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("base", &ParamValue::Str("BTC".to_string())),
                ("quote", &ParamValue::Str("BRL".to_string())),
                ("amount", &ParamValue::Str("1000.00".to_string())),
                ("isQuote", &ParamValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn test_ticker_deserialize() {
        let json = r#"{
            "base": "BTC",
            "quote": "BRL",
            "vol": 0.07414472,
            "low": 36010.54,
            "high": 36285,
            "last": 36069,
            "ask": 35343.56,
            "askQuoteAmountRef": 1000,
            "askBaseAmountRef": 0.0282937,
            "bid": 35149.76,
            "bidQuoteAmountRef": 1000,
            "bidBaseAmountRef": 0.0284497,
            "timestamp": "2020-01-23T12:26:11.564Z"
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.base, "BTC");
        assert_eq!(ticker.vol, "0.07414472".parse::<Decimal>().unwrap());
        assert_eq!(ticker.high, Decimal::from(36285));
        assert_eq!(ticker.timestamp.year(), 2020);
    }

    #[test]
    fn test_fees_deserialize() {
        let json = r#"{
            "withdrawal": {
                "BTC": { "rate": "0.0", "fixed": { "slow": "0.00005", "normal": "0.00013", "fast": "0.0002" } },
                "BRL": { "rate": "0.0", "fixed": { "ted": "14.90", "sameBankTransfer": "14.90" } }
            }
        }"#;
        let fees: Fees = serde_json::from_str(json).unwrap();
        assert_eq!(
            fees.withdrawal["BRL"].fixed["ted"],
            "14.90".parse::<Decimal>().unwrap()
        );
        assert_eq!(fees.withdrawal["BTC"].fixed.len(), 3);
    }

    #[test]
    fn test_meta_deserialize() {
        let json = r#"{
            "version": "v1",
            "endpoints": {
                "ticker": {
                    "get": {
                        "type": "public",
                        "rateLimit": { "windowMs": 60000, "maxRequests": 6000, "rate": "6000 per 1 minute" }
                    }
                }
            }
        }"#;
        let meta: Meta = serde_json::from_str(json).unwrap();
        let get = &meta.endpoints["ticker"]["get"];
        assert_eq!(get.access, "public");
        assert_eq!(get.rate_limit.as_ref().unwrap().max_requests, 6000);
    }
}
