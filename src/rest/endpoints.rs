//! Biscoint REST API endpoint constants.

use reqwest::Method;

/// Base URL for the Biscoint REST API.
pub const BISCOINT_BASE_URL: &str = "https://api.biscoint.io";

/// API version prefix for every endpoint path.
pub const API_VERSION: &str = "v1";

/// Header carrying the API key on signed requests.
pub const API_KEY_HEADER: &str = "BSCNT-APIKEY";

/// Header carrying the request signature on signed requests.
pub const SIGNATURE_HEADER: &str = "BSCNT-SIGN";

/// Maximum number of trades the exchange returns for one trades request.
pub const MAX_TRADES_LENGTH: u32 = 20;

/// Public endpoints (no authentication required).
pub mod public {
    /// Get ticker.
    pub const TICKER: &str = "v1/ticker";
    /// Get fee schedule.
    pub const FEES: &str = "v1/fees";
    /// Get API metadata and rate limits.
    pub const META: &str = "v1/meta";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account balance.
    pub const BALANCE: &str = "v1/balance";
    /// Get trade history.
    pub const TRADES: &str = "v1/trades";
    /// Create (GET) or confirm (POST) an offer.
    pub const OFFER: &str = "v1/offer";
}

/// Every operation the client can perform against the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Market snapshot.
    Ticker,
    /// Fee schedule.
    Fees,
    /// Endpoint metadata.
    Meta,
    /// Account balance.
    Balance,
    /// Trade history.
    Trades,
    /// Create an offer.
    Offer,
    /// Confirm a previously created offer.
    ConfirmOffer,
}

impl Operation {
    /// All operations, in endpoint table order.
    pub const ALL: [Operation; 7] = [
        Operation::Ticker,
        Operation::Fees,
        Operation::Meta,
        Operation::Balance,
        Operation::Trades,
        Operation::Offer,
        Operation::ConfirmOffer,
    ];

    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Ticker => "ticker",
            Operation::Fees => "fees",
            Operation::Meta => "meta",
            Operation::Balance => "balance",
            Operation::Trades => "trades",
            Operation::Offer => "offer",
            Operation::ConfirmOffer => "confirm_offer",
        }
    }

    /// Versioned endpoint path, e.g. `v1/ticker`.
    ///
    /// This string is also sent (and signed) as the `request` parameter.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Ticker => public::TICKER,
            Operation::Fees => public::FEES,
            Operation::Meta => public::META,
            Operation::Balance => private::BALANCE,
            Operation::Trades => private::TRADES,
            Operation::Offer | Operation::ConfirmOffer => private::OFFER,
        }
    }

    /// HTTP method for this operation.
    pub fn method(&self) -> Method {
        match self {
            Operation::ConfirmOffer => Method::POST,
            _ => Method::GET,
        }
    }

    /// Whether requests for this operation must be signed.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Operation::Ticker | Operation::Fees | Operation::Meta)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table() {
        let table: Vec<_> = Operation::ALL
            .iter()
            .map(|op| (op.path(), op.method(), op.requires_auth()))
            .collect();

        assert_eq!(
            table,
            vec![
                ("v1/ticker", Method::GET, false),
                ("v1/fees", Method::GET, false),
                ("v1/meta", Method::GET, false),
                ("v1/balance", Method::GET, true),
                ("v1/trades", Method::GET, true),
                ("v1/offer", Method::GET, true),
                ("v1/offer", Method::POST, true),
            ]
        );
    }

    #[test]
    fn test_paths_carry_version_prefix() {
        for op in Operation::ALL {
            assert!(op.path().starts_with(API_VERSION));
        }
    }
}
