//! Common domain types for Biscoint API.

use serde::{Deserialize, Serialize};

/// Default base currency for market and offer requests.
pub const DEFAULT_BASE: &str = "BTC";

/// Default quote currency for market and offer requests.
pub const DEFAULT_QUOTE: &str = "BRL";

/// Buy or sell side of a trade or offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy the base currency
    Buy,
    /// Sell the base currency
    Sell,
}

impl Side {
    /// The wire representation of this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side: {other}")),
        }
    }
}
