//! Bet configuration for the host/banker sheet.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::games::json::int_field;

/// Bet unit for the host/banker sheet. Always at least 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    bet_amount: i64,
}

impl HostConfig {
    pub const MIN_BET: i64 = 1;

    /// Create a config, raising the bet to [`Self::MIN_BET`] if needed.
    #[must_use]
    pub fn new(bet_amount: i64) -> Self {
        Self {
            bet_amount: bet_amount.max(Self::MIN_BET),
        }
    }

    #[must_use]
    pub fn bet_amount(&self) -> i64 {
        self.bet_amount
    }

    /// Read `betAmount` when it is a number, else the default.
    #[must_use]
    pub fn migrate(raw: &Value) -> Self {
        int_field(raw, "betAmount").map_or_else(Self::default, Self::new)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bet_amount: 1 }
    }
}
