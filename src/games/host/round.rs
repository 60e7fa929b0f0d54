//! Recorded rounds for the host/banker sheet.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::HostConfig;
use crate::core::player::PlayerId;
use crate::games::json::{int_field, player_field};

/// Smallest and largest multiplier a result can carry.
pub const MULTIPLIER_RANGE: std::ops::RangeInclusive<u32> = 1..=99;

/// How a player fared against the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    #[default]
    Draw,
}

impl Outcome {
    /// Parse a stored result; anything unrecognized is a draw.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "win" => Outcome::Win,
            "lose" => Outcome::Lose,
            _ => Outcome::Draw,
        }
    }
}

/// One player's result against the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub result: Outcome,
    pub multiplier: u32,
}

impl PlayerResult {
    /// Create a result, clamping the multiplier into [`MULTIPLIER_RANGE`].
    #[must_use]
    pub fn new(result: Outcome, multiplier: u32) -> Self {
        Self {
            result,
            multiplier: multiplier.clamp(*MULTIPLIER_RANGE.start(), *MULTIPLIER_RANGE.end()),
        }
    }

    #[must_use]
    pub fn win(multiplier: u32) -> Self {
        Self::new(Outcome::Win, multiplier)
    }

    #[must_use]
    pub fn lose(multiplier: u32) -> Self {
        Self::new(Outcome::Lose, multiplier)
    }

    #[must_use]
    pub fn draw() -> Self {
        Self::new(Outcome::Draw, 1)
    }
}

impl Default for PlayerResult {
    fn default() -> Self {
        Self::draw()
    }
}

/// A recorded host round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRound {
    pub host_id: PlayerId,
    pub results: FxHashMap<PlayerId, PlayerResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_snapshot: Option<HostConfig>,
}

impl HostRound {
    /// A round hosted by `host` with no results yet.
    pub fn new(host: impl Into<PlayerId>) -> Self {
        Self {
            host_id: host.into(),
            results: FxHashMap::default(),
            config_snapshot: None,
        }
    }

    /// Record `player`'s result, replacing any earlier one.
    #[must_use]
    pub fn with_result(mut self, player: impl Into<PlayerId>, result: PlayerResult) -> Self {
        self.results.insert(player.into(), result);
        self
    }

    /// Attach a config snapshot, replacing any existing one.
    #[must_use]
    pub fn with_snapshot(mut self, config: HostConfig) -> Self {
        self.config_snapshot = Some(config);
        self
    }

    /// Normalize a stored round. Never fails.
    ///
    /// Unknown results read as draws and multipliers are clamped into range.
    #[must_use]
    pub fn migrate(raw: &Value) -> Self {
        let results = raw
            .get("results")
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, entry)| entry.is_object())
                    .map(|(id, entry)| {
                        let result = entry.get("result").and_then(Value::as_str).map_or(Outcome::Draw, Outcome::parse);
                        let multiplier = int_field(entry, "multiplier")
                            .map_or(1, |m| m.clamp(1, i64::from(*MULTIPLIER_RANGE.end())) as u32);
                        (PlayerId::new(id.as_str()), PlayerResult::new(result, multiplier))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host_id: player_field(raw, "hostId"),
            results,
            config_snapshot: raw
                .get("configSnapshot")
                .filter(|v| v.is_object())
                .map(HostConfig::migrate),
        }
    }
}
