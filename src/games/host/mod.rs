//! Host/banker betting score sheet.
//!
//! - 2-20 players; each round one of them is the host
//! - Every other player wins, loses or draws against the host alone, at a
//!   multiple of the bet unit
//! - Zero-sum every round

mod config;
mod entry;
mod round;
mod scoring;

pub use config::HostConfig;
pub use entry::{suggested_host, HostRoundDraft};
pub use round::{HostRound, Outcome, PlayerResult, MULTIPLIER_RANGE};
pub use scoring::round_points;

use serde_json::Value;

use crate::core::player::{PlayerId, ScoreSheet};
use crate::rules::ScoreRules;

/// Host/banker rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Host;

impl ScoreRules for Host {
    type Config = HostConfig;
    type Round = HostRound;

    const NAME: &'static str = "host";
    const STORAGE_KEY: &'static str = "liarbar-card-score-host";
    const MIN_PLAYERS: usize = 2;
    const MAX_PLAYERS: usize = 20;

    fn default_config(_player_count: usize) -> HostConfig {
        HostConfig::default()
    }

    fn migrate_config(raw: &Value) -> HostConfig {
        HostConfig::migrate(raw)
    }

    fn migrate_round(raw: &Value) -> HostRound {
        HostRound::migrate(raw)
    }

    fn snapshot(round: &HostRound) -> Option<&HostConfig> {
        round.config_snapshot.as_ref()
    }

    fn stamp(round: HostRound, config: &HostConfig) -> HostRound {
        round.with_snapshot(config.clone())
    }

    fn round_points(round: &HostRound, config: &HostConfig, player_ids: &[PlayerId]) -> ScoreSheet {
        round_points(round, config, player_ids)
    }
}
