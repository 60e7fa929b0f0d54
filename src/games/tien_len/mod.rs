//! Trick-taking score sheet (Tiến Lên).
//!
//! - 2-4 players, ranked 1st to last each round
//! - Catching a player's twos or bombs moves points from victim to catcher
//! - Being left holding them costs points
//! - A sweep, or everyone but the winner being stuck, pays the winner from
//!   every other player

mod config;
mod entry;
mod migrate;
mod round;
mod scoring;

pub use config::{CatchType, TienLenConfig};
pub use entry::{validate_order, RoundDraft};
pub use migrate::migrate_round;
pub use round::{CatchEvent, CatchItem, LastHeld, Round, RoundOutcome};
pub use scoring::round_points;

use serde_json::Value;

use crate::core::player::{PlayerId, ScoreSheet};
use crate::rules::ScoreRules;

/// Trick-taking rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TienLen;

impl ScoreRules for TienLen {
    type Config = TienLenConfig;
    type Round = Round;

    const NAME: &'static str = "tienlen";
    const STORAGE_KEY: &'static str = "liarbar-card-score-tienlen";
    const MIN_PLAYERS: usize = 2;
    const MAX_PLAYERS: usize = 4;

    fn default_config(player_count: usize) -> TienLenConfig {
        TienLenConfig::for_player_count(player_count)
    }

    fn migrate_config(raw: &Value) -> TienLenConfig {
        TienLenConfig::migrate(raw)
    }

    fn migrate_round(raw: &Value) -> Round {
        migrate_round(raw)
    }

    fn snapshot(round: &Round) -> Option<&TienLenConfig> {
        round.config_snapshot.as_ref()
    }

    fn stamp(round: Round, config: &TienLenConfig) -> Round {
        round.with_snapshot(config.clone())
    }

    fn round_points(round: &Round, config: &TienLenConfig, player_ids: &[PlayerId]) -> ScoreSheet {
        round_points(round, config, player_ids)
    }
}
