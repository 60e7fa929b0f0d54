//! Scoring rules trait for score-sheet implementations.
//!
//! Each game type implements `ScoreRules` to define:
//! - Its config and round shapes
//! - How stored records of any age are migrated into those shapes
//! - How one round turns into per-player point deltas
//!
//! Totals are not implemented per game: [`ScoreRules::total_scores`]
//! replays every round through `round_points` with that round's own config.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

use crate::core::player::{PlayerId, ScoreSheet};

/// Scoring rules trait.
///
/// ## Implementation Notes
///
/// - `migrate_*`: Must be total (never fail) and idempotent
/// - `round_points`: Must be pure; the same inputs always give the same sheet
/// - `stamp`: Must replace any existing snapshot
///
/// Implementors are marker types; the `Clone + Debug + PartialEq` bounds let
/// `Game<G>` derive those traits.
pub trait ScoreRules: Clone + Debug + PartialEq {
    /// Scoring configuration.
    type Config: Clone + Debug + PartialEq + Serialize;

    /// One recorded round, including its optional config snapshot.
    type Round: Clone + Debug + PartialEq + Serialize;

    /// Human-readable name, used in logs.
    const NAME: &'static str;

    /// Store key this game type persists under.
    const STORAGE_KEY: &'static str;

    /// Fewest players a game can seat.
    const MIN_PLAYERS: usize;

    /// Most players a game can seat.
    const MAX_PLAYERS: usize;

    /// Default config for a new game with `player_count` players.
    fn default_config(player_count: usize) -> Self::Config;

    /// Normalize a stored config of any historical shape.
    fn migrate_config(raw: &Value) -> Self::Config;

    /// Normalize a stored round of any historical shape.
    fn migrate_round(raw: &Value) -> Self::Round;

    /// The config captured when the round was recorded, if any.
    fn snapshot(round: &Self::Round) -> Option<&Self::Config>;

    /// Attach a copy of `config` as the round's snapshot.
    fn stamp(round: Self::Round, config: &Self::Config) -> Self::Round;

    /// Point deltas for one round.
    fn round_points(round: &Self::Round, config: &Self::Config, player_ids: &[PlayerId]) -> ScoreSheet;

    // === Provided Methods ===

    /// Config a round is scored with: its snapshot, else `current`.
    fn effective_config<'a>(round: &'a Self::Round, current: &'a Self::Config) -> &'a Self::Config {
        Self::snapshot(round).unwrap_or(current)
    }

    /// Cumulative totals for every listed player.
    ///
    /// Full replay, no caching. Points credited to ids outside
    /// `player_ids` are dropped.
    fn total_scores<'a, I>(rounds: I, current: &Self::Config, player_ids: &[PlayerId]) -> ScoreSheet
    where
        I: IntoIterator<Item = &'a Self::Round>,
        Self::Round: 'a,
    {
        let mut totals = ScoreSheet::for_players(player_ids);
        for round in rounds {
            let config = Self::effective_config(round, current);
            totals.accumulate(&Self::round_points(round, config, player_ids));
        }
        totals
    }
}
