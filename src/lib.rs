//! # card-score
//!
//! Score tracking for party card games: a trick-taking sheet and a
//! host/banker betting sheet, persisted as one JSON blob per game type.
//!
//! ## Design Principles
//!
//! 1. **Pure Scoring**: Round engines are pure functions of a round, a
//!    config and the seated players. Totals are a full replay, never cached.
//!
//! 2. **Stable History**: Every recorded round carries a snapshot of the
//!    config it was recorded under, so editing the config never rescores
//!    old rounds.
//!
//! 3. **Total Migration**: Stored data from any earlier version loads.
//!    Unknown shapes degrade to defaults, never to errors.
//!
//! ## Modules
//!
//! - `core`: Player ids, score sheets, ids, errors, key-value stores
//! - `rules`: `ScoreRules` trait implemented by each sheet
//! - `games`: The trick-taking (`tien_len`) and host/banker (`host`) sheets
//! - `repository`: Game values, round-log operations, load/save

pub mod core;
pub mod rules;
pub mod games;
pub mod repository;

// Re-export commonly used types
pub use crate::core::{
    FileStore, IdSource, KeyValueStore, MemoryStore,
    Player, PlayerId, ScoreSheet,
    RoundError, StoreError,
};

pub use crate::rules::ScoreRules;

pub use crate::games::{Host, TienLen};

pub use crate::repository::{Game, Repository};

/// Trick-taking game.
pub type TienLenGame = Game<TienLen>;

/// Host/banker game.
pub type HostGame = Game<Host>;
