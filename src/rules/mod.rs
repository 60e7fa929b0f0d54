//! Scoring rules trait for game implementations.
//!
//! Games implement `ScoreRules` to define:
//! - Config and round shapes, and how legacy records migrate into them
//! - Per-round point deltas
//!
//! The repository calls into `ScoreRules` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::ScoreRules;
