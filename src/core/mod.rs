//! Core types shared by both score sheets: players, score sheets, ids,
//! errors and the storage seam.

pub mod player;
pub mod ids;
pub mod error;
pub mod store;

pub use player::{normalize_name, Player, PlayerId, ScoreSheet, MAX_NAME_LEN};
pub use ids::IdSource;
pub use error::{RoundError, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
