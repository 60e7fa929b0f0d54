//! Error types.
//!
//! Only two things can fail loudly: writing to the store, and submitting a
//! round that does not describe a playable result. Everything else (bad
//! stored data, out-of-range indices) degrades silently by contract.

use thiserror::Error;

use super::player::PlayerId;

/// Errors from a [`KeyValueStore`](super::store::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading or writing a blob.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The game could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be used as a storage location.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Reasons a round draft is rejected before it reaches a scoring engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Finish order does not list every player.
    #[error("finish order has {actual} entries, expected {expected}")]
    OrderLength { expected: usize, actual: usize },

    /// A player appears more than once in the finish order.
    #[error("player {0} appears more than once in the finish order")]
    DuplicatePlayer(PlayerId),

    /// A referenced player is not seated in this game.
    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    /// More stuck players than there are non-winners.
    #[error("stuck count {stuck} out of range for {players} players")]
    StuckCountOutOfRange { stuck: u32, players: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_error_messages() {
        let err = RoundError::OrderLength { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "finish order has 3 entries, expected 4");

        let err = RoundError::DuplicatePlayer(PlayerId::new("a"));
        assert_eq!(err.to_string(), "player a appears more than once in the finish order");
    }

    #[test]
    fn test_store_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
