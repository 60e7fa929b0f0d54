//! Id and timestamp generation for games and players.
//!
//! Ids have the shape `<unix millis>-<7 base36 chars>`, matching the ids
//! already present in stored games.
//!
//! ```
//! use card_score::core::IdSource;
//!
//! let mut a = IdSource::seeded(42);
//! let mut b = IdSource::seeded(42);
//!
//! // Same seed, same suffixes
//! let id_a = a.next_id();
//! let id_b = b.next_id();
//! assert_eq!(id_a.split('-').nth(1), id_b.split('-').nth(1));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_LEN: usize = 7;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh ids and creation timestamps.
///
/// Uses ChaCha8 so tests can pin the random part with a seed.
#[derive(Clone, Debug)]
pub struct IdSource {
    inner: ChaCha8Rng,
    fixed_now: Option<u64>,
}

impl IdSource {
    /// Create a source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            fixed_now: None,
        }
    }

    /// Create a deterministic source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            fixed_now: None,
        }
    }

    /// Pin the clock to a fixed unix-millis value.
    #[must_use]
    pub fn with_fixed_time(mut self, millis: u64) -> Self {
        self.fixed_now = Some(millis);
        self
    }

    /// Current time in unix milliseconds.
    pub fn now_millis(&self) -> u64 {
        if let Some(fixed) = self.fixed_now {
            return fixed;
        }
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Generate a fresh id.
    pub fn next_id(&mut self) -> String {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[self.inner.gen_range(0..ALPHABET.len())] as char)
            .collect();
        format!("{}-{}", self.now_millis(), suffix)
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new()
    }
}
