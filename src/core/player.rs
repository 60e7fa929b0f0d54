//! Player identification and per-player score storage.
//!
//! ## PlayerId
//!
//! Opaque string identifier. Identity is by id only, never by name or seat.
//!
//! ## ScoreSheet
//!
//! Per-player signed point deltas. Reading a player that was never credited
//! yields 0, so round engines only touch the players a rule mentions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Longest player name kept after trimming, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Opaque player identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty id that legacy records use for "not chosen".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A seated player. Created with the game and never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player, normalizing the display name.
    ///
    /// `position` is 0-based and only used for the fallback name.
    pub fn new(id: PlayerId, name: &str, position: usize) -> Self {
        Self {
            id,
            name: normalize_name(name, position),
        }
    }
}

/// Trim a name to at most [`MAX_NAME_LEN`] characters, or `"Player N"` if blank.
#[must_use]
pub fn normalize_name(name: &str, position: usize) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return format!("Player {}", position + 1);
    }
    trimmed.chars().take(MAX_NAME_LEN).collect::<String>().trim_end().to_string()
}

/// Signed point deltas keyed by player.
///
/// ## Example
///
/// ```
/// use card_score::core::{PlayerId, ScoreSheet};
///
/// let a = PlayerId::new("a");
/// let b = PlayerId::new("b");
///
/// let mut sheet = ScoreSheet::for_players([&a, &b]);
/// sheet.transfer(&a, &b, 3);
///
/// assert_eq!(sheet[&a], 3);
/// assert_eq!(sheet[&b], -3);
/// assert_eq!(sheet.get(&PlayerId::new("nobody")), 0);
/// assert_eq!(sheet.sum(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSheet {
    points: FxHashMap<PlayerId, i64>,
}

impl ScoreSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet with an explicit 0 for every listed player.
    pub fn for_players<'a>(players: impl IntoIterator<Item = &'a PlayerId>) -> Self {
        Self {
            points: players.into_iter().map(|id| (id.clone(), 0)).collect(),
        }
    }

    /// Points for a player, 0 if never credited.
    #[must_use]
    pub fn get(&self, player: &PlayerId) -> i64 {
        self.points.get(player).copied().unwrap_or(0)
    }

    /// Overwrite a player's points.
    pub fn set(&mut self, player: &PlayerId, points: i64) {
        self.points.insert(player.clone(), points);
    }

    /// Add a (signed) delta to a player's points, saturating at the i64 bounds.
    pub fn add(&mut self, player: &PlayerId, delta: i64) {
        let total = self.points.entry(player.clone()).or_insert(0);
        *total = total.saturating_add(delta);
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(&mut self, to: &PlayerId, from: &PlayerId, amount: i64) {
        self.add(to, amount);
        self.add(from, amount.saturating_neg());
    }

    /// Add every entry of `other` whose player already has an entry here.
    ///
    /// Entries for players unknown to this sheet are ignored.
    pub fn accumulate(&mut self, other: &ScoreSheet) {
        for (player, total) in self.points.iter_mut() {
            *total = total.saturating_add(other.get(player));
        }
    }

    /// Sum of all entries, saturating at the i64 bounds.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.points.values().fold(0i64, |acc, pts| acc.saturating_add(*pts))
    }

    /// Number of players with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no player has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over (player, points) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, i64)> {
        self.points.iter().map(|(id, pts)| (id, *pts))
    }
}

impl Index<&PlayerId> for ScoreSheet {
    type Output = i64;

    fn index(&self, player: &PlayerId) -> &Self::Output {
        self.points.get(player).unwrap_or(&0)
    }
}

impl FromIterator<(PlayerId, i64)> for ScoreSheet {
    fn from_iter<I: IntoIterator<Item = (PlayerId, i64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
