//! Scoring configuration for the trick-taking sheet.
//!
//! Wire names follow the stored format, including the Vietnamese terms for
//! the sweep (`toiTrang`) and stuck (`ruc`) values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::games::json::int_field;

/// Special card combinations that can be caught or left in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatchType {
    Red2,
    Black2,
    ThreePairs,
    FourPairs,
    FourOfKind,
}

impl CatchType {
    pub const ALL: [CatchType; 5] = [
        CatchType::Red2,
        CatchType::Black2,
        CatchType::ThreePairs,
        CatchType::FourPairs,
        CatchType::FourOfKind,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CatchType::Red2 => "red2",
            CatchType::Black2 => "black2",
            CatchType::ThreePairs => "threePairs",
            CatchType::FourPairs => "fourPairs",
            CatchType::FourOfKind => "fourOfKind",
        }
    }

    /// Parse a canonical wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Parse a type that may use the two-valued legacy names.
    ///
    /// `red` and `black` map to the twos; canonical names pass through.
    #[must_use]
    pub fn parse_legacy(name: &str) -> Option<Self> {
        match name {
            "red" => Some(CatchType::Red2),
            "black" => Some(CatchType::Black2),
            other => Self::parse(other),
        }
    }

    /// Flat legacy records only knew two values: `red`, and everything else.
    #[must_use]
    pub fn from_flat_legacy(name: Option<&str>) -> Self {
        if name == Some("red") {
            CatchType::Red2
        } else {
            CatchType::Black2
        }
    }
}

impl std::fmt::Display for CatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point values for the trick-taking sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TienLenConfig {
    pub points_first: i64,
    pub points_second: i64,
    pub points_third: i64,
    pub points_fourth: i64,

    pub points_catch_red2: i64,
    pub points_catch_black2: i64,
    pub points_catch_three_pairs: i64,
    pub points_catch_four_pairs: i64,
    pub points_catch_four_of_kind: i64,

    pub points_last_red2: i64,
    pub points_last_black2: i64,
    pub points_last_three_pairs: i64,
    pub points_last_four_pairs: i64,
    pub points_last_four_of_kind: i64,

    /// Paid by each loser to the winner of a sweep.
    #[serde(rename = "pointsToiTrangPerLoser")]
    pub points_sweep_per_loser: i64,

    /// Multiplied by the stuck count, then charged to each stuck player.
    #[serde(rename = "pointsRucPerPerson")]
    pub points_stuck_per_person: i64,
}

/// Key older versions used for the stuck value.
const LEGACY_STUCK_KEY: &str = "pointsRuc1";

impl Default for TienLenConfig {
    fn default() -> Self {
        Self {
            points_first: 2,
            points_second: 1,
            points_third: -1,
            points_fourth: -2,
            points_catch_red2: 2,
            points_catch_black2: 1,
            points_catch_three_pairs: 2,
            points_catch_four_pairs: 2,
            points_catch_four_of_kind: 2,
            points_last_red2: -2,
            points_last_black2: -1,
            points_last_three_pairs: -2,
            points_last_four_pairs: -2,
            points_last_four_of_kind: -2,
            points_sweep_per_loser: 4,
            points_stuck_per_person: 4,
        }
    }
}

impl TienLenConfig {
    /// Defaults whose placement values sum to zero for `player_count`.
    ///
    /// Counts outside 2..=4 are clamped.
    ///
    /// ```
    /// use card_score::games::tien_len::TienLenConfig;
    ///
    /// for n in 2..=4 {
    ///     let config = TienLenConfig::for_player_count(n);
    ///     let sum: i64 = config.placement_points().iter().take(n).sum();
    ///     assert_eq!(sum, 0);
    /// }
    /// ```
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Self {
        let placement = match player_count.clamp(2, 4) {
            2 => [2, -2, 0, 0],
            3 => [2, 0, -2, 0],
            _ => [2, 1, -1, -2],
        };
        Self::default().with_placement(placement)
    }

    /// Set the 1st..4th place values.
    #[must_use]
    pub fn with_placement(mut self, points: [i64; 4]) -> Self {
        [self.points_first, self.points_second, self.points_third, self.points_fourth] = points;
        self
    }

    /// Set the sweep value per loser.
    #[must_use]
    pub fn with_sweep_per_loser(mut self, points: i64) -> Self {
        self.points_sweep_per_loser = points;
        self
    }

    /// Set the stuck value per person.
    #[must_use]
    pub fn with_stuck_per_person(mut self, points: i64) -> Self {
        self.points_stuck_per_person = points;
        self
    }

    /// Set the value of catching `kind`.
    #[must_use]
    pub fn with_catch_points(mut self, kind: CatchType, points: i64) -> Self {
        *self.catch_slot(kind) = points;
        self
    }

    /// Set the (signed) value of being left holding `kind`.
    #[must_use]
    pub fn with_last_points(mut self, kind: CatchType, points: i64) -> Self {
        *self.last_slot(kind) = points;
        self
    }

    /// 1st..4th place values.
    #[must_use]
    pub fn placement_points(&self) -> [i64; 4] {
        [self.points_first, self.points_second, self.points_third, self.points_fourth]
    }

    /// Points moved from victim to catcher per caught `kind`.
    #[must_use]
    pub fn catch_points(&self, kind: CatchType) -> i64 {
        match kind {
            CatchType::Red2 => self.points_catch_red2,
            CatchType::Black2 => self.points_catch_black2,
            CatchType::ThreePairs => self.points_catch_three_pairs,
            CatchType::FourPairs => self.points_catch_four_pairs,
            CatchType::FourOfKind => self.points_catch_four_of_kind,
        }
    }

    /// Points added to a player left holding `kind` (usually negative).
    #[must_use]
    pub fn last_points(&self, kind: CatchType) -> i64 {
        match kind {
            CatchType::Red2 => self.points_last_red2,
            CatchType::Black2 => self.points_last_black2,
            CatchType::ThreePairs => self.points_last_three_pairs,
            CatchType::FourPairs => self.points_last_four_pairs,
            CatchType::FourOfKind => self.points_last_four_of_kind,
        }
    }

    fn catch_slot(&mut self, kind: CatchType) -> &mut i64 {
        match kind {
            CatchType::Red2 => &mut self.points_catch_red2,
            CatchType::Black2 => &mut self.points_catch_black2,
            CatchType::ThreePairs => &mut self.points_catch_three_pairs,
            CatchType::FourPairs => &mut self.points_catch_four_pairs,
            CatchType::FourOfKind => &mut self.points_catch_four_of_kind,
        }
    }

    fn last_slot(&mut self, kind: CatchType) -> &mut i64 {
        match kind {
            CatchType::Red2 => &mut self.points_last_red2,
            CatchType::Black2 => &mut self.points_last_black2,
            CatchType::ThreePairs => &mut self.points_last_three_pairs,
            CatchType::FourPairs => &mut self.points_last_four_pairs,
            CatchType::FourOfKind => &mut self.points_last_four_of_kind,
        }
    }

    /// Fill every field from `raw` when it holds a number, else the default.
    ///
    /// The stuck value also accepts the deprecated `pointsRuc1` key.
    #[must_use]
    pub fn migrate(raw: &Value) -> Self {
        let d = Self::default();
        let field = |key: &str, default: i64| int_field(raw, key).unwrap_or(default);

        Self {
            points_first: field("pointsFirst", d.points_first),
            points_second: field("pointsSecond", d.points_second),
            points_third: field("pointsThird", d.points_third),
            points_fourth: field("pointsFourth", d.points_fourth),
            points_catch_red2: field("pointsCatchRed2", d.points_catch_red2),
            points_catch_black2: field("pointsCatchBlack2", d.points_catch_black2),
            points_catch_three_pairs: field("pointsCatchThreePairs", d.points_catch_three_pairs),
            points_catch_four_pairs: field("pointsCatchFourPairs", d.points_catch_four_pairs),
            points_catch_four_of_kind: field("pointsCatchFourOfKind", d.points_catch_four_of_kind),
            points_last_red2: field("pointsLastRed2", d.points_last_red2),
            points_last_black2: field("pointsLastBlack2", d.points_last_black2),
            points_last_three_pairs: field("pointsLastThreePairs", d.points_last_three_pairs),
            points_last_four_pairs: field("pointsLastFourPairs", d.points_last_four_pairs),
            points_last_four_of_kind: field("pointsLastFourOfKind", d.points_last_four_of_kind),
            points_sweep_per_loser: field("pointsToiTrangPerLoser", d.points_sweep_per_loser),
            points_stuck_per_person: int_field(raw, "pointsRucPerPerson")
                .or_else(|| int_field(raw, LEGACY_STUCK_KEY))
                .unwrap_or(d.points_stuck_per_person),
        }
    }
}
