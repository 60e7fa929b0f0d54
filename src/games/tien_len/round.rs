//! Recorded rounds for the trick-taking sheet.
//!
//! In memory a round is one of three outcomes. On the wire it is the flat
//! record older versions wrote (`order`, `catch`, `last`, `customPoints`,
//! `isToiTrang`, `winnerId`, `rucCount`, `configSnapshot`), so saved games
//! stay readable by every version.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{CatchType, TienLenConfig};
use crate::core::player::{PlayerId, ScoreSheet};

/// A quantity of one caught combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchItem {
    #[serde(rename = "type")]
    pub kind: CatchType,
    pub qty: u32,
}

impl CatchItem {
    #[must_use]
    pub const fn new(kind: CatchType, qty: u32) -> Self {
        Self { kind, qty }
    }
}

/// One player catching another, possibly several combinations at once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchEvent {
    pub catcher_id: PlayerId,
    pub victim_id: PlayerId,
    pub items: SmallVec<[CatchItem; 2]>,
}

impl CatchEvent {
    pub fn new(catcher: impl Into<PlayerId>, victim: impl Into<PlayerId>) -> Self {
        Self {
            catcher_id: catcher.into(),
            victim_id: victim.into(),
            items: SmallVec::new(),
        }
    }

    /// Add `qty` of `kind`, merging with an existing item of the same kind.
    #[must_use]
    pub fn with_item(mut self, kind: CatchType, qty: u32) -> Self {
        self.add_item(kind, qty);
        self
    }

    pub(crate) fn add_item(&mut self, kind: CatchType, qty: u32) {
        match self.items.iter_mut().find(|item| item.kind == kind) {
            Some(existing) => existing.qty += qty,
            None => self.items.push(CatchItem::new(kind, qty)),
        }
    }
}

/// A player who ended the round still holding a combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastHeld {
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub kind: CatchType,
}

impl LastHeld {
    pub fn new(player: impl Into<PlayerId>, kind: CatchType) -> Self {
        Self {
            player_id: player.into(),
            kind,
        }
    }
}

/// What happened in a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Points entered by hand; nothing else is computed.
    Custom(ScoreSheet),
    /// One player takes everything.
    Sweep { winner: PlayerId },
    /// A played-out round.
    Normal {
        /// Every player, 1st place first.
        order: Vec<PlayerId>,
        catches: Vec<CatchEvent>,
        last_held: Vec<LastHeld>,
        /// How many of the last finishers were stuck.
        stuck_count: u32,
    },
}

/// A recorded round and the config it was recorded under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RoundRecord", from = "RoundRecord")]
pub struct Round {
    pub outcome: RoundOutcome,
    pub config_snapshot: Option<TienLenConfig>,
}

impl Round {
    /// Hand-entered points.
    #[must_use]
    pub fn custom(points: ScoreSheet) -> Self {
        Self::from_outcome(RoundOutcome::Custom(points))
    }

    /// A sweep by `winner`.
    pub fn sweep(winner: impl Into<PlayerId>) -> Self {
        Self::from_outcome(RoundOutcome::Sweep { winner: winner.into() })
    }

    /// A normal round with the given finish order and no events.
    pub fn normal<I, P>(order: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self::from_outcome(RoundOutcome::Normal {
            order: order.into_iter().map(Into::into).collect(),
            catches: Vec::new(),
            last_held: Vec::new(),
            stuck_count: 0,
        })
    }

    #[must_use]
    pub const fn from_outcome(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            config_snapshot: None,
        }
    }

    /// Add a catch event. No-op unless this is a normal round.
    #[must_use]
    pub fn with_catch(mut self, event: CatchEvent) -> Self {
        if let RoundOutcome::Normal { catches, .. } = &mut self.outcome {
            catches.push(event);
        }
        self
    }

    /// Add a last-held entry. No-op unless this is a normal round.
    #[must_use]
    pub fn with_last_held(mut self, entry: LastHeld) -> Self {
        if let RoundOutcome::Normal { last_held, .. } = &mut self.outcome {
            last_held.push(entry);
        }
        self
    }

    /// Set the stuck count. No-op unless this is a normal round.
    #[must_use]
    pub fn with_stuck_count(mut self, count: u32) -> Self {
        if let RoundOutcome::Normal { stuck_count, .. } = &mut self.outcome {
            *stuck_count = count;
        }
        self
    }

    /// Attach a config snapshot, replacing any existing one.
    #[must_use]
    pub fn with_snapshot(mut self, config: TienLenConfig) -> Self {
        self.config_snapshot = Some(config);
        self
    }
}

/// Flat stored shape of a round.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoundRecord {
    #[serde(default)]
    pub order: Vec<PlayerId>,
    #[serde(default, rename = "catch")]
    pub catches: Vec<CatchEvent>,
    #[serde(default, rename = "last")]
    pub last_held: Vec<LastHeld>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_points: Option<ScoreSheet>,
    #[serde(default, rename = "isToiTrang", skip_serializing_if = "Option::is_none")]
    pub is_sweep: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<PlayerId>,
    #[serde(default, rename = "rucCount", skip_serializing_if = "Option::is_none")]
    pub stuck_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_snapshot: Option<TienLenConfig>,
}

impl From<RoundRecord> for Round {
    /// Custom points win, then an explicit sweep with a winner, else normal.
    fn from(record: RoundRecord) -> Self {
        let outcome = match (record.custom_points, record.is_sweep, record.winner_id) {
            (Some(points), _, _) if !points.is_empty() => RoundOutcome::Custom(points),
            (_, Some(true), Some(winner)) if !winner.is_empty() => RoundOutcome::Sweep { winner },
            _ => RoundOutcome::Normal {
                order: record.order,
                catches: record.catches,
                last_held: record.last_held,
                stuck_count: record.stuck_count.unwrap_or(0),
            },
        };
        Self {
            outcome,
            config_snapshot: record.config_snapshot,
        }
    }
}

impl From<Round> for RoundRecord {
    fn from(round: Round) -> Self {
        let mut record = RoundRecord {
            config_snapshot: round.config_snapshot,
            ..Default::default()
        };
        match round.outcome {
            RoundOutcome::Custom(points) => record.custom_points = Some(points),
            RoundOutcome::Sweep { winner } => {
                record.is_sweep = Some(true);
                record.winner_id = Some(winner);
            }
            RoundOutcome::Normal {
                order,
                catches,
                last_held,
                stuck_count,
            } => {
                record.order = order;
                record.catches = catches;
                record.last_held = last_held;
                record.stuck_count = (stuck_count > 0).then_some(stuck_count);
            }
        }
        record
    }
}
