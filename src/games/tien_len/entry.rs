//! Round entry for the trick-taking sheet.
//!
//! A [`RoundDraft`] is whatever the entry form collected. Validation turns
//! it into a [`Round`] the scoring engine can trust, or rejects it so the
//! caller can re-prompt. Nothing partial is ever recorded.

use rustc_hash::FxHashSet;

use super::round::{CatchEvent, LastHeld, Round, RoundOutcome};
use crate::core::error::RoundError;
use crate::core::player::{PlayerId, ScoreSheet};

/// Unvalidated round input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundDraft {
    /// Hand-entered points. Takes priority when non-empty.
    pub custom_points: Option<ScoreSheet>,
    /// Winner of a sweep. Takes priority over the finish order.
    pub sweep_winner: Option<PlayerId>,
    pub order: Vec<PlayerId>,
    pub catches: Vec<CatchEvent>,
    pub last_held: Vec<LastHeld>,
    pub stuck_count: u32,
}

impl RoundDraft {
    /// Draft for a normal round with the given finish order.
    pub fn with_order<I, P>(order: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Validate against the seated players.
    ///
    /// Catches without both players, self-catches, zero-quantity items and
    /// last-held entries without a player are dropped rather than rejected.
    pub fn validate(self, players: &[PlayerId]) -> Result<Round, RoundError> {
        let seated = Seated::new(players);

        if let Some(points) = self.custom_points.filter(|p| !p.is_empty()) {
            for (id, _) in points.iter() {
                seated.check(id)?;
            }
            return Ok(Round::custom(points));
        }

        if let Some(winner) = self.sweep_winner.filter(|w| !w.is_empty()) {
            seated.check(&winner)?;
            return Ok(Round::sweep(winner));
        }

        validate_order_in(&self.order, &seated)?;

        if self.stuck_count as usize >= players.len() {
            return Err(RoundError::StuckCountOutOfRange {
                stuck: self.stuck_count,
                players: players.len(),
            });
        }

        let mut catches = Vec::with_capacity(self.catches.len());
        for mut event in self.catches {
            if event.catcher_id.is_empty() || event.victim_id.is_empty() || event.catcher_id == event.victim_id {
                continue;
            }
            seated.check(&event.catcher_id)?;
            seated.check(&event.victim_id)?;
            event.items.retain(|item| item.qty > 0);
            if !event.items.is_empty() {
                catches.push(event);
            }
        }

        let mut last_held = Vec::with_capacity(self.last_held.len());
        for entry in self.last_held {
            if entry.player_id.is_empty() {
                continue;
            }
            seated.check(&entry.player_id)?;
            last_held.push(entry);
        }

        Ok(Round::from_outcome(RoundOutcome::Normal {
            order: self.order,
            catches,
            last_held,
            stuck_count: self.stuck_count,
        }))
    }
}

/// A finish order must list every seated player exactly once.
pub fn validate_order(order: &[PlayerId], players: &[PlayerId]) -> Result<(), RoundError> {
    validate_order_in(order, &Seated::new(players))
}

fn validate_order_in(order: &[PlayerId], seated: &Seated<'_>) -> Result<(), RoundError> {
    if order.len() != seated.count {
        return Err(RoundError::OrderLength {
            expected: seated.count,
            actual: order.len(),
        });
    }
    let mut seen = FxHashSet::default();
    for id in order {
        seated.check(id)?;
        if !seen.insert(id) {
            return Err(RoundError::DuplicatePlayer(id.clone()));
        }
    }
    Ok(())
}

struct Seated<'a> {
    ids: FxHashSet<&'a PlayerId>,
    count: usize,
}

impl<'a> Seated<'a> {
    fn new(players: &'a [PlayerId]) -> Self {
        Self {
            ids: players.iter().collect(),
            count: players.len(),
        }
    }

    fn check(&self, id: &PlayerId) -> Result<(), RoundError> {
        if self.ids.contains(id) {
            Ok(())
        } else {
            Err(RoundError::UnknownPlayer(id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tien_len::config::CatchType;

    fn players() -> Vec<PlayerId> {
        ["a", "b", "c"].iter().map(|s| PlayerId::new(*s)).collect()
    }

    #[test]
    fn test_valid_order() {
        let round = RoundDraft::with_order(["c", "a", "b"]).validate(&players()).unwrap();
        assert_eq!(round, Round::normal(["c", "a", "b"]));
    }

    #[test]
    fn test_order_length_rejected() {
        let err = RoundDraft::with_order(["a", "b"]).validate(&players()).unwrap_err();
        assert_eq!(err, RoundError::OrderLength { expected: 3, actual: 2 });
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = RoundDraft::with_order(["a", "b", "a"]).validate(&players()).unwrap_err();
        assert_eq!(err, RoundError::DuplicatePlayer(PlayerId::new("a")));
    }

    #[test]
    fn test_unknown_player_rejected() {
        let err = RoundDraft::with_order(["a", "b", "x"]).validate(&players()).unwrap_err();
        assert_eq!(err, RoundError::UnknownPlayer(PlayerId::new("x")));
    }

    #[test]
    fn test_stuck_count_range() {
        let mut draft = RoundDraft::with_order(["a", "b", "c"]);
        draft.stuck_count = 2;
        assert!(draft.clone().validate(&players()).is_ok());

        draft.stuck_count = 3;
        assert_eq!(
            draft.validate(&players()).unwrap_err(),
            RoundError::StuckCountOutOfRange { stuck: 3, players: 3 }
        );
    }

    #[test]
    fn test_catch_filtering() {
        let mut draft = RoundDraft::with_order(["a", "b", "c"]);
        draft.catches = vec![
            CatchEvent::new("a", "a").with_item(CatchType::Red2, 1),
            CatchEvent::new("", "b").with_item(CatchType::Red2, 1),
            CatchEvent::new("a", "b").with_item(CatchType::Red2, 0),
            CatchEvent::new("b", "c")
                .with_item(CatchType::Red2, 0)
                .with_item(CatchType::ThreePairs, 2),
        ];
        draft.last_held = vec![LastHeld::new("", CatchType::Red2), LastHeld::new("c", CatchType::Red2)];

        let round = draft.validate(&players()).unwrap();
        let expected = Round::normal(["a", "b", "c"])
            .with_catch(CatchEvent::new("b", "c").with_item(CatchType::ThreePairs, 2))
            .with_last_held(LastHeld::new("c", CatchType::Red2));
        assert_eq!(round, expected);
    }

    #[test]
    fn test_sweep_takes_priority_over_order() {
        let draft = RoundDraft {
            sweep_winner: Some(PlayerId::new("b")),
            ..Default::default()
        };
        assert_eq!(draft.validate(&players()).unwrap(), Round::sweep("b"));

        let draft = RoundDraft {
            sweep_winner: Some(PlayerId::new("nobody")),
            ..Default::default()
        };
        assert!(matches!(draft.validate(&players()), Err(RoundError::UnknownPlayer(_))));
    }

    #[test]
    fn test_custom_points_take_priority() {
        let points: ScoreSheet = [(PlayerId::new("a"), 3), (PlayerId::new("b"), -3)].into_iter().collect();
        let draft = RoundDraft {
            custom_points: Some(points.clone()),
            sweep_winner: Some(PlayerId::new("c")),
            ..Default::default()
        };
        assert_eq!(draft.validate(&players()).unwrap(), Round::custom(points));
    }

    #[test]
    fn test_empty_custom_points_fall_through() {
        let draft = RoundDraft {
            custom_points: Some(ScoreSheet::new()),
            ..RoundDraft::with_order(["a", "b", "c"])
        };
        assert_eq!(draft.validate(&players()).unwrap(), Round::normal(["a", "b", "c"]));
    }
}
