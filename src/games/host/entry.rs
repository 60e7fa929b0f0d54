//! Round entry for the host/banker sheet.

use rustc_hash::FxHashMap;

use super::round::{HostRound, PlayerResult};
use crate::core::error::RoundError;
use crate::core::player::PlayerId;

/// Unvalidated host round input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostRoundDraft {
    pub host_id: PlayerId,
    pub results: FxHashMap<PlayerId, PlayerResult>,
}

impl HostRoundDraft {
    pub fn new(host: impl Into<PlayerId>) -> Self {
        Self {
            host_id: host.into(),
            results: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_result(mut self, player: impl Into<PlayerId>, result: PlayerResult) -> Self {
        self.results.insert(player.into(), result);
        self
    }

    /// Validate against the seated players.
    ///
    /// The host's own entry is dropped and every other seated player without
    /// a result is recorded as a 1x draw.
    pub fn validate(self, players: &[PlayerId]) -> Result<HostRound, RoundError> {
        if !players.contains(&self.host_id) {
            return Err(RoundError::UnknownPlayer(self.host_id));
        }
        if let Some(stranger) = self.results.keys().find(|id| !players.contains(id)) {
            return Err(RoundError::UnknownPlayer(stranger.clone()));
        }

        let mut round = HostRound::new(self.host_id.clone());
        for player in players.iter().filter(|id| **id != self.host_id) {
            let result = self.results.get(player).copied().unwrap_or_default();
            // Re-clamp: drafts are built field by field.
            round.results.insert(player.clone(), PlayerResult::new(result.result, result.multiplier));
        }
        Ok(round)
    }
}

/// Host to preselect for the next round: the last round's host if still
/// seated, else the first player.
#[must_use]
pub fn suggested_host<'a>(last_round: Option<&HostRound>, players: &'a [PlayerId]) -> Option<&'a PlayerId> {
    last_round
        .and_then(|round| players.iter().find(|id| **id == round.host_id))
        .or_else(|| players.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::host::round::Outcome;

    fn players() -> Vec<PlayerId> {
        ["h", "a", "b"].iter().map(|s| PlayerId::new(*s)).collect()
    }

    #[test]
    fn test_fills_missing_results_with_draws() {
        let round = HostRoundDraft::new("h")
            .with_result("a", PlayerResult::win(2))
            .validate(&players())
            .unwrap();

        assert_eq!(round.results.len(), 2);
        assert_eq!(round.results[&PlayerId::new("a")], PlayerResult::win(2));
        assert_eq!(round.results[&PlayerId::new("b")], PlayerResult::draw());
        assert!(round.config_snapshot.is_none());
    }

    #[test]
    fn test_drops_host_entry() {
        let round = HostRoundDraft::new("h")
            .with_result("h", PlayerResult::win(2))
            .validate(&players())
            .unwrap();
        assert!(!round.results.contains_key(&PlayerId::new("h")));
    }

    #[test]
    fn test_rejects_unknown_players() {
        let err = HostRoundDraft::new("x").validate(&players()).unwrap_err();
        assert_eq!(err, RoundError::UnknownPlayer(PlayerId::new("x")));

        let err = HostRoundDraft::new("h")
            .with_result("y", PlayerResult::lose(1))
            .validate(&players())
            .unwrap_err();
        assert_eq!(err, RoundError::UnknownPlayer(PlayerId::new("y")));
    }

    #[test]
    fn test_reclamps_hand_built_multiplier() {
        let mut draft = HostRoundDraft::new("h");
        draft.results.insert(
            PlayerId::new("a"),
            PlayerResult {
                result: Outcome::Lose,
                multiplier: 0,
            },
        );
        let round = draft.validate(&players()).unwrap();
        assert_eq!(round.results[&PlayerId::new("a")].multiplier, 1);
    }

    #[test]
    fn test_suggested_host() {
        let players = players();
        assert_eq!(suggested_host(None, &players), Some(&players[0]));

        let last = HostRound::new("b");
        assert_eq!(suggested_host(Some(&last), &players), Some(&players[2]));

        let gone = HostRound::new("gone");
        assert_eq!(suggested_host(Some(&gone), &players), Some(&players[0]));

        assert_eq!(suggested_host(None, &[]), None);
    }
}
