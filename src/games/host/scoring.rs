//! Round scoring for the host/banker sheet.
//!
//! Every non-host player settles with the host alone, so each round is
//! zero-sum by construction.

use super::config::HostConfig;
use super::round::{HostRound, Outcome};
use crate::core::player::{PlayerId, ScoreSheet};

/// Point deltas for one round.
///
/// The bet unit is the round's snapshot when present, else `config`.
#[must_use]
pub fn round_points(round: &HostRound, config: &HostConfig, player_ids: &[PlayerId]) -> ScoreSheet {
    let mut points = ScoreSheet::for_players(player_ids);
    let bet = round.config_snapshot.as_ref().unwrap_or(config).bet_amount();
    let host = &round.host_id;

    for (player, result) in &round.results {
        if player == host {
            continue;
        }
        let amount = bet.saturating_mul(i64::from(result.multiplier));
        match result.result {
            Outcome::Win => points.transfer(player, host, amount),
            Outcome::Lose => points.transfer(host, player, amount),
            Outcome::Draw => {}
        }
    }

    points
}
