//! Round scoring for the trick-taking sheet.
//!
//! Rules, first match wins:
//! 1. Custom points are taken as-is.
//! 2. A sweep (explicit, or everyone but the first finisher stuck) pays the
//!    winner `sweep` from every other player.
//! 3. Otherwise placement, stuck penalty, catches and last-held entries are
//!    summed.

use super::config::TienLenConfig;
use super::round::{CatchEvent, LastHeld, Round, RoundOutcome};
use crate::core::player::{PlayerId, ScoreSheet};

/// Point deltas for one round.
///
/// The finish order of a normal round is trusted to be a permutation of
/// `player_ids`; round entry validation enforces that.
#[must_use]
pub fn round_points(round: &Round, config: &TienLenConfig, player_ids: &[PlayerId]) -> ScoreSheet {
    let mut points = ScoreSheet::for_players(player_ids);

    match &round.outcome {
        RoundOutcome::Custom(custom) => {
            for id in player_ids {
                points.set(id, custom.get(id));
            }
        }
        RoundOutcome::Sweep { winner } => {
            apply_sweep(&mut points, winner, config, player_ids);
        }
        RoundOutcome::Normal {
            order,
            catches,
            last_held,
            stuck_count,
        } => {
            let stuck = *stuck_count as usize;
            let everyone_stuck = stuck > 0 && stuck + 1 == player_ids.len();
            match order.first() {
                Some(winner) if everyone_stuck => apply_sweep(&mut points, winner, config, player_ids),
                _ => apply_normal(&mut points, order, catches, last_held, stuck, config),
            }
        }
    }

    points
}

fn apply_sweep(points: &mut ScoreSheet, winner: &PlayerId, config: &TienLenConfig, player_ids: &[PlayerId]) {
    let per_loser = config.points_sweep_per_loser;
    let mut losers = 0;
    for id in player_ids.iter().filter(|id| *id != winner) {
        points.set(id, per_loser.saturating_neg());
        losers += 1;
    }
    points.set(winner, per_loser.saturating_mul(losers));
}

fn apply_normal(
    points: &mut ScoreSheet,
    order: &[PlayerId],
    catches: &[CatchEvent],
    last_held: &[LastHeld],
    stuck: usize,
    config: &TienLenConfig,
) {
    for (id, pts) in order.iter().zip(config.placement_points()) {
        points.add(id, pts);
    }

    // Each stuck player pays for every stuck player, not just themselves.
    if stuck > 0 && order.len() >= stuck {
        let penalty = config.points_stuck_per_person.saturating_mul(stuck as i64);
        for id in &order[order.len() - stuck..] {
            points.add(id, penalty.saturating_neg());
        }
    }

    for event in catches {
        for item in &event.items {
            let amount = config.catch_points(item.kind).saturating_mul(i64::from(item.qty));
            points.transfer(&event.catcher_id, &event.victim_id, amount);
        }
    }

    for entry in last_held {
        points.add(&entry.player_id, config.last_points(entry.kind));
    }
}
