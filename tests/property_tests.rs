//! Property tests for the scoring engines and round-log operations.
//!
//! Properties tested:
//! - Host rounds are always zero-sum
//! - Sweeps and normal rounds without stuck or last-held penalties are zero-sum
//! - Migration of canonical rounds is idempotent
//! - Out-of-range round indices leave the game unchanged

use proptest::prelude::*;

use card_score::games::host::{self, HostConfig, HostRound, Outcome, PlayerResult};
use card_score::games::tien_len::{self, migrate_round, CatchEvent, CatchType, LastHeld, Round, TienLenConfig};
use card_score::{IdSource, PlayerId, TienLenGame};

fn player_ids(n: usize) -> Vec<PlayerId> {
    (0..n).map(|i| PlayerId::new(format!("p{i}"))).collect()
}

fn catch_type() -> impl Strategy<Value = CatchType> {
    prop_oneof![
        Just(CatchType::Red2),
        Just(CatchType::Black2),
        Just(CatchType::ThreePairs),
        Just(CatchType::FourPairs),
        Just(CatchType::FourOfKind),
    ]
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Win), Just(Outcome::Lose), Just(Outcome::Draw)]
}

/// A shuffled finish order for 2-4 players plus a stuck count below n - 1.
fn normal_round() -> impl Strategy<Value = (usize, Vec<usize>, u32)> {
    (2usize..=4).prop_flat_map(|n| {
        (
            Just(n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            0..(n as u32 - 1).max(1),
        )
    })
}

/// Catch events as (catcher, victim offset, type, qty) over `n` players.
fn catches(n: usize) -> impl Strategy<Value = Vec<(usize, usize, CatchType, u32)>> {
    prop::collection::vec((0..n, 1..n, catch_type(), 1u32..4), 0..4)
}

proptest! {
    /// Property: host rounds always sum to zero
    #[test]
    fn prop_host_round_zero_sum(
        n in 2usize..=20,
        host_seat in 0usize..20,
        bet in 1i64..50,
        results in prop::collection::vec((outcome(), 1u32..=99), 20),
        snapshot in prop::option::of(1i64..50),
    ) {
        let ids = player_ids(n);
        let host = ids[host_seat % n].clone();
        let mut round = HostRound::new(host.clone());
        for (id, (result, multiplier)) in ids.iter().zip(results) {
            round = round.with_result(id.clone(), PlayerResult::new(result, multiplier));
        }
        if let Some(s) = snapshot {
            round = round.with_snapshot(HostConfig::new(s));
        }

        let points = host::round_points(&round, &HostConfig::new(bet), &ids);
        prop_assert_eq!(points.sum(), 0);
        prop_assert_eq!(points.len(), n);
    }

    /// Property: sweeps are zero-sum for any sweep value
    #[test]
    fn prop_sweep_zero_sum(n in 2usize..=4, winner in 0usize..4, per_loser in -10i64..10) {
        let ids = player_ids(n);
        let config = TienLenConfig::for_player_count(n).with_sweep_per_loser(per_loser);
        let points = tien_len::round_points(&Round::sweep(ids[winner % n].clone()), &config, &ids);

        prop_assert_eq!(points.sum(), 0);
        prop_assert_eq!(points[&ids[winner % n]], (n as i64 - 1) * per_loser);
    }

    /// Property: catches move points without creating them
    #[test]
    fn prop_normal_round_zero_sum_with_default_config(
        (n, order, _stuck) in normal_round(),
        raw_catches in catches(4),
    ) {
        let ids = player_ids(n);
        let mut round = Round::normal(order.iter().map(|&i| ids[i].clone()));
        for (catcher, offset, kind, qty) in raw_catches {
            let catcher = catcher % n;
            let victim = (catcher + 1 + offset % (n - 1)) % n;
            round = round.with_catch(CatchEvent::new(ids[catcher].clone(), ids[victim].clone()).with_item(kind, qty));
        }

        let points = tien_len::round_points(&round, &TienLenConfig::for_player_count(n), &ids);
        prop_assert_eq!(points.sum(), 0);
    }

    /// Property: migrating a canonical round twice changes nothing
    #[test]
    fn prop_migration_idempotent(
        (n, order, stuck) in normal_round(),
        raw_catches in catches(4),
        last in prop::collection::vec((0usize..4, catch_type()), 0..3),
        with_snapshot in any::<bool>(),
    ) {
        let ids = player_ids(n);
        let mut round = Round::normal(order.iter().map(|&i| ids[i].clone())).with_stuck_count(stuck);
        for (catcher, offset, kind, qty) in raw_catches {
            let victim = (catcher + offset) % n;
            round = round.with_catch(CatchEvent::new(ids[catcher % n].clone(), ids[victim].clone()).with_item(kind, qty));
        }
        for (seat, kind) in last {
            round = round.with_last_held(LastHeld::new(ids[seat % n].clone(), kind));
        }
        if with_snapshot {
            round = round.with_snapshot(TienLenConfig::for_player_count(n));
        }

        let once = migrate_round(&serde_json::to_value(&round).unwrap());
        let twice = migrate_round(&serde_json::to_value(&once).unwrap());
        prop_assert_eq!(&once, &round);
        prop_assert_eq!(&twice, &once);
    }

    /// Property: out-of-range remove/update leave the game unchanged
    #[test]
    fn prop_out_of_range_index_no_op(rounds in 0usize..5, extra in 0usize..100) {
        let mut ids = IdSource::seeded(1).with_fixed_time(0);
        let mut game = TienLenGame::create(&["a", "b", "c"], &mut ids);
        let order = game.player_ids();
        for _ in 0..rounds {
            game = game.add_round(Round::normal(order.clone()));
        }

        let index = rounds + extra;
        prop_assert_eq!(&game.remove_round(index), &game);
        prop_assert_eq!(&game.update_round(index, Round::sweep(order[0].clone())), &game);
    }
}
