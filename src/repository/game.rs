//! Game values and the operations that derive new ones.
//!
//! Every operation takes `&self` and returns a fresh [`Game`]; callers never
//! observe in-place mutation. Rounds live in an `im::Vector`, so each
//! derived game shares structure with its parent and cloning stays cheap.

use im::Vector;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::ids::IdSource;
use crate::core::player::{Player, PlayerId, ScoreSheet};
use crate::games::json::{array_field, int_field, str_field};
use crate::rules::ScoreRules;

/// One score sheet: players, current config and the round log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = ""))]
pub struct Game<G: ScoreRules> {
    id: String,
    players: Vec<Player>,
    config: G::Config,
    rounds: Vector<G::Round>,
    created_at: u64,
}

impl<G: ScoreRules> Game<G> {
    /// Start a new game.
    ///
    /// The name list is clamped into `G::MIN_PLAYERS..=G::MAX_PLAYERS`:
    /// extra names are dropped and missing seats get default names.
    pub fn create<S: AsRef<str>>(names: &[S], ids: &mut IdSource) -> Self {
        let count = names.len().clamp(G::MIN_PLAYERS, G::MAX_PLAYERS);
        let players = (0..count)
            .map(|i| {
                let name = names.get(i).map_or("", AsRef::as_ref);
                Player::new(PlayerId::new(ids.next_id()), name, i)
            })
            .collect();

        Self {
            id: ids.next_id(),
            players,
            config: G::default_config(count),
            rounds: Vector::new(),
            created_at: ids.now_millis(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation time in unix milliseconds.
    #[must_use]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn config(&self) -> &G::Config {
        &self.config
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<G::Round> {
        &self.rounds
    }

    /// Seated player ids in seat order.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    // === Round Log ===

    /// Append a round, stamped with the current config.
    #[must_use]
    pub fn add_round(&self, round: G::Round) -> Self {
        let mut next = self.clone();
        next.rounds.push_back(G::stamp(round, &self.config));
        debug!(game = G::NAME, rounds = next.rounds.len(), "round added");
        next
    }

    /// Replace the round at `index`, stamped with the current config.
    ///
    /// An out-of-range index returns an unchanged copy.
    #[must_use]
    pub fn update_round(&self, index: usize, round: G::Round) -> Self {
        let mut next = self.clone();
        if index >= self.rounds.len() {
            debug!(game = G::NAME, index, rounds = self.rounds.len(), "update of missing round ignored");
            return next;
        }
        next.rounds.set(index, G::stamp(round, &self.config));
        next
    }

    /// Remove the round at `index`.
    ///
    /// An out-of-range index returns an unchanged copy.
    #[must_use]
    pub fn remove_round(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index >= self.rounds.len() {
            debug!(game = G::NAME, index, rounds = self.rounds.len(), "removal of missing round ignored");
            return next;
        }
        next.rounds.remove(index);
        next
    }

    /// Clear the round log under a new id and creation time.
    ///
    /// Players and config are kept.
    #[must_use]
    pub fn reset(&self, ids: &mut IdSource) -> Self {
        Self {
            id: ids.next_id(),
            players: self.players.clone(),
            config: self.config.clone(),
            rounds: Vector::new(),
            created_at: ids.now_millis(),
        }
    }

    /// Replace the config. Rounds already recorded keep their snapshots.
    #[must_use]
    pub fn with_config(&self, config: G::Config) -> Self {
        Self {
            config,
            ..self.clone()
        }
    }

    // === Scoring ===

    /// Point deltas of the round at `index`, scored with its own config.
    #[must_use]
    pub fn round_points(&self, index: usize) -> Option<ScoreSheet> {
        let round = self.rounds.get(index)?;
        let config = G::effective_config(round, &self.config);
        Some(G::round_points(round, config, &self.player_ids()))
    }

    /// Running totals for every seated player.
    #[must_use]
    pub fn total_scores(&self) -> ScoreSheet {
        G::total_scores(self.rounds.iter(), &self.config, &self.player_ids())
    }

    // === Persistence ===

    /// Rebuild a game from a stored blob of any historical shape.
    ///
    /// Returns `None` unless the blob has a non-empty player list and an
    /// array round log. Player entries without an id are skipped, and a list
    /// left empty by that counts as no players. Config and rounds go through
    /// migration.
    #[must_use]
    pub fn from_value(raw: &Value) -> Option<Self> {
        let players_raw = array_field(raw, "players").filter(|p| !p.is_empty())?;
        let rounds_raw = array_field(raw, "rounds")?;

        let players: Vec<Player> = players_raw
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let id = str_field(p, "id")?;
                let name = p.get("name").and_then(Value::as_str).unwrap_or("");
                Some(Player::new(PlayerId::new(id), name, i))
            })
            .collect();
        if players.len() < players_raw.len() {
            debug!(game = G::NAME, skipped = players_raw.len() - players.len(), "skipped stored players without an id");
        }
        if players.is_empty() {
            return None;
        }

        Some(Self {
            id: str_field(raw, "id").unwrap_or_default().to_string(),
            players,
            config: G::migrate_config(raw.get("config").unwrap_or(&Value::Null)),
            rounds: rounds_raw.iter().map(G::migrate_round).collect(),
            created_at: int_field(raw, "createdAt").and_then(|t| u64::try_from(t).ok()).unwrap_or(0),
        })
    }

    /// Serialize to the stored JSON shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tien_len::{Round, TienLen, TienLenConfig};
    use serde_json::json;

    fn ids() -> IdSource {
        IdSource::seeded(3).with_fixed_time(1_000)
    }

    #[test]
    fn test_create_clamps_player_count() {
        let mut ids = ids();

        let game = Game::<TienLen>::create(&["a", "b", "c", "d", "e", "f"], &mut ids);
        assert_eq!(game.players().len(), 4);

        let game = Game::<TienLen>::create(&["solo"], &mut ids);
        assert_eq!(game.players().len(), 2);
        assert_eq!(game.players()[0].name, "solo");
        assert_eq!(game.players()[1].name, "Player 2");
        assert_eq!(game.config(), &TienLenConfig::for_player_count(2));
        assert_eq!(game.created_at(), 1_000);
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let game = Game::<TienLen>::create(&["a", "b", "c"], &mut ids());
        let mut seen: Vec<_> = game.player_ids();
        seen.push(PlayerId::new(game.id()));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_add_round_stamps_snapshot() {
        let game = Game::<TienLen>::create(&["a", "b"], &mut ids());
        let order = game.player_ids();
        let next = game.add_round(Round::normal(order));

        assert!(game.rounds().is_empty());
        assert_eq!(next.rounds().len(), 1);
        assert_eq!(next.rounds()[0].config_snapshot.as_ref(), Some(game.config()));
    }

    fn append_twice<G: ScoreRules>(game: &Game<G>, round: G::Round) -> Game<G> {
        game.add_round(round.clone()).add_round(round)
    }

    #[test]
    fn test_round_log_ops_are_generic_over_rules() {
        let game = Game::<TienLen>::create(&["a", "b"], &mut ids());
        let order = game.player_ids();
        let next = append_twice(&game, Round::normal(order));

        assert_eq!(next.rounds().len(), 2);
        assert_eq!(next.remove_round(0).rounds().len(), 1);
        assert!(game.rounds().is_empty());

        let host = Game::<crate::games::host::Host>::create(&["h", "p"], &mut ids());
        let host_id = host.player_ids()[0].clone();
        let next = append_twice(&host, crate::games::host::HostRound::new(host_id));
        assert_eq!(next.rounds().len(), 2);
        assert_eq!(next.with_config(crate::games::host::HostConfig::new(3)).config().bet_amount(), 3);
    }

    #[test]
    fn test_round_points_by_index() {
        let game = Game::<TienLen>::create(&["a", "b"], &mut ids());
        let order = game.player_ids();
        let game = game.add_round(Round::normal(order.clone()));

        let sheet = game.round_points(0).unwrap();
        assert_eq!(sheet[&order[0]], 2);
        assert_eq!(sheet[&order[1]], -2);
        assert!(game.round_points(1).is_none());
    }

    #[test]
    fn test_from_value_rejects_bad_shapes() {
        assert!(Game::<TienLen>::from_value(&json!(null)).is_none());
        assert!(Game::<TienLen>::from_value(&json!({"players": [], "rounds": []})).is_none());
        assert!(Game::<TienLen>::from_value(&json!({"players": [{"id": "a", "name": "A"}]})).is_none());
        assert!(Game::<TienLen>::from_value(&json!({"players": [{"id": "a"}], "rounds": {}})).is_none());
        assert!(Game::<TienLen>::from_value(&json!({"players": [{"name": "no id"}], "rounds": []})).is_none());
    }

    #[test]
    fn test_from_value_skips_players_without_id() {
        let game = Game::<TienLen>::from_value(&json!({
            "players": [{"id": "a", "name": "Ann"}, {"name": "no id"}, {"id": 7}, {"id": "b", "name": "Bo"}],
            "rounds": []
        }))
        .unwrap();

        assert_eq!(game.player_ids(), vec![PlayerId::new("a"), PlayerId::new("b")]);
        assert_eq!(game.players()[1].name, "Bo");
    }

    #[test]
    fn test_from_value_migrates() {
        let game = Game::<TienLen>::from_value(&json!({
            "id": "g1",
            "createdAt": 42,
            "players": [{"id": "a", "name": "Ann"}, {"id": "b", "name": "Bo"}],
            "config": {"pointsRuc1": 6},
            "rounds": [{"order": ["a", "b"], "lastWith2": [{"playerId": "b", "type": "red"}]}]
        }))
        .unwrap();

        assert_eq!(game.id(), "g1");
        assert_eq!(game.created_at(), 42);
        assert_eq!(game.config().points_stuck_per_person, 6);
        assert_eq!(game.rounds().len(), 1);

        // Placement 2/1 from the migrated default config, red2 held: -2.
        let totals = game.total_scores();
        assert_eq!(totals[&PlayerId::new("a")], 2);
        assert_eq!(totals[&PlayerId::new("b")], 1 - 2);
    }

    #[test]
    fn test_json_roundtrip() {
        let game = Game::<TienLen>::create(&["a", "b", "c"], &mut ids());
        let order = game.player_ids();
        let game = game
            .add_round(Round::normal(order.clone()).with_stuck_count(1))
            .add_round(Round::sweep(order[1].clone()));

        let value: Value = serde_json::from_str(&game.to_json().unwrap()).unwrap();
        assert_eq!(Game::<TienLen>::from_value(&value), Some(game));
    }
}
