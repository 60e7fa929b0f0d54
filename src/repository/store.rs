//! Loading and saving games through a [`KeyValueStore`].
//!
//! Each game type uses its own key (`ScoreRules::STORAGE_KEY`), so the two
//! sheets never interact. Loading never fails: anything unreadable is
//! treated as "no game yet".

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{info, warn};

use super::game::Game;
use crate::core::error::StoreError;
use crate::core::ids::IdSource;
use crate::core::store::KeyValueStore;
use crate::rules::ScoreRules;

/// Persists one game type in a store.
///
/// ## Example
///
/// ```
/// use card_score::core::{IdSource, MemoryStore};
/// use card_score::games::host::{Host, HostRoundDraft, PlayerResult};
/// use card_score::repository::Repository;
///
/// let mut repo = Repository::<Host, _>::new(MemoryStore::new());
/// assert!(repo.load().is_none());
///
/// let game = repo.create(&["Ann", "Bo", "Cy"]);
/// let ids = game.player_ids();
/// let round = HostRoundDraft::new(ids[0].clone())
///     .with_result(ids[1].clone(), PlayerResult::win(2))
///     .validate(&ids)
///     .unwrap();
/// let game = game.add_round(round);
/// repo.save(&game).unwrap();
///
/// let loaded = repo.load().unwrap();
/// assert_eq!(loaded.total_scores()[&ids[1]], 2);
/// ```
#[derive(Debug)]
pub struct Repository<G: ScoreRules, S: KeyValueStore> {
    store: S,
    ids: IdSource,
    _rules: PhantomData<G>,
}

impl<G: ScoreRules, S: KeyValueStore> Repository<G, S> {
    /// Create a repository with an entropy-seeded id source.
    pub fn new(store: S) -> Self {
        Self::with_ids(store, IdSource::new())
    }

    /// Create a repository with a specific id source.
    pub fn with_ids(store: S, ids: IdSource) -> Self {
        Self {
            store,
            ids,
            _rules: PhantomData,
        }
    }

    /// Start a new game. Nothing is saved until [`Self::save`].
    pub fn create<N: AsRef<str>>(&mut self, names: &[N]) -> Game<G> {
        let game = Game::create(names, &mut self.ids);
        info!(game = G::NAME, id = game.id(), players = game.players().len(), "game created");
        game
    }

    /// Clear a game's rounds under a fresh id.
    pub fn reset(&mut self, game: &Game<G>) -> Game<G> {
        let next = game.reset(&mut self.ids);
        info!(game = G::NAME, old_id = game.id(), new_id = next.id(), "game reset");
        next
    }

    /// Load the stored game, migrating old shapes.
    ///
    /// Absent, unreadable or malformed blobs all yield `None`.
    pub fn load(&self) -> Option<Game<G>> {
        let blob = match self.store.get(G::STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                warn!(game = G::NAME, error = %e, "failed to read stored game");
                return None;
            }
        };

        let raw: Value = match serde_json::from_str(&blob) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(game = G::NAME, error = %e, "stored game is not valid JSON");
                return None;
            }
        };

        let game = Game::from_value(&raw);
        if game.is_none() {
            warn!(game = G::NAME, "stored game has no players or no round log");
        }
        game
    }

    /// Store `game`, replacing whatever was stored for this game type.
    pub fn save(&mut self, game: &Game<G>) -> Result<(), StoreError> {
        let blob = game.to_json()?;
        self.store.set(G::STORAGE_KEY, &blob)?;
        info!(game = G::NAME, id = game.id(), rounds = game.rounds().len(), "game saved");
        Ok(())
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
