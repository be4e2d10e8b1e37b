
use std::collections::HashSet;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::game::{Game, GameId};
use crate::storage::{Storage, StorageError};

/// Storage slot holding the serialised favorites
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Could not access favorites storage: {0}")]
    Storage(#[from] StorageError),
    #[error("Could not serialise favorites: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FavoritesError>;

/// Snapshots of favorited games, unique by id and kept in the order they were added.
/// Every mutation writes the whole set back to storage before returning.
pub struct FavoritesStore<S: Storage> {
    storage: S,
    items: Vec<Game>,
}

impl<S: Storage> FavoritesStore<S> {
    /// Read favorites from storage. A missing slot is an empty set; so is a slot that can't be
    /// parsed, which is logged and left in place until the next mutation overwrites it.
    pub fn load(storage: S) -> Result<FavoritesStore<S>> {
        let items = match storage.get(FAVORITES_KEY)? {
            None => vec![],
            Some(raw) => match serde_json::from_str::<Vec<Game>>(&raw) {
                Ok(games) => dedup(games),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed favorites in storage");
                    vec![]
                }
            },
        };

        Ok(FavoritesStore { storage, items })
    }

    pub fn items(&self) -> &[Game] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_favorite(&self, id: GameId) -> bool {
        self.items.iter().any(|g| g.id == id)
    }

    /// Returns false, changing nothing, if a game with the same id is already present.
    /// The in-memory set only changes once the write has succeeded.
    pub fn add(&mut self, game: Game) -> Result<bool> {
        if self.is_favorite(game.id) {
            return Ok(false);
        }

        info!(id = %game.id, name = %game.name, "Adding favorite");
        let mut next = self.items.clone();
        next.push(game);
        self.commit(next)?;
        Ok(true)
    }

    /// Returns false if there was nothing to remove
    pub fn remove(&mut self, id: GameId) -> Result<bool> {
        if !self.is_favorite(id) {
            return Ok(false);
        }

        info!(%id, "Removing favorite");
        let next = self.items.iter().filter(|g| g.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        info!(count = self.items.len(), "Clearing favorites");
        self.storage.remove(FAVORITES_KEY)?;
        self.items.clear();
        Ok(())
    }

    fn commit(&mut self, next: Vec<Game>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(FAVORITES_KEY, &raw)?;
        self.items = next;
        Ok(())
    }
}

// Older payloads may carry the same game more than once; the first copy wins
fn dedup(games: Vec<Game>) -> Vec<Game> {
    let mut seen: HashSet<GameId> = HashSet::new();
    games.into_iter().filter(|g| seen.insert(g.id)).collect()
}
