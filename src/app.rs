
use thiserror::Error;
use tracing::error;

use crate::catalog::{self, CatalogHandling};
use crate::favorites::{FavoritesError, FavoritesStore};
use crate::models::game::{Game, GameId, GamePage};
use crate::notify::{GatedAction, Notification, NotificationHandling};
use crate::query::{FilterPatch, FilterSelection};
use crate::session::SessionHandling;
use crate::state::{DetailView, GamesState, RequestStatus, RequestTicket, ResponsePolicy};
use crate::storage::Storage;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to update favorites: {0}")]
    Favorites(#[from] FavoritesError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Outcome of a favorites intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
    Unchanged,
    SignInRequired,
}

/// Owns all application state and turns user intents into state transitions.
///
/// Catalog failures never surface as errors here; they land in the list or detail status.
/// Only favorites persistence can fail an intent.
pub struct App<C, S, Se, N>
where
    C: CatalogHandling,
    S: Storage,
    Se: SessionHandling,
    N: NotificationHandling,
{
    catalog: C,
    session: Se,
    notifier: N,
    games: GamesState,
    detail: DetailView,
    favorites: FavoritesStore<S>,
}

impl<C, S, Se, N> App<C, S, Se, N>
where
    C: CatalogHandling,
    S: Storage,
    Se: SessionHandling,
    N: NotificationHandling,
{
    pub fn new(
        catalog: C,
        favorites: FavoritesStore<S>,
        session: Se,
        notifier: N,
        policy: ResponsePolicy,
    ) -> App<C, S, Se, N> {
        App {
            catalog,
            session,
            notifier,
            games: GamesState::new(policy),
            detail: DetailView::default(),
            favorites,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn games(&self) -> &GamesState {
        &self.games
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn session(&self) -> &Se {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Mark a list request as started. Pair with [`App::finish_load`] once the catalog answers.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.games.games_requested()
    }

    /// Apply a catalog answer to the list. Returns false if it was discarded as stale.
    pub fn finish_load(&mut self, ticket: RequestTicket, result: catalog::Result<GamePage>) -> bool {
        match result {
            Ok(page) => self.games.games_loaded(ticket, page),
            Err(e) => {
                error!(error = %e, "Failed to load games");
                self.games.games_failed(ticket, &e.to_string())
            }
        }
    }

    /// Fetch `page` with the current filters
    pub fn load_games(&mut self, page: u32) -> RequestStatus {
        let ticket = self.begin_load();
        let result = self.catalog.list_games(page, self.games.filters());
        self.finish_load(ticket, result);
        self.games.status()
    }

    pub fn change_page(&mut self, page: u32) -> RequestStatus {
        self.games.set_current_page(page);
        self.load_games(page)
    }

    /// Merge `patch` into the filters without loading anything
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.games.set_filters(patch);
    }

    /// Merge `patch` into the filters and start again from page 1
    pub fn apply_filters(&mut self, patch: FilterPatch) -> RequestStatus {
        self.set_filters(patch);
        self.change_page(1)
    }

    pub fn reset_filters(&mut self) -> RequestStatus {
        self.apply_filters(FilterPatch::replace_all(FilterSelection::default()))
    }

    /// Blank terms are ignored and return None
    pub fn search(&mut self, term: &str) -> Option<RequestStatus> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(self.apply_filters(FilterPatch::new().search(Some(term))))
    }

    pub fn clear_search(&mut self) -> RequestStatus {
        self.apply_filters(FilterPatch::new().search(None))
    }

    pub fn open_detail(&mut self, id: GameId) -> RequestStatus {
        self.detail.requested(id);
        match self.catalog.get_game_detail(id) {
            Ok(game) => self.detail.loaded(game),
            Err(e) => {
                error!(%id, error = %e, "Failed to load game details");
                self.detail.failed(id);
            }
        }
        self.detail.status()
    }

    /// Back to the listing
    pub fn close_detail(&mut self) {
        self.detail.reset();
    }

    fn signed_in_or_notify(&mut self, action: GatedAction) -> bool {
        if self.session.is_signed_in() {
            return true;
        }
        self.notifier.enqueue(Notification::SignInRequired { action });
        false
    }

    /// Add `game` if it isn't a favorite, otherwise remove it. The stored copy is a snapshot
    /// of `game` as it is now.
    pub fn toggle_favorite(&mut self, game: &Game) -> Result<FavoriteChange> {
        if self.favorites.is_favorite(game.id) {
            self.remove_favorite(game.id)
        } else {
            self.add_favorite(game.clone())
        }
    }

    pub fn add_favorite(&mut self, game: Game) -> Result<FavoriteChange> {
        if !self.signed_in_or_notify(GatedAction::AddFavorite) {
            return Ok(FavoriteChange::SignInRequired);
        }

        match self.favorites.add(game)? {
            true => Ok(FavoriteChange::Added),
            false => Ok(FavoriteChange::Unchanged),
        }
    }

    /// Fetch the game's details and add them as a favorite. Nothing is fetched while signed
    /// out. Returns None when the details couldn't be loaded; `detail()` then holds the error.
    pub fn add_favorite_by_id(&mut self, id: GameId) -> Result<Option<FavoriteChange>> {
        if !self.signed_in_or_notify(GatedAction::AddFavorite) {
            return Ok(Some(FavoriteChange::SignInRequired));
        }
        if self.favorites.is_favorite(id) {
            return Ok(Some(FavoriteChange::Unchanged));
        }

        if self.open_detail(id) != RequestStatus::Succeeded {
            return Ok(None);
        }
        match self.detail.game().cloned() {
            Some(game) => self.add_favorite(game).map(Some),
            None => Ok(None),
        }
    }

    pub fn remove_favorite(&mut self, id: GameId) -> Result<FavoriteChange> {
        if !self.signed_in_or_notify(GatedAction::RemoveFavorite) {
            return Ok(FavoriteChange::SignInRequired);
        }

        match self.favorites.remove(id)? {
            true => Ok(FavoriteChange::Removed),
            false => Ok(FavoriteChange::Unchanged),
        }
    }

    pub fn clear_favorites(&mut self) -> Result<FavoriteChange> {
        if !self.signed_in_or_notify(GatedAction::ClearFavorites) {
            return Ok(FavoriteChange::SignInRequired);
        }

        let had_items = !self.favorites.is_empty();
        self.favorites.clear()?;
        match had_items {
            true => Ok(FavoriteChange::Removed),
            false => Ok(FavoriteChange::Unchanged),
        }
    }

    /// The user's favorites, or None (with a notice queued) when signed out
    pub fn library(&mut self) -> Option<&[Game]> {
        if !self.signed_in_or_notify(GatedAction::ViewLibrary) {
            return None;
        }
        Some(self.favorites.items())
    }
}
