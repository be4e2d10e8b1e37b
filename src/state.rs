
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::game::{Game, GameId, GamePage};
use crate::query::{self, FilterPatch, FilterSelection};

pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load game details. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What to do with a list response that arrives after a newer request has been issued
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsePolicy {
    /// Only the most recently issued request may update the list
    #[default]
    LatestIssued,
    /// Whichever response resolves last is shown, even if it answers an older request
    LastResolved,
}

/// Identifies one issued list request; later requests carry larger tickets
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// The game list, its request status, paging and active filters.
///
/// All changes go through the named transitions below. The list has no terminal state: a new
/// request may start from any status.
#[derive(Debug)]
pub struct GamesState {
    games: Vec<Game>,
    status: RequestStatus,
    error: Option<String>,
    current_page: u32,
    total_pages: u32,
    filters: FilterSelection,
    policy: ResponsePolicy,
    latest: u64,
}

impl GamesState {
    pub fn new(policy: ResponsePolicy) -> GamesState {
        GamesState {
            games: vec![],
            status: RequestStatus::Idle,
            error: None,
            current_page: 1,
            total_pages: 0,
            filters: FilterSelection::default(),
            policy,
            latest: 0,
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
    }

    /// No bounds check against the page count; that's up to the caller
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    pub fn games_requested(&mut self) -> RequestTicket {
        self.latest += 1;
        self.status = RequestStatus::Loading;
        RequestTicket(self.latest)
    }

    /// Apply a successful response. Returns false if the response was discarded as stale.
    pub fn games_loaded(&mut self, ticket: RequestTicket, page: GamePage) -> bool {
        if !self.accepts(ticket) {
            return false;
        }

        info!(page = page.requested_page, count = page.count, "Games loaded");
        self.status = RequestStatus::Succeeded;
        self.error = None;
        self.games = page.results;
        self.total_pages = query::total_pages(page.count);
        self.current_page = page.requested_page;
        true
    }

    /// Apply a failed response. Returns false if the failure was discarded as stale.
    pub fn games_failed(&mut self, ticket: RequestTicket, message: &str) -> bool {
        if !self.accepts(ticket) {
            return false;
        }

        self.status = RequestStatus::Failed;
        self.error = Some(message.to_string());
        true
    }

    fn accepts(&self, ticket: RequestTicket) -> bool {
        match self.policy {
            ResponsePolicy::LastResolved => true,
            ResponsePolicy::LatestIssued if ticket.0 == self.latest => true,
            ResponsePolicy::LatestIssued => {
                warn!(ticket = ticket.0, latest = self.latest, "Discarding stale games response");
                false
            }
        }
    }
}

impl Default for GamesState {
    fn default() -> Self {
        GamesState::new(ResponsePolicy::default())
    }
}

/// Status of the single-game detail view, independent of the list
#[derive(Debug, Default)]
pub struct DetailView {
    id: Option<GameId>,
    status: RequestStatus,
    game: Option<Game>,
    error: Option<String>,
}

impl DetailView {
    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn requested(&mut self, id: GameId) {
        self.id = Some(id);
        self.status = RequestStatus::Loading;
        self.game = None;
        self.error = None;
    }

    /// Ignored unless it answers the game currently being viewed
    pub fn loaded(&mut self, game: Game) {
        if self.id != Some(game.id) {
            return;
        }
        self.status = RequestStatus::Succeeded;
        self.game = Some(game);
    }

    /// Ignored unless it answers the game currently being viewed
    pub fn failed(&mut self, id: GameId) {
        if self.id != Some(id) {
            return;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(DETAIL_ERROR_MESSAGE.to_string());
    }

    /// Leave the detail view, going back to the listing
    pub fn reset(&mut self) {
        *self = DetailView::default();
    }
}
