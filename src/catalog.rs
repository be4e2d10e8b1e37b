pub mod conv;

use thiserror::Error;
use tracing::debug;
use ureq;

use crate::models::game::{FilterOption, Game, GameId, GamePage};
use crate::models::rawg::*;
use crate::query::{self, FilterSelection};

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("The catalog responded with HTTP {status} for {resource}")]
    Status { status: u16, resource: String },
    #[error("An http error occurred fetching data from the catalog: {0}")]
    Http(#[from] ureq::Transport),
    #[error("An IO error occurred fetching data from the catalog: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

pub trait CatalogListHandling {
    /// One page of games narrowed by `filters`, tagged with the page that was requested
    fn list_games(&self, page: u32, filters: &FilterSelection) -> Result<GamePage>;
}

pub trait CatalogDetailHandling {
    /// The full record for one game, including its screenshots
    fn get_game_detail(&self, id: GameId) -> Result<Game>;
}

pub trait CatalogFilterHandling {
    fn get_genres(&self) -> Result<Vec<FilterOption>>;
    fn get_tags(&self) -> Result<Vec<FilterOption>>;
}

pub trait CatalogHandling: CatalogListHandling + CatalogDetailHandling + CatalogFilterHandling {}

pub struct CatalogClient {
    api_key: String,
    base_url: String,
}

impl CatalogClient {
    pub fn new(api_key: &str, base_url: &str) -> CatalogClient {
        CatalogClient {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, resource: &str) -> ureq::Request {
        ureq::get(&format!("{}{}", &self.base_url, resource))
    }

    // Non-2xx responses come back from ureq as errors; keep only the status so the api key
    // in the url doesn't end up in user-facing messages
    fn call(resource: &str, req: ureq::Request) -> Result<ureq::Response> {
        match req.call() {
            Ok(res) => Ok(res),
            Err(ureq::Error::Status(status, _)) => Err(CatalogError::Status {
                status,
                resource: resource.to_string(),
            }),
            Err(ureq::Error::Transport(t)) => Err(t.into()),
        }
    }

    fn get_filter_options(&self, resource: &str) -> Result<Vec<FilterOption>> {
        debug!(resource, "fetching filter options");
        let req = self.request(resource).query("key", &self.api_key);
        let res = Self::call(resource, req)?.into_json::<RawgFilterOptionsResponse>()?;

        Ok(res.results.into_iter().map(conv::extract_filter_option).collect())
    }
}

impl CatalogListHandling for CatalogClient {
    fn list_games(&self, page: u32, filters: &FilterSelection) -> Result<GamePage> {
        let params = query::compose(&self.api_key, page, filters);
        debug!(page, ?filters, "fetching game list");

        let req = params
            .iter()
            .fold(self.request("/games"), |req, (k, v)| req.query(k, v));
        let res = Self::call("/games", req)?.into_json::<RawgGamesResponse>()?;

        Ok(GamePage {
            results: res.results.into_iter().map(conv::extract_game).collect(),
            count: res.count,
            requested_page: page.max(1),
        })
    }
}

impl CatalogDetailHandling for CatalogClient {
    fn get_game_detail(&self, id: GameId) -> Result<Game> {
        debug!(%id, "fetching game details");

        let resource = format!("/games/{}", id);
        let req = self.request(&resource).query("key", &self.api_key);
        let game = Self::call(&resource, req)?.into_json::<RawgGame>()?;

        let resource = format!("/games/{}/screenshots", id);
        let req = self.request(&resource).query("key", &self.api_key);
        let screenshots = Self::call(&resource, req)?.into_json::<RawgScreenshotsResponse>()?;

        Ok(conv::extract_game_detail(game, screenshots.results))
    }
}

impl CatalogFilterHandling for CatalogClient {
    fn get_genres(&self) -> Result<Vec<FilterOption>> {
        self.get_filter_options("/genres")
    }

    fn get_tags(&self) -> Result<Vec<FilterOption>> {
        self.get_filter_options("/tags")
    }
}

impl CatalogHandling for CatalogClient {}
