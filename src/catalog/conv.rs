#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::models::game::{FilterOption, Game, GameId, NamedRef, Screenshot};
use crate::models::rawg::{RawgGame, RawgNamed, RawgScreenshot};

fn to_named(r: RawgNamed) -> NamedRef {
    NamedRef { id: r.id, name: r.name }
}

fn to_screenshot(s: RawgScreenshot) -> Screenshot {
    Screenshot { id: s.id, image: s.image }
}

fn named_list(list: Option<Vec<RawgNamed>>) -> Vec<NamedRef> {
    list.unwrap_or_default().into_iter().map(to_named).collect()
}

// RAWG gives empty strings rather than null for a few text fields
fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

/// Parse RAWG's YYYY-MM-DD release dates; anything else is treated as unknown
pub(super) fn parse_release_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub(super) fn extract_game(rawg: RawgGame) -> Game {
    Game {
        id: GameId(rawg.id),
        name: rawg.name,
        released: rawg.released.as_deref().and_then(parse_release_date),
        rating: rawg.rating.unwrap_or(0.0),
        metacritic: rawg.metacritic,
        genres: named_list(rawg.genres),
        platforms: rawg
            .platforms
            .unwrap_or_default()
            .into_iter()
            .map(|p| to_named(p.platform))
            .collect(),
        screenshots: rawg
            .short_screenshots
            .unwrap_or_default()
            .into_iter()
            .map(to_screenshot)
            .collect(),
        description: non_empty(rawg.description),
        background_image: non_empty(rawg.background_image),
        developers: named_list(rawg.developers),
        publishers: named_list(rawg.publishers),
        website: non_empty(rawg.website),
    }
}

/// A full detail record; the screenshots come from their own resource and replace any
/// previews embedded in the game itself.
pub(super) fn extract_game_detail(rawg: RawgGame, screenshots: Vec<RawgScreenshot>) -> Game {
    let mut game = extract_game(rawg);
    if !screenshots.is_empty() {
        game.screenshots = screenshots.into_iter().map(to_screenshot).collect();
    }
    game
}

pub(super) fn extract_filter_option(rawg: RawgNamed) -> FilterOption {
    FilterOption { id: rawg.id, name: rawg.name, slug: rawg.slug }
}
