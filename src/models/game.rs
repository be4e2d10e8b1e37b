use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An id + name pair, as used for genres, platforms, developers and publishers
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Screenshot {
    pub id: i64,
    pub image: String,
}

/// A game as presented by the catalog. Favorites hold frozen copies of these, so every field
/// beyond the id and name defaults when absent to keep older snapshots readable.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    #[serde(default)]
    pub platforms: Vec<NamedRef>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub developers: Vec<NamedRef>,
    #[serde(default)]
    pub publishers: Vec<NamedRef>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Game {
    /// A game with only an id and name; everything else empty
    pub fn summary(id: u64, name: &str) -> Game {
        Game {
            id: GameId(id),
            name: name.to_string(),
            released: None,
            rating: 0.0,
            metacritic: None,
            genres: vec![],
            platforms: vec![],
            screenshots: vec![],
            description: None,
            background_image: None,
            developers: vec![],
            publishers: vec![],
            website: None,
        }
    }
}

/// One page of list results, tagged with the page number that was asked for
#[derive(Clone, Debug, PartialEq)]
pub struct GamePage {
    pub results: Vec<Game>,
    pub count: u64,
    pub requested_page: u32,
}

/// A selectable genre or tag for narrowing list queries
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    pub id: u64,
    pub name: String,
    pub slug: String,
}
