#[cfg(test)]
mod tests;

use serde::Deserialize;

/// Envelope shared by every paginated RAWG resource
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawgListResponse<T> {
    pub count: u64,
    pub results: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawgNamed {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawgPlatformEntry {
    pub platform: RawgNamed,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawgScreenshot {
    pub id: i64,
    pub image: String,
}

// RAWG sends null for many list fields, so they're all optional here
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawgGame {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub genres: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformEntry>>,
    #[serde(default)]
    pub short_screenshots: Option<Vec<RawgScreenshot>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub developers: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub publishers: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub website: Option<String>,
}

pub type RawgGamesResponse = RawgListResponse<RawgGame>;
pub type RawgScreenshotsResponse = RawgListResponse<RawgScreenshot>;
pub type RawgFilterOptionsResponse = RawgListResponse<RawgNamed>;
