
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The catalog always serves lists in pages of this size
pub const PAGE_SIZE: u32 = 20;

/// Oldest year offered as a release year filter
pub const EARLIEST_RELEASE_YEAR: i32 = 1990;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown ordering \"{0}\"; expected one of -rating, rating, -released, released, name, -name")]
pub struct UnknownOrdering(pub String);

/// Sort keys accepted by the catalog for list queries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ordering {
    #[default]
    RatingDesc,
    RatingAsc,
    ReleasedDesc,
    ReleasedAsc,
    NameAsc,
    NameDesc,
}

impl Ordering {
    pub const ALL: [Ordering; 6] = [
        Ordering::RatingDesc,
        Ordering::RatingAsc,
        Ordering::ReleasedDesc,
        Ordering::ReleasedAsc,
        Ordering::NameAsc,
        Ordering::NameDesc,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            Ordering::RatingDesc => "-rating",
            Ordering::RatingAsc => "rating",
            Ordering::ReleasedDesc => "-released",
            Ordering::ReleasedAsc => "released",
            Ordering::NameAsc => "name",
            Ordering::NameDesc => "-name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ordering::RatingDesc => "Rating (High to Low)",
            Ordering::RatingAsc => "Rating (Low to High)",
            Ordering::ReleasedDesc => "Release Date (Newest)",
            Ordering::ReleasedAsc => "Release Date (Oldest)",
            Ordering::NameAsc => "Name (A-Z)",
            Ordering::NameDesc => "Name (Z-A)",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for Ordering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ordering::ALL
            .into_iter()
            .find(|o| o.as_param() == s)
            .ok_or_else(|| UnknownOrdering(s.to_string()))
    }
}

impl TryFrom<String> for Ordering {
    type Error = UnknownOrdering;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ordering> for String {
    fn from(o: Ordering) -> String {
        o.as_param().to_string()
    }
}

/// Optional criteria narrowing a list query. `None` (or a blank string) means unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub release_year: Option<i32>,
    pub ordering: Option<Ordering>,
    pub search: Option<String>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            category: None,
            tag: None,
            release_year: None,
            ordering: Some(Ordering::default()),
            search: None,
        }
    }
}

impl FilterSelection {
    /// A selection with every field unset, including ordering
    pub fn empty() -> FilterSelection {
        FilterSelection { ordering: None, ..FilterSelection::default() }
    }

    /// Overwrite the fields the patch mentions, keeping the rest
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
        if let Some(year) = patch.release_year {
            self.release_year = year;
        }
        if let Some(ordering) = patch.ordering {
            self.ordering = ordering;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
    }
}

/// A partial update to a [`FilterSelection`]. The outer `Option` says whether a field is
/// mentioned at all; the inner one is the new value, `None` clearing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub category: Option<Option<String>>,
    pub tag: Option<Option<String>>,
    pub release_year: Option<Option<i32>>,
    pub ordering: Option<Option<Ordering>>,
    pub search: Option<Option<String>>,
}

impl FilterPatch {
    pub fn new() -> FilterPatch {
        FilterPatch::default()
    }

    /// A patch that sets every field to the values in `selection`
    pub fn replace_all(selection: FilterSelection) -> FilterPatch {
        FilterPatch {
            category: Some(selection.category),
            tag: Some(selection.tag),
            release_year: Some(selection.release_year),
            ordering: Some(selection.ordering),
            search: Some(selection.search),
        }
    }

    pub fn category(mut self, category: Option<&str>) -> FilterPatch {
        self.category = Some(category.map(str::to_string));
        self
    }

    pub fn tag(mut self, tag: Option<&str>) -> FilterPatch {
        self.tag = Some(tag.map(str::to_string));
        self
    }

    pub fn release_year(mut self, year: Option<i32>) -> FilterPatch {
        self.release_year = Some(year);
        self
    }

    pub fn ordering(mut self, ordering: Option<Ordering>) -> FilterPatch {
        self.ordering = Some(ordering);
        self
    }

    pub fn search(mut self, search: Option<&str>) -> FilterPatch {
        self.search = Some(search.map(str::to_string));
        self
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Date range covering the whole of `year`, in the format the catalog expects
pub fn year_range(year: i32) -> String {
    format!("{}-01-01,{}-12-31", year, year)
}

/// Build the query parameters for one page of a list query.
///
/// Credential, page and page size always come first; each filter follows only when set.
/// Pages below 1 are clamped to 1.
pub fn compose(api_key: &str, page: u32, filters: &FilterSelection) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("key", api_key.to_string()),
        ("page", page.max(1).to_string()),
        ("page_size", PAGE_SIZE.to_string()),
    ];

    if let Some(genres) = non_blank(&filters.category) {
        params.push(("genres", genres.to_string()));
    }
    if let Some(tags) = non_blank(&filters.tag) {
        params.push(("tags", tags.to_string()));
    }
    if let Some(year) = filters.release_year {
        params.push(("dates", year_range(year)));
    }
    if let Some(ordering) = filters.ordering {
        params.push(("ordering", ordering.as_param().to_string()));
    }
    if let Some(search) = non_blank(&filters.search) {
        params.push(("search", search.to_string()));
    }

    params
}

/// Release years offered for filtering, newest first
pub fn release_years(current_year: i32) -> Vec<i32> {
    (EARLIEST_RELEASE_YEAR..=current_year).rev().collect()
}

/// Number of pages needed to show `count` results
pub fn total_pages(count: u64) -> u32 {
    u32::try_from(count.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
}
