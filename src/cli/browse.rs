use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::cli::{build_app, Result};
use crate::config;
use crate::models::game::Game;
use crate::query::{FilterPatch, FilterSelection, Ordering};
use crate::state::RequestStatus;

#[derive(Debug, Parser)]
pub struct RunBrowse {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    #[arg(short, long, help = "Genre id or slug")]
    genre: Option<String>,
    #[arg(short, long, help = "Tag id or slug")]
    tag: Option<String>,
    #[arg(short, long, help = "Release year")]
    year: Option<i32>,
    #[arg(short, long, default_value_t = Ordering::RatingDesc, allow_hyphen_values = true)]
    ordering: Ordering,
    #[arg(short, long)]
    search: Option<String>,
}

impl RunBrowse {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            category: self.genre.clone(),
            tag: self.tag.clone(),
            release_year: self.year,
            ordering: Some(self.ordering),
            search: self.search.clone(),
        }
    }

    /// List one page of the catalog with the given filters
    pub(super) fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let mut app = build_app(&conf)?;

        app.set_filters(FilterPatch::replace_all(self.selection()));

        if app.change_page(self.page) == RequestStatus::Failed {
            println!("Error loading games: {}", app.games().error().unwrap_or("unknown error"));
            return Ok(());
        }

        let games = app.games();
        println!("Page {} of {}", games.current_page(), games.total_pages());
        for g in games.games() {
            println!("{}", summary_line(g, app.favorites().is_favorite(g.id)));
        }
        Ok(())
    }
}

pub(super) fn summary_line(g: &Game, favorite: bool) -> String {
    let released = g.released.map(|d| d.to_string()).unwrap_or("TBA".to_string());
    let metacritic = g.metacritic.map(|m| m.to_string()).unwrap_or("N/A".to_string());
    let genres = g.genres.iter().take(2).map(|genre| &genre.name).join(", ");

    format!(
        "{} {:>8}  {}  ★ {:.2}  Metacritic: {}  Released: {}  [{}]",
        if favorite { "♥" } else { " " },
        g.id.0,
        g.name,
        g.rating,
        metacritic,
        released,
        genres,
    )
}
