use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::cli::{build_app, Result};
use crate::config;
use crate::models::game::{Game, GameId, NamedRef};
use crate::state::RequestStatus;

#[derive(Debug, Parser)]
pub struct RunShow {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
    #[arg(help = "Game id")]
    id: u64,
}

impl RunShow {
    /// Show everything the catalog knows about one game
    pub(super) fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let mut app = build_app(&conf)?;

        if app.open_detail(GameId(self.id)) == RequestStatus::Failed {
            println!("{}", app.detail().error().unwrap_or("Game not found"));
            println!("Run `gamehub browse` to return to the listing.");
            return Ok(());
        }

        if let Some(game) = app.detail().game() {
            print_detail(game, app.favorites().is_favorite(game.id));
        }
        Ok(())
    }
}

fn names(list: &[NamedRef]) -> String {
    match list.is_empty() {
        true => "N/A".to_string(),
        false => list.iter().map(|n| &n.name).join(", "),
    }
}

fn print_detail(game: &Game, favorite: bool) {
    println!("{}{}", game.name, if favorite { " ♥ (in your library)" } else { "" });
    println!("★ {}  Metacritic: {}", game.rating, game.metacritic.map(|m| m.to_string()).unwrap_or("N/A".to_string()));
    println!();

    if let Some(description) = &game.description {
        println!("About\n{}\n", description);
    }

    println!("Release Date: {}", game.released.map(|d| d.format("%-d %b %Y").to_string()).unwrap_or("TBA".to_string()));
    println!("Genres: {}", names(&game.genres));
    println!("Platforms: {}", names(&game.platforms));
    println!("Developer: {}", names(&game.developers));
    println!("Publisher: {}", names(&game.publishers));
    if let Some(website) = &game.website {
        println!("Website: {}", website);
    }

    if !game.screenshots.is_empty() {
        println!("\nScreenshots");
        for s in &game.screenshots {
            println!("  {}", s.image);
        }
    }
}
