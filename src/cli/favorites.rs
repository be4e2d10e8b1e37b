use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::FavoriteChange;
use crate::cli::browse::summary_line;
use crate::cli::{build_app, CliApp, Result};
use crate::config;
use crate::models::game::GameId;
use crate::notify::NotificationHandling;

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// Show the games in your library
    List(RunList),
    /// Add a game to your library
    Add(RunAdd),
    /// Remove a game from your library
    Remove(RunRemove),
    /// Empty your library
    Clear(RunClear),
}

impl FavoritesCommand {
    pub(super) fn run(&self) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.run(),
            Self::Add(cmd) => cmd.run(),
            Self::Remove(cmd) => cmd.run(),
            Self::Clear(cmd) => cmd.run(),
        }
    }
}

fn open(config_file: Option<&PathBuf>) -> Result<CliApp> {
    let conf = config::read(config_file)?;
    build_app(&conf)
}

fn report(app: &mut CliApp, change: FavoriteChange, done: &str, unchanged: &str) {
    match change {
        FavoriteChange::Added | FavoriteChange::Removed => println!("{}", done),
        FavoriteChange::Unchanged => println!("{}", unchanged),
        FavoriteChange::SignInRequired => (),
    }
    app.notifier_mut().run();
}

#[derive(Debug, Parser)]
pub struct RunList {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunList {
    fn run(&self) -> Result<()> {
        let mut app = open(self.config_file.as_ref())?;

        match app.library() {
            None => (),
            Some([]) => println!("Your library is empty. Start adding games with `gamehub favorites add <id>`!"),
            Some(games) => {
                println!("My Library ({} games)", games.len());
                for g in games {
                    println!("{}", summary_line(g, true));
                }
            }
        }
        app.notifier_mut().run();
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct RunAdd {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
    #[arg(help = "Game id")]
    id: u64,
}

impl RunAdd {
    /// Fetch the game's details and save them as a favorite
    fn run(&self) -> Result<()> {
        let mut app = open(self.config_file.as_ref())?;

        let change = match app.add_favorite_by_id(GameId(self.id))? {
            Some(change) => change,
            None => {
                println!("{}", app.detail().error().unwrap_or("Game not found"));
                return Ok(());
            }
        };
        let name = app.detail().game().map(|g| g.name.clone()).unwrap_or(self.id.to_string());

        report(
            &mut app,
            change,
            &format!("Added {} to your library", name),
            &format!("{} is already in your library", name),
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct RunRemove {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
    #[arg(help = "Game id")]
    id: u64,
}

impl RunRemove {
    fn run(&self) -> Result<()> {
        let mut app = open(self.config_file.as_ref())?;
        let change = app.remove_favorite(GameId(self.id))?;

        report(
            &mut app,
            change,
            &format!("Removed {} from your library", self.id),
            &format!("{} is not in your library", self.id),
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct RunClear {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunClear {
    fn run(&self) -> Result<()> {
        let mut app = open(self.config_file.as_ref())?;
        let change = app.clear_favorites()?;

        report(&mut app, change, "Cleared your library", "Your library is already empty");
        Ok(())
    }
}
