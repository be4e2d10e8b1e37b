pub mod browse;
pub mod detail;
pub mod favorites;
pub mod filters;
pub mod session;

use clap::Parser;
use thiserror::Error;
use tracing::error;

use crate::app::{App, AppError};
use crate::catalog::{CatalogClient, CatalogError};
use crate::config::{self, Config, ConfigError};
use crate::favorites::{FavoritesError, FavoritesStore};
use crate::notify::PrintNotifier;
use crate::session::{LocalSession, SessionError};
use crate::storage::FileStorage;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("No RAWG api key configured; set rawg.api_key or {}", config::API_KEY_ENV)]
    MissingApiKey,
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Favorites(#[from] FavoritesError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("{0}")]
    App(#[from] AppError),
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CliError>;

pub type CliApp = App<CatalogClient, FileStorage, LocalSession<FileStorage>, PrintNotifier>;

/// Wire up the application from config: catalog client, favorites and session on disk
pub fn build_app(conf: &Config) -> Result<CliApp> {
    if conf.rawg.api_key.is_empty() {
        return Err(CliError::MissingApiKey);
    }

    let storage = FileStorage::new(&conf.data_dir()?);
    let catalog = CatalogClient::new(&conf.rawg.api_key, &conf.rawg.base_url);
    let favorites = FavoritesStore::load(storage.clone())?;
    let session = LocalSession::load(storage)?;

    Ok(App::new(catalog, favorites, session, PrintNotifier::new(), conf.state.response_policy))
}

#[derive(Debug, Parser)]
#[command(name = "gamehub")]
#[command(version = "0.1.0")]
#[command(about = "Browse the RAWG game catalog and keep a library of favorites")]
enum Cli {
    Browse(browse::RunBrowse),
    Show(detail::RunShow),
    Genres(filters::RunGenres),
    Tags(filters::RunTags),
    Years(filters::RunYears),
    #[command(subcommand)]
    Favorites(favorites::FavoritesCommand),
    Login(session::RunLogin),
    Logout(session::RunLogout),
}

impl Cli {
    fn run(&self) -> Result<()> {
        match self {
            Self::Browse(cmd) => cmd.run(),
            Self::Show(cmd) => cmd.run(),
            Self::Genres(cmd) => cmd.run(),
            Self::Tags(cmd) => cmd.run(),
            Self::Years(cmd) => cmd.run(),
            Self::Favorites(cmd) => cmd.run(),
            Self::Login(cmd) => cmd.run(),
            Self::Logout(cmd) => cmd.run(),
        }
    }
}

pub async fn cli_main() {
    let cli = Cli::parse();

    // Catalog calls block on http, so keep them off the async runtime
    let result = match tokio::task::spawn_blocking(move || cli.run()).await {
        Ok(r) => r,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
