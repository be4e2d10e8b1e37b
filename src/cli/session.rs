use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use crate::cli::Result;
use crate::config;
use crate::session::{LocalSession, SessionHandling};
use crate::storage::FileStorage;

fn open(config_file: Option<&PathBuf>) -> Result<LocalSession<FileStorage>> {
    let conf = config::read(config_file)?;
    let storage = FileStorage::new(&conf.data_dir()?);
    Ok(LocalSession::load(storage)?)
}

#[derive(Debug, Parser)]
pub struct RunLogin {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunLogin {
    pub(super) fn run(&self) -> Result<()> {
        let mut session = open(self.config_file.as_ref())?;

        if let Some(since) = session.signed_in_at() {
            println!("Already signed in since {}", since.format("%Y-%m-%d %H:%M"));
            return Ok(());
        }

        session.sign_in(Utc::now())?;
        println!("Signed in. Your library is available with `gamehub favorites list`.");
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct RunLogout {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunLogout {
    pub(super) fn run(&self) -> Result<()> {
        let mut session = open(self.config_file.as_ref())?;

        if !session.is_signed_in() {
            println!("Not signed in");
            return Ok(());
        }

        session.sign_out()?;
        println!("Signed out");
        Ok(())
    }
}
