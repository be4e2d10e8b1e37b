use std::path::PathBuf;

use chrono::{Datelike, Utc};
use clap::Parser;

use crate::catalog::CatalogFilterHandling;
use crate::cli::{build_app, Result};
use crate::config;
use crate::models::game::FilterOption;
use crate::query::{self, Ordering};

fn print_options(options: &[FilterOption]) {
    for o in options {
        println!("{:>6}  {:<30} {}", o.id, o.name, o.slug);
    }
}

#[derive(Debug, Parser)]
pub struct RunGenres {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunGenres {
    pub(super) fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let app = build_app(&conf)?;

        print_options(&app.catalog().get_genres()?);
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct RunTags {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunTags {
    pub(super) fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let app = build_app(&conf)?;

        print_options(&app.catalog().get_tags()?);
        Ok(())
    }
}

/// Release years and orderings need no catalog access
#[derive(Debug, Parser)]
pub struct RunYears {}

impl RunYears {
    pub(super) fn run(&self) -> Result<()> {
        let years = query::release_years(Utc::now().year());
        println!("Release years: {}..={}", query::EARLIEST_RELEASE_YEAR, years.first().copied().unwrap_or(query::EARLIEST_RELEASE_YEAR));

        println!("Orderings:");
        for o in Ordering::ALL {
            println!("  {:<10} {}", o.as_param(), o.label());
        }
        Ok(())
    }
}
