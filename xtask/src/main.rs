#![warn(rust_2018_idioms, unused_lifetimes)]

use xtask::handlers::{ci, testing};
use xtask::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Ci {} => ci::run_ci()?,
        AppCommands::Test { project } => testing::run_tests(project.as_deref())?,
        AppCommands::Doctest { project } => testing::run_doctests(project.as_deref())?,
    }

    Ok(())
}
