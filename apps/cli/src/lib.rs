//! # Hyperlink
//!
//! Command line front end of the link checker. Parsing lives in [`args`], settings resolution
//! in [`settings`], and stdout rendering in [`report`]; [`run`] ties them together once the
//! logger is up.
//!
//! ```no_run
//! use clap::Parser;
//! use hyperlink_cli::{args::Cli, run, settings};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse();
//!     let settings = settings::resolve(&cli)?;
//!     let code = run(&cli, &settings, &mut std::io::stdout().lock())?;
//!     std::process::exit(i32::from(code));
//! }
//! ```

pub mod args;
pub mod report;
pub mod settings;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use hyperlink_checker::{CheckOptions, check_links, dump_paragraphs, match_all_paragraphs};
use hyperlink_kernel::domain::settings::Settings;
use std::io::Write;
use tracing::debug;

/// Executes the parsed command and returns the process exit status.
///
/// Broken links are not errors: they are written to `out` and reflected in the status
/// (`1` bad links, `2` bad anchors only). Errors are reserved for unreadable sites.
pub fn run(cli: &Cli, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    match &cli.command {
        Some(Command::DumpParagraphs { file }) => {
            let paragraphs = dump_paragraphs(file)?;
            report::write_paragraphs(out, &paragraphs)?;
            Ok(0)
        },
        Some(Command::MatchAllParagraphs { base_path, sources }) => {
            let report = match_all_paragraphs(base_path, sources, settings.jobs)?;
            report::write_match_report(out, &report)?;
            Ok(0)
        },
        None => {
            let base_path = cli.base_path.clone().context("BASE_PATH is required")?;
            let options = CheckOptions::new(base_path)
                .jobs(settings.jobs)
                .check_anchors(settings.check_anchors)
                .sources(settings.sources.clone());
            debug!(?options, "Starting link check");

            let report = check_links(&options)?;
            let attributed = report.entries.iter().filter(|entry| entry.is_source).count();
            debug!(
                sources = attributed,
                documents = report.entries.len() - attributed,
                "Grouped broken links by file"
            );
            report::write_check_report(out, &report, settings.github_actions)
                .context("Failed to write report")?;
            Ok(report.exit_code())
        },
    }
}
