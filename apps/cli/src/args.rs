//! # CLI Argument Definitions
//!
//! Flags given here override the settings file and `HYPERLINK__*` environment variables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A very fast link checker for static sites.
#[derive(Debug, Parser)]
#[command(name = "hyperlink")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A very fast link checker for static sites")]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// The static file path to check.
    ///
    /// This is assumed to be the root path of your server as well, so
    /// href="/foo" resolves to that folder's subfolder foo.
    #[arg(required = true, verbatim_doc_comment)]
    pub base_path: Option<PathBuf>,

    /// How many threads to use, default is to try and saturate CPU.
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,

    /// Whether to check for valid anchor references.
    #[arg(long)]
    pub check_anchors: bool,

    /// Path to directory of markdown files to use for reporting errors.
    #[arg(long, value_name = "DIR")]
    pub sources: Option<PathBuf>,

    /// Enable specialized output for GitHub actions.
    #[arg(long)]
    pub github_actions: bool,

    /// Settings file (defaults to `hyperlink.{toml,yaml,json}` if present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors to stderr.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Utilities for development of hyperlink.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dump out internal data for markdown or html file. This is mostly useful to figure out why
    /// a source file is not properly matched up with its target html file.
    ///
    /// Usage:
    ///
    ///    vimdiff <(hyperlink dump-paragraphs src/foo.md) <(hyperlink dump-paragraphs public/foo.html)
    ///
    /// Note that the output for HTML omits paragraphs that do not have links, while for Markdown
    /// all paragraphs are dumped.
    #[command(verbatim_doc_comment)]
    DumpParagraphs {
        /// A `.md`/`.mdx` or `.html`/`.htm` file
        file: PathBuf,
    },
    /// Try to match every link paragraph of a site against a sources folder and list the links
    /// whose paragraph could not be found.
    MatchAllParagraphs {
        /// The static file path
        base_path: PathBuf,
        /// Directory of markdown files
        sources: PathBuf,
    },
}
