//! # Checker
//!
//! The link checking pipeline behind the `hyperlink` binary.
//!
//! 1. [`walk_files`] lists every regular file of the site (symlinks are rejected).
//! 2. Files are processed on a rayon pool; each worker folds the links of its documents
//!    into a [`BrokenLinkCollector`](hyperlink_links::BrokenLinkCollector) and the
//!    collectors are merged pairwise.
//! 3. With a sources directory, broken links are attributed to the Markdown files whose
//!    paragraphs match the paragraph the link appeared in ([`index_sources`]).
//!
//! ```rust,no_run
//! use hyperlink_checker::{CheckOptions, check_links};
//!
//! let report = check_links(&CheckOptions::new("public").check_anchors(true))?;
//! for entry in &report.entries {
//!     println!("{}: {} bad links", entry.path.display(), entry.bad_links.len());
//! }
//! std::process::exit(i32::from(report.exit_code()));
//! # Ok::<(), hyperlink_checker::CheckError>(())
//! ```

mod check;
mod error;
mod pool;
mod sources;
mod tools;
mod walk;

pub use crate::check::{CheckOptions, CheckReport, ReportEntry, check_links};
pub use crate::error::{CheckError, CheckErrorExt};
pub use crate::sources::{SourceIndex, index_sources};
pub use crate::tools::{ParagraphMatchReport, UnmatchedLink, dump_paragraphs, match_all_paragraphs};
pub use crate::walk::walk_files;
