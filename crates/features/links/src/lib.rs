//! Link extraction and bookkeeping.
//!
//! * [`Document`] turns one HTML file into a stream of [`Link`]s: what the file *defines*
//!   (itself, its directory for index files, its anchors) and what it *uses*.
//! * [`LinkCollector`] implementations fold those streams per worker thread and merge them.
//!   [`BrokenLinkCollector`] only keeps usages of hrefs nobody defined.
//!
//! ```rust
//! use hyperlink_links::{BrokenLinkCollector, Document, Link, LinkCollector};
//! use hyperlink_paragraphs::ParagraphHasher;
//! use std::path::Path;
//!
//! let doc = Document::new(Path::new("public"), Path::new("public/blog/index.html"));
//! let mut links = Vec::new();
//! doc.extract_links::<ParagraphHasher>(r#"<a href="../about/">About</a>"#, &mut links, false, false);
//!
//! let mut collector = BrokenLinkCollector::new();
//! for link in links {
//!     collector.ingest(link);
//! }
//! let broken = collector.get_broken_links(false);
//! assert_eq!(broken.len(), 1);
//! assert_eq!(broken[0].used_link.href.as_str(), "about");
//! ```

mod collector;
mod document;
mod error;
mod href;

pub use crate::collector::{BrokenLink, BrokenLinkCollector, LinkCollector, UsedLinkCollector};
pub use crate::document::{DefinedLink, Document, Link, UsedLink};
pub use crate::error::{LinkError, LinkErrorExt};
pub use crate::href::Href;
