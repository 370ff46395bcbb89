//! Paragraph fingerprints for matching rendered HTML back to its Markdown source.
//!
//! Both sides feed the text of each block (paragraph, heading, list item, table cell) into a
//! [`ParagraphWalker`]. The walker keeps only alphanumeric characters, lowercased, so emphasis
//! markers, entities, and reflowed whitespace produce the same fingerprint on both sides.
//!
//! ```rust
//! use hyperlink_paragraphs::{DebugParagraphWalker, markdown_paragraphs};
//!
//! let paragraphs = markdown_paragraphs::<DebugParagraphWalker>("Hello, *World*!\n\n- One item\n");
//! assert_eq!(paragraphs, vec!["helloworld".to_owned(), "oneitem".to_owned()]);
//! ```

mod error;
mod markdown;
mod walker;

pub use crate::error::{ParagraphError, ParagraphErrorExt};
pub use crate::markdown::{DocumentSource, markdown_paragraphs};
pub use crate::walker::{DebugParagraphWalker, ParagraphHasher, ParagraphWalker};
