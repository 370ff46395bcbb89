use std::borrow::Cow;

/// A specialized [`ParagraphError`] enum of this crate.
#[hyperlink_derive::hyperlink_error]
pub enum ParagraphError {
    /// Reading a Markdown source failed.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
