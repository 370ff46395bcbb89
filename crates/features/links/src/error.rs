use std::borrow::Cow;

/// A specialized [`LinkError`] enum of this crate.
#[hyperlink_derive::hyperlink_error]
pub enum LinkError {
    /// Reading an HTML document failed.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
