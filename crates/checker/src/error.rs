use hyperlink_links::LinkError;
use hyperlink_paragraphs::ParagraphError;
use std::borrow::Cow;
use std::path::PathBuf;

/// A specialized [`CheckError`] enum of this crate.
#[hyperlink_derive::hyperlink_error]
pub enum CheckError {
    /// Listing a directory failed (missing base path, permissions, ...).
    #[error("Walk error{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    /// Symlinks inside the checked site are not followed.
    #[error("Found unsupported symlink at {}", .path.display())]
    Symlink { path: PathBuf },

    /// An HTML document could not be read.
    #[error("{source}{}", format_context(.context))]
    Links { source: LinkError, context: Option<Cow<'static, str>> },

    /// A Markdown source could not be read.
    #[error("{source}{}", format_context(.context))]
    Paragraphs { source: ParagraphError, context: Option<Cow<'static, str>> },

    /// The worker pool could not be started.
    #[error("Thread pool error{}: {source}", format_context(.context))]
    ThreadPool { source: rayon::ThreadPoolBuildError, context: Option<Cow<'static, str>> },

    /// Neither Markdown nor HTML, judging by the extension.
    #[error("Cannot determine file type of {}: {reason}", .path.display())]
    UnknownFileType { path: PathBuf, reason: &'static str },
}
