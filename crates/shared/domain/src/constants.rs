//! File classification shared by the walker, the parsers, and the CLI.

use std::path::Path;

/// Extensions treated as Markdown sources.
pub const MARKDOWN_FILES: &[&str] = &["md", "mdx"];

/// Extensions parsed as HTML documents.
pub const HTML_FILES: &[&str] = &["htm", "html"];

/// File names that also define their directory (`docs/index.html` defines `docs`).
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Base name of the optional settings file (`hyperlink.toml`, `hyperlink.yaml`, ...).
pub const SETTINGS_FILE: &str = "hyperlink";

/// Prefix of environment overrides (`HYPERLINK__CHECK_ANCHORS=true`).
pub const ENV_PREFIX: &str = "HYPERLINK";

/// Returns `true` if `path` has one of the given extensions.
#[must_use]
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extensions.contains(&extension))
}

/// Returns `true` if `path` is an HTML document.
#[must_use]
pub fn is_html(path: &Path) -> bool {
    has_extension(path, HTML_FILES)
}

/// Returns `true` if `path` is a Markdown source.
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    has_extension(path, MARKDOWN_FILES)
}

/// Returns `true` if `path` names a directory index file.
#[must_use]
pub fn is_index_file(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| INDEX_FILES.contains(&name))
}
