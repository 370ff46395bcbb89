use serde::Deserialize;
use std::path::PathBuf;

/// Run settings merged from the settings file, `HYPERLINK__*` variables, and CLI flags.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Worker threads; `None` saturates the CPU.
    pub jobs: Option<usize>,
    pub check_anchors: bool,
    /// Directory of Markdown files used to attribute broken links.
    pub sources: Option<PathBuf>,
    pub github_actions: bool,
    pub log: LogSettings,
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Directory for `hyperlink.log`; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub ansi: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, ansi: true }
    }
}
