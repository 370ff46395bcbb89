use crate::args::Cli;
use anyhow::{Context, Result};
use hyperlink_kernel::config::load_config;
use hyperlink_kernel::domain::settings::Settings;
use hyperlink_logger::LevelFilter;

/// Loads the settings file and environment, then applies the command line on top.
pub fn resolve(cli: &Cli) -> Result<Settings> {
    let settings: Settings = load_config(cli.config.as_deref()).context(match &cli.config {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load settings".to_owned(),
    })?;
    Ok(apply(cli, settings))
}

/// Command line flags win over file and environment values.
#[must_use]
pub fn apply(cli: &Cli, mut settings: Settings) -> Settings {
    settings.jobs = cli.jobs.or(settings.jobs);
    settings.check_anchors |= cli.check_anchors;
    settings.github_actions |= cli.github_actions;
    if let Some(sources) = &cli.sources {
        settings.sources = Some(sources.clone());
    }

    if cli.verbose {
        "debug".clone_into(&mut settings.log.level);
    } else if cli.quiet {
        "error".clone_into(&mut settings.log.level);
    }
    settings
}

/// Parses the configured log level (`off`, `error`, ..., `trace`).
pub fn log_level(settings: &Settings) -> Result<LevelFilter> {
    settings
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", settings.log.level))
}
