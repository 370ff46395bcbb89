use config::{Config, Environment, File};
use hyperlink_domain::constants::{ENV_PREFIX, SETTINGS_FILE};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Custom error type for settings loading.
#[hyperlink_derive::hyperlink_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads settings from an optional file with environment overrides.
///
/// Layering, lowest priority first:
/// 1. **File**: `path` when given (must exist), otherwise `hyperlink.{toml,yaml,json,...}` in
///    the current directory if present.
/// 2. **Environment**: variables prefixed with `HYPERLINK__`. Nested keys use double
///    underscores (e.g., `HYPERLINK__LOG__LEVEL=debug` maps to `log.level`).
///
/// # Errors
/// Returns an error if an explicit file is missing, a source is malformed, or the merged
/// values do not match `T`.
///
/// # Example
/// ```rust
/// use hyperlink_kernel::config::load_config;
/// use hyperlink_kernel::domain::settings::Settings;
///
/// let settings: Settings = load_config(Some("config/hyperlink")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path: Option<&Path> = path.as_ref().map(AsRef::as_ref);
    let file = match path {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            File::from(path).required(true)
        },
        None => File::with_name(SETTINGS_FILE).required(false),
    };

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let settings = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
