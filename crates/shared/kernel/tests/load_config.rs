use hyperlink_kernel::config::{ConfigError, load_config, load_config_with_env};
use hyperlink_kernel::domain::settings::Settings;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("hyperlink.toml");
    fs::write(
        &path,
        "jobs = 2\ncheck_anchors = true\nsources = \"content\"\n\n[log]\nlevel = \"debug\"\n",
    )?;

    let settings: Settings = load_config_with_env(Some(&path), Some(Default::default()))?;
    assert_eq!(settings.jobs, Some(2));
    assert!(settings.check_anchors);
    assert_eq!(settings.sources, Some(PathBuf::from("content")));
    assert_eq!(settings.log.level, "debug");
    assert!(!settings.github_actions);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("hyperlink.toml");
    fs::write(&path, "check_anchors = false\n[log]\nlevel = \"warn\"\n")?;

    let env = [
        ("HYPERLINK__CHECK_ANCHORS", "true"),
        ("HYPERLINK__GITHUB_ACTIONS", "true"),
        ("HYPERLINK__LOG__LEVEL", "trace"),
        ("UNRELATED", "ignored"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_owned()))
    .collect();

    let settings: Settings = load_config_with_env(Some(&path), Some(env))?;
    assert!(settings.check_anchors);
    assert!(settings.github_actions);
    assert_eq!(settings.log.level, "trace");
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let result: Result<Settings, ConfigError> = load_config(Some(&missing));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn malformed_values_are_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("hyperlink.toml");
    fs::write(&path, "jobs = \"many\"\n")?;

    let result: Result<Settings, ConfigError> =
        load_config_with_env(Some(&path), Some(Default::default()));
    let err = result.expect_err("jobs must be numeric");
    assert!(err.to_string().contains("Failed to deserialize settings"));
    Ok(())
}
