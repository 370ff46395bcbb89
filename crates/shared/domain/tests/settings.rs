use hyperlink_domain::settings::{LogSettings, Settings};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn settings_defaults_are_sane() {
    let settings = Settings::default();
    assert_eq!(settings.jobs, None);
    assert!(!settings.check_anchors);
    assert!(settings.sources.is_none());
    assert!(!settings.github_actions);

    let log = LogSettings::default();
    assert_eq!(log.level, "info");
    assert!(log.directory.is_none());
    assert!(!log.json);
    assert!(log.ansi);
}

#[test]
fn partial_settings_deserialize() {
    let raw = json!({
        "check_anchors": true,
        "sources": "content",
        "log": { "level": "debug" }
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert!(settings.check_anchors);
    assert_eq!(settings.sources, Some(PathBuf::from("content")));
    assert_eq!(settings.log.level, "debug");
    assert!(settings.log.ansi, "unset nested fields keep their defaults");
    assert_eq!(settings.jobs, None);
}
