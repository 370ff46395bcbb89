use hyperlink_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn log_directory_receives_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("nested/logs");

    let logger = Logger::builder()
        .name("hyperlink")
        .console(false)
        .file(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .env_filter("info")
        .init()?;

    tracing::info!(links = 12, files = 3, documents = 2, "Links collected");
    tracing::debug!("filtered out at info level");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let contents = fs::read_to_string(log_dir.join("hyperlink.log"))?;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 1, "only the info event is expected: {contents}");
    assert!(lines[0].starts_with('{'), "expected a JSON line, got {}", lines[0]);
    assert!(lines[0].contains("Links collected"));
    assert!(lines[0].contains("\"links\":12"));

    Ok(())
}
