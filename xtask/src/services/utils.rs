use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Crates whose package name does not carry the workspace prefix.
const UNPREFIXED: &[&str] = &["hyperlink", "xtask"];

/// Returns the root directory of the project.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find project root from xtask manifest")
}

/// Normalizes a project crate name to the workspace naming convention.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with("hyperlink-") || UNPREFIXED.contains(&project) {
        project.to_owned()
    } else {
        format!("hyperlink-{project}")
    }
}
