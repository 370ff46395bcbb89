use crate::services::utils::{get_project_root, normalize_project_name};
use anyhow::{Context, bail};
use std::process::Command;

/// Which crates a test run covers. `None` and `"all"` mean the whole workspace.
fn scope_args(project: Option<&str>) -> Vec<String> {
    match project.filter(|&value| value != "all") {
        Some(project) => vec!["-p".into(), normalize_project_name(project)],
        None => vec!["--workspace".into()],
    }
}

fn has_nextest() -> bool {
    Command::new("cargo-nextest").arg("--version").output().is_ok()
}

/// Arguments for `cargo`, preferring nextest when it is installed.
fn test_args(project: Option<&str>, nextest: bool) -> Vec<String> {
    let mut args: Vec<String> =
        if nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };
    args.extend(scope_args(project));

    if nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"]
                .into_iter()
                .map(String::from),
        );
    } else {
        args.extend(["--lib", "--bins", "--tests", "--", "-q"].into_iter().map(String::from));
    }
    args
}

fn cargo(args: &[String], label: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(get_project_root()?)
        .status()
        .with_context(|| format!("Failed to execute cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("{label} failed!");
    }
    Ok(())
}

/// Runs unit and integration tests of the workspace or of one crate.
///
/// # Errors
/// Returns an error if cargo cannot be started or a test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let nextest = has_nextest();
    println!("🧪 Running tests via '{}'...", if nextest { "nextest" } else { "cargo test" });
    cargo(&test_args(project, nextest), "Tests")
}

/// Runs doc tests of the workspace or of one crate.
///
/// # Errors
/// Returns an error if cargo cannot be started or a doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    println!("📚 Running doctests via 'cargo test --doc'...");
    let mut args = vec!["test".to_owned(), "--doc".to_owned()];
    args.extend(scope_args(project));
    cargo(&args, "Doc tests")
}
