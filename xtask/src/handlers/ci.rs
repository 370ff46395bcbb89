use crate::services::utils::get_project_root;
use anyhow::{Context, bail};

/// The steps of `.github/workflows/ci.yml`, in order.
pub const CI_STEPS: &[(&str, &[&str])] = &[
    ("Build", &["build", "--verbose"]),
    ("Run tests", &["test", "--verbose"]),
    ("Run clippy", &["clippy", "--", "-D", "warnings"]),
];

/// Runs the CI workflow steps locally from the workspace root.
///
/// # Errors
/// Returns an error on the first step that fails to start or exits unsuccessfully.
pub fn run_ci() -> anyhow::Result<()> {
    let root = get_project_root()?;

    for (name, args) in CI_STEPS {
        println!("🔧 {name}: cargo {}", args.join(" "));
        let status = std::process::Command::new("cargo")
            .args(*args)
            .current_dir(&root)
            .status()
            .with_context(|| format!("Failed to execute cargo {}", args[0]))?;

        if !status.success() {
            bail!("{name} failed with status: {}", status.code().unwrap_or(-1));
        }
    }

    println!("✅ All CI steps passed");
    Ok(())
}
