//! Staged file detection
//!
//! Provides utilities for detecting files staged for commit.

use std::path::Path;
use std::process::Command;

/// Get list of staged files, relative to `root`
///
/// Runs `git diff --cached --name-only --relative` inside `root`, so files
/// outside it are left out.
///
/// # Errors
///
/// Returns an error if git cannot be spawned or exits unsuccessfully.
pub fn get_staged_files(root: &Path) -> anyhow::Result<Vec<String>> {
    let output = Command::new("git")
        .current_dir(root)
        .args(["diff", "--cached", "--name-only", "--relative"])
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to get staged files in {}: {}",
            root.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(String::from).filter(|s| !s.is_empty()).collect())
}
