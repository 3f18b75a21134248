//! Launch the mm-tui standalone binary.

use std::path::Path;
use std::process::Command;

/// Launch the mm-tui binary on the given tab.
pub fn run(tab: &str, seed: Option<u64>, content: Option<&Path>) -> Result<(), String> {
    let mut cmd = Command::new("mm-tui");
    cmd.arg("--tab").arg(tab);
    if let Some(seed) = seed {
        cmd.arg("--seed").arg(seed.to_string());
    }
    if let Some(content) = content {
        cmd.arg("--content").arg(content);
    }

    tracing::debug!(?cmd, "launching terminal UI");
    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("mm-tui exited with {s}")),
        Err(_) => {
            Err("mm-tui binary not found. Install with: cargo install --path crates/mm-tui".into())
        }
    }
}
