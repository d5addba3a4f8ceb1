use std::path::Path;
use std::process::{Command, Stdio};

/// Hand the terminal over to the separate `gq-tui` binary.
pub fn run(
    mode: Option<&str>,
    seed: Option<u64>,
    data: Option<&Path>,
    share_to: Option<&Path>,
) -> Result<(), String> {
    let mut cmd = Command::new("gq-tui");
    if let Some(mode) = mode {
        cmd.args(["--mode", mode]);
    }
    if let Some(seed) = seed {
        cmd.args(["--seed", &seed.to_string()]);
    }
    if let Some(data) = data {
        cmd.arg("--data").arg(data);
    }
    if let Some(path) = share_to {
        cmd.arg("--share-to").arg(path);
    }

    tracing::debug!(?mode, ?seed, "launching gq-tui");
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();
    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("gq-tui exited with {s}")),
        Err(_) => {
            Err("gq-tui binary not found. Install it with: cargo install --path crates/gq-tui".into())
        }
    }
}
