//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temp directory holding a config file path for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// `entity` command pointed at this sandbox's config, with a fixed locale.
    pub fn entity(&self) -> Command {
        entity_with_config(&self.config_path())
    }
}

fn entity_with_config(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("entity").expect("entity binary not built");
    cmd.arg("--config")
        .arg(config)
        .env("NO_COLOR", "1")
        .env("LANG", "en_US.UTF-8")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `entity` and capture (stdout, stderr, exit code).
pub fn run_entity(sandbox: &Sandbox, args: &[&str]) -> (String, String, i32) {
    let output = sandbox
        .entity()
        .args(args)
        .output()
        .expect("Failed to execute entity");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// True when `text` is a prefix of some concatenation of `fragments`.
///
/// Assumes no fragment is a proper prefix of another, which holds for the
/// space-terminated word lists used here.
pub fn is_fragment_stream(text: &str, fragments: &[&str]) -> bool {
    let mut rest = text;
    loop {
        match fragments.iter().find(|f| rest.starts_with(**f)) {
            Some(fragment) => rest = &rest[fragment.len()..],
            None => return rest.is_empty() || fragments.iter().any(|f| f.starts_with(rest)),
        }
    }
}
