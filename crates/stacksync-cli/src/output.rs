//! Boundary reporting: terminal lines for humans, `$GITHUB_OUTPUT` entries
//! and a JSON failure object for the invoking CI system.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use stacksync_core::ReconcileError;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Publishes a named output value.
///
/// When running under GitHub Actions (`$GITHUB_OUTPUT` set) the value is
/// appended to the workflow output file; otherwise it is printed as
/// `name=value` for the caller to capture.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match github_output_path() {
        Some(path) => append_output(&path, name, value)
            .with_context(|| format!("Failed to write output '{name}' to {}", path.display())),
        None => {
            println!("{name}={value}");
            Ok(())
        }
    }
}

/// The `{message, name}` failure object surfaced as the run's failure reason.
pub fn failure_json(err: &ReconcileError) -> String {
    serde_json::json!({
        "name": err.kind(),
        "message": err.to_string(),
    })
    .to_string()
}

fn github_output_path() -> Option<PathBuf> {
    std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from)
}

fn append_output(path: &Path, name: &str, value: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') {
        // Multiline values need the heredoc form of the output protocol.
        writeln!(file, "{name}<<__STACKSYNC_EOF__\n{value}\n__STACKSYNC_EOF__")
    } else {
        writeln!(file, "{name}={value}")
    }
}
