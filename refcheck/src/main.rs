//! refcheck — grades generated output files against reference files.
//!
//! Entry point for the `refcheck` binary. Wires together the color theme
//! (`theme`), the interactive session (`session`), and the comparison engine
//! (`refcheck-core`).
//!
//! # Run sequence
//!
//! 1. Load folder locations and theme name from the XDG config — read-only,
//!    soft failures fall back to defaults.
//! 2. Count `data<N>.out` files in the reference folder; the whole batch is
//!    keyed on this count alone.
//! 3. Run the batch. Any setup error (unlistable folder, zero files, a failed
//!    read) is reported to stderr and exits non-zero without a summary.
//! 4. Print the summary, then hand stdin/stdout to the interactive session.
//!    Exit is zero after the operator ends the loop; operator mistakes inside
//!    the loop never affect the exit code.

mod session;
mod theme;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use refcheck_core::batch;
use serde::Deserialize;

use crate::theme::Theme;

/// Folder locations and theme name, read from the config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    /// Folder holding the expected `data<N>.out` files.
    reference_dir: PathBuf,
    /// Folder holding the generated `data<N>.out` files under test.
    candidate_dir: PathBuf,
    /// Name of the color theme, resolved by `Theme::from_name`.
    theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_dir: PathBuf::from("reference"),
            candidate_dir: PathBuf::from("candidate"),
            theme: "dark".to_owned(),
        }
    }
}

/// Returns the path to the refcheck config file.
///
/// Prefers `$XDG_CONFIG_HOME/refcheck/config.toml`; falls back to
/// `~/.config/refcheck/config.toml` when the env var is absent.
fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("refcheck").join("config.toml")
}

/// Parses a raw config document, falling back to defaults on a parse error.
///
/// The error is printed to stderr with the offending path; it never prevents
/// startup.
fn parse_config(path: &Path, raw: &str) -> Config {
    match toml::from_str(raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("refcheck: config parse error in {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Loads the config file, treating a missing file as the default config.
fn load_config() -> Config {
    let path = config_path();
    match std::fs::read_to_string(&path) {
        Ok(raw) => parse_config(&path, &raw),
        Err(_) => Config::default(),
    }
}

fn main() -> ExitCode {
    let config = load_config();
    let theme = Theme::from_name(&config.theme);

    let count = match batch::count_numbered_files(&config.reference_dir) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("refcheck: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match batch::run(&config.reference_dir, &config.candidate_dir, count, &theme) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("refcheck: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = session::print_summary(&summary, &theme, &mut out) {
        eprintln!("refcheck: {e}");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let mut session = session::Session::new(&summary, &theme, stdin.lock(), out);
    if let Err(e) = session.run() {
        eprintln!("refcheck: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
