//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Environment variable that overrides the stored API URL.
pub const API_URL_ENV: &str = "INTERNS_API_URL";

/// Default per-request timeout for API calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default database path: `~/.interns/interns.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".interns").join("interns.db"))
}
