//! Persisted client settings, backed by SQLite.
//!
//! Values set here are the lowest-priority source; command-line flags and
//! the environment win over them (see [`resolve_api_url`]).

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use rusqlite::Connection;

use crate::consts::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// Base URL of the roster API.
pub const KEY_API_URL: &str = "api_url";
/// Request timeout in whole seconds.
pub const KEY_TIMEOUT_SECS: &str = "timeout_secs";

/// Keys `interns config` accepts.
pub const KNOWN_KEYS: &[&str] = &[KEY_API_URL, KEY_TIMEOUT_SECS];

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("config connection lock poisoned"))
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a config value (upsert). Unknown keys and malformed values are
    /// rejected.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        check_entry(key, value)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Remove a config key.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }
}

fn check_entry(key: &str, value: &str) -> Result<()> {
    match key {
        KEY_API_URL => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                bail!("{KEY_API_URL} must be an http(s) URL, got {value:?}");
            }
        }
        KEY_TIMEOUT_SECS => {
            let secs: u64 = value
                .parse()
                .with_context(|| format!("{KEY_TIMEOUT_SECS} must be a whole number"))?;
            if secs == 0 {
                bail!("{KEY_TIMEOUT_SECS} must be positive");
            }
        }
        other => bail!("unknown config key: {other} (known: {})", KNOWN_KEYS.join(", ")),
    }
    Ok(())
}

/// Pick the API base URL.
/// Priority: flag → `INTERNS_API_URL` → stored `api_url` → default.
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> Result<String> {
    let env = std::env::var(API_URL_ENV).ok();
    resolve_api_url_from(flag, env.as_deref(), config)
}

fn resolve_api_url_from(flag: Option<&str>, env: Option<&str>, config: &Config) -> Result<String> {
    let url = match (flag, env) {
        (Some(url), _) if !url.is_empty() => url.to_string(),
        (_, Some(url)) if !url.is_empty() => url.to_string(),
        _ => config
            .get(KEY_API_URL)?
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    };
    Ok(url.trim_end_matches('/').to_string())
}

/// Pick the request timeout. Priority: flag → stored `timeout_secs` → default.
pub fn resolve_timeout(flag: Option<u64>, config: &Config) -> Result<Duration> {
    let secs = match (flag, config.get(KEY_TIMEOUT_SECS)?) {
        (Some(secs), _) => secs,
        (None, Some(value)) => value
            .parse()
            .with_context(|| format!("stored {KEY_TIMEOUT_SECS} is not a number: {value}"))?,
        (None, None) => DEFAULT_TIMEOUT_SECS,
    };
    if secs == 0 {
        bail!("timeout must be at least one second");
    }
    Ok(Duration::from_secs(secs))
}
