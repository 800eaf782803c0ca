use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use murmur_db::DEFAULT_READER_POOL_SIZE;

/// Server configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Read-only connections opened next to the single writer.
    pub db_readers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port: u16 = match var("MURMUR_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MURMUR_PORT is not a valid port: {raw:?}"))?,
            None => 8080,
        };

        let db_readers: usize = match var("MURMUR_DB_READERS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MURMUR_DB_READERS is not a valid count: {raw:?}"))?,
            None => DEFAULT_READER_POOL_SIZE,
        };

        let db_path = var("MURMUR_DB_PATH").unwrap_or_else(|| "murmur.db".into());
        // Each reader connection would open its own empty in-memory database.
        if db_path == ":memory:" || db_path.starts_with("file::memory:") {
            bail!("MURMUR_DB_PATH must name a file, in-memory databases are not supported");
        }

        Ok(Self {
            host: var("MURMUR_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            db_path: db_path.into(),
            db_readers: db_readers.max(1),
        })
    }
}
