//! Environment driven configuration.
//!
//! The storage backend is decided once, here, and never re-checked per query.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::{LedgerError, LedgerResult};

pub const POSTGRES_URL_VAR: &str = "POSTGRES_URL";
pub const DATABASE_FILE_VAR: &str = "LEDGER_DATABASE_FILE";
pub const BIND_ADDR_VAR: &str = "LEDGER_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "LEDGER_STATIC_DIR";

const DEFAULT_DATABASE_FILE: &str = "database.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Which database the ledger lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Embedded file database
    Sqlite { path: PathBuf },
    /// Network database reached through a connection string
    Postgres { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> LedgerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> LedgerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup(POSTGRES_URL_VAR) {
            Some(url) if !url.trim().is_empty() => DatabaseConfig::Postgres { url },
            _ => DatabaseConfig::Sqlite {
                path: lookup(DATABASE_FILE_VAR)
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_DATABASE_FILE.to_string())
                    .into(),
            },
        };

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|e| {
            LedgerError::Configuration(format!("{} is not a socket address ({}): {}", BIND_ADDR_VAR, raw_addr, e))
        })?;

        let static_dir = lookup(STATIC_DIR_VAR)
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            database,
            bind_addr,
            static_dir,
        })
    }
}
