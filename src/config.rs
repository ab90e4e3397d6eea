// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::saved::SAVED_FILTERS_KEY;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub max_workers: usize,
    /// Key under which the saved-filter list is stored.
    pub storage_key: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: PathBuf::from("filters.sqlite3"),
            max_workers: 8,
            storage_key: SAVED_FILTERS_KEY.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or malformed
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            bind_addr: parsed(&lookup, "FILTERS_BIND_ADDR", defaults.bind_addr),
            db_path: lookup("FILTERS_DB_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            max_workers: parsed(&lookup, "FILTERS_MAX_WORKERS", defaults.max_workers).max(1),
            storage_key: lookup("FILTERS_STORAGE_KEY")
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(defaults.storage_key),
            log_filter: lookup("FILTERS_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn parsed<T, F>(lookup: &F, name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, fallback = %default, "ignoring malformed setting");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.db_path, PathBuf::from("filters.sqlite3"));
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.storage_key, "savedFilters");
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("FILTERS_BIND_ADDR", "0.0.0.0:8080"),
            ("FILTERS_DB_PATH", "/tmp/f.db"),
            ("FILTERS_MAX_WORKERS", "2"),
            ("FILTERS_STORAGE_KEY", "searches"),
            ("FILTERS_LOG", "debug"),
        ]);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/f.db"));
        assert_eq!(cfg.max_workers, 2);
        assert_eq!(cfg.storage_key, "searches");
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config_from(&[
            ("FILTERS_BIND_ADDR", "not-an-addr"),
            ("FILTERS_MAX_WORKERS", "many"),
            ("FILTERS_STORAGE_KEY", "  "),
        ]);
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.storage_key, "savedFilters");
    }

    #[test]
    fn zero_workers_is_clamped() {
        assert_eq!(config_from(&[("FILTERS_MAX_WORKERS", "0")]).max_workers, 1);
    }
}
