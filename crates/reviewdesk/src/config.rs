use std::env;

/// Default SQLite database path.
pub const DEFAULT_DATABASE: &str = "reviewdesk.db";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "reviewdesk=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "reviewdesk.db")
    pub sqlite_path: String,
    /// Log filter used when `RUST_LOG` is not set (default: "reviewdesk=info")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REVIEWDESK_DB` - SQLite database path (default: "reviewdesk.db")
    /// - `REVIEWDESK_LOG` - Default log filter (default: "reviewdesk=info")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            sqlite_path: var("REVIEWDESK_DB", DEFAULT_DATABASE),
            log_filter: var("REVIEWDESK_LOG", DEFAULT_LOG_FILTER),
        }
    }

    /// Replaces the database path when one was given on the command line.
    pub fn with_database(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.sqlite_path = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
