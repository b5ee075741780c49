//! Game store configuration.

use std::{env, time::Duration};

/// Default namespace for game records.
pub const DEFAULT_KEY_PREFIX: &str = "janken_";

/// Records expire one week after their last write.
pub const DEFAULT_EXPIRY_SECS: u64 = 60 * 60 * 24 * 7;

/// Game store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prefix prepended to every game id to form its key
    pub key_prefix: String,

    /// Lifetime of a record after each save, in seconds
    pub expiry_secs: u64,
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `JANKEN_KEY_PREFIX`: record key prefix (default: `janken_`)
    /// - `JANKEN_EXPIRY_SECS`: record lifetime in seconds (default: 604800)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            key_prefix: env::var("JANKEN_KEY_PREFIX")
                .ok()
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
            expiry_secs: env::var("JANKEN_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_EXPIRY_SECS),
        }
    }

    /// Key under which the game `id` is stored.
    pub fn key_for(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    pub fn expiry(&self) -> Duration {
        Duration::from_secs(self.expiry_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            expiry_secs: DEFAULT_EXPIRY_SECS,
        }
    }
}
