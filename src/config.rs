//! # Configuration
//!
//! Runtime settings for the inventory, read from the environment.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `BOOKSTORE_URL` | [`store_url`](InventoryConfig::store_url) | [`DEFAULT_STORE_URL`] |
//! | `BOOKSTORE_MAILBOX_CAPACITY` | [`mailbox_capacity`](InventoryConfig::mailbox_capacity) | `32` |
//! | `BOOKSTORE_TIMEOUT_SECS` | [`request_timeout_secs`](InventoryConfig::request_timeout_secs) | none |

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STORE_URL: &str =
    "https://bookstore-2ca2e-default-rtdb.europe-west1.firebasedatabase.app";
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

pub const ENV_STORE_URL: &str = "BOOKSTORE_URL";
pub const ENV_MAILBOX_CAPACITY: &str = "BOOKSTORE_MAILBOX_CAPACITY";
pub const ENV_TIMEOUT_SECS: &str = "BOOKSTORE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for the book synchronizer and its HTTP store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Base URL of the backing store, without the collection path.
    pub store_url: String,
    /// Requests the synchronizer mailbox holds before senders wait.
    pub mailbox_capacity: usize,
    /// Per-request timeout. Requests never time out when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            request_timeout_secs: None,
        }
    }
}

impl InventoryConfig {
    /// Reads the `BOOKSTORE_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_STORE_URL).filter(|url| !url.trim().is_empty()) {
            config.store_url = url.trim().to_string();
        }
        if let Some(value) = lookup(ENV_MAILBOX_CAPACITY) {
            config.mailbox_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::Invalid {
                    key: ENV_MAILBOX_CAPACITY,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: ENV_TIMEOUT_SECS,
                value,
            })?;
            config.request_timeout_secs = Some(secs);
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = InventoryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.store_url, DEFAULT_STORE_URL);
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = InventoryConfig::from_lookup(lookup(&[
            (ENV_STORE_URL, "http://localhost:9000/"),
            (ENV_MAILBOX_CAPACITY, "4"),
            (ENV_TIMEOUT_SECS, " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.store_url, "http://localhost:9000/");
        assert_eq!(config.mailbox_capacity, 4);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let err = InventoryConfig::from_lookup(lookup(&[(ENV_MAILBOX_CAPACITY, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: ENV_MAILBOX_CAPACITY,
                value: "0".to_string()
            }
        );

        let err = InventoryConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }
}
