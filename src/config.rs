//! Runtime settings, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `STOREFRONT_CHANNEL_BUFFER` | 32 |
//! | `STOREFRONT_STOCK_CONFLICT_RETRIES` | 3 |

use thiserror::Error;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;
pub const DEFAULT_STOCK_CONFLICT_RETRIES: u32 = 3;

const CHANNEL_BUFFER_VAR: &str = "STOREFRONT_CHANNEL_BUFFER";
const STOCK_CONFLICT_RETRIES_VAR: &str = "STOREFRONT_STOCK_CONFLICT_RETRIES";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Extra attempts an order gets when its stock changed underneath it.
    pub stock_conflict_retries: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            stock_conflict_retries: DEFAULT_STOCK_CONFLICT_RETRIES,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Missing keys fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_buffer = parse(&lookup, CHANNEL_BUFFER_VAR)?.unwrap_or(defaults.channel_buffer);
        // tokio panics on a zero-capacity channel
        if channel_buffer == 0 {
            return Err(ConfigError::Zero {
                key: CHANNEL_BUFFER_VAR,
            });
        }

        let stock_conflict_retries = parse(&lookup, STOCK_CONFLICT_RETRIES_VAR)?
            .unwrap_or(defaults.stock_conflict_retries);

        Ok(Self {
            channel_buffer,
            stock_conflict_retries,
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
