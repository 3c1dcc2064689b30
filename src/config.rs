//! Service configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `STOREFRONT_ADDR` | `127.0.0.1:8080` | address the HTTP server binds to |
//! | `STOREFRONT_BUFFER` | `32` | capacity of the product actor's request channel |

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "STOREFRONT_ADDR";
pub const BUFFER_VAR: &str = "STOREFRONT_BUFFER";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({message})")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    pub buffer_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            buffer_size: DEFAULT_BUFFER,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Missing keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: ADDR_VAR,
                value: raw_addr.clone(),
                message: "expected host:port",
            })?;

        let buffer_size = match lookup(BUFFER_VAR) {
            None => DEFAULT_BUFFER,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: BUFFER_VAR,
                        value: raw,
                        message: "must be a positive integer",
                    })
                }
            },
        };

        Ok(Self { addr, buffer_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_reads_both_variables() {
        let config = config_from(&[(ADDR_VAR, "0.0.0.0:9000"), (BUFFER_VAR, "128")]).unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.buffer_size, 128);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = config_from(&[(ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ADDR_VAR, .. }));

        for raw in ["0", "-4", "lots"] {
            let err = config_from(&[(BUFFER_VAR, raw)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { key: BUFFER_VAR, .. }),
                "{raw}"
            );
        }
    }
}
