use std::{env, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string());
        let bind_port = lookup("BIND_PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);

        let config = Self {
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let config = Config::from_lookup(|_| None).expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
    }

    #[test]
    fn explicit_bind_values_are_used() {
        let config = Config::from_lookup(|name| match name {
            "BIND_ADDR" => Some("0.0.0.0".to_string()),
            "BIND_PORT" => Some("9000".to_string()),
            _ => None,
        })
        .expect("config should parse");

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(
            config.bind_socket().expect("socket"),
            "0.0.0.0:9000".parse().expect("socket literal")
        );
    }

    #[test]
    fn invalid_port_fails() {
        let err = Config::from_lookup(|name| match name {
            "BIND_PORT" => Some("not-a-port".to_string()),
            _ => None,
        })
        .expect_err("expected invalid port error");

        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn unparsable_bind_addr_fails() {
        let err = Config::from_lookup(|name| match name {
            "BIND_ADDR" => Some("not an address".to_string()),
            _ => None,
        })
        .expect_err("expected invalid socket error");

        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}
