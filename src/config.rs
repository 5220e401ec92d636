use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_DATABASE_PATH: &str = "blog.sqlite";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub database_path: String,
    /// Base URL the `read` command fetches entries from.
    pub api_base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = match env_map.get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match env_map.get("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue(
                    "BIND_ADDR".to_string(),
                    "must be an IP address".to_string(),
                )
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "DATABASE_PATH".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let api_base_url = env_map
            .get("BLOG_API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            port,
            bind_addr,
            database_path,
            api_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1");
        assert_eq!(config.database_path, "blog.sqlite");
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_defaults_follow_constants() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(
            DEFAULT_API_URL,
            format!("http://{}:{}", DEFAULT_BIND_ADDR, DEFAULT_PORT)
        );
    }

    #[test]
    fn test_reads_overrides() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "8081".to_string());
        env_map.insert("BIND_ADDR".to_string(), "0.0.0.0".to_string());
        env_map.insert("DATABASE_PATH".to_string(), "/tmp/blog.db".to_string());
        env_map.insert(
            "BLOG_API_URL".to_string(),
            "http://blog.local:9000/".to_string(),
        );

        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0");
        assert_eq!(config.database_path, "/tmp/blog.db");
        assert_eq!(config.api_base_url, "http://blog.local:9000");
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut env_map = HashMap::new();
        env_map.insert("BIND_ADDR".to_string(), "localhost:80".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "BIND_ADDR"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_empty_database_path() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "  ".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "DATABASE_PATH"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
