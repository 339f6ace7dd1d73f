use std::net::IpAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use cinelog_db::ConfigError;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for every path not claimed by an API route
    /// (default: `wwwroot`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `wwwroot`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_raw = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host: IpAddr = host_raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST",
            value: host_raw.clone(),
        })?;

        let port: u16 = parse_or("PORT", lookup("PORT"), 3000)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30)?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("wwwroot"));

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec![HeaderValue::from_static("http://localhost:5173")]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.static_dir, PathBuf::from("wwwroot"));
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("STATIC_DIR", "/srv/cinelog"),
        ]))
        .unwrap();

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.static_dir, PathBuf::from("/srv/cinelog"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "HOST", .. }));
    }
}
