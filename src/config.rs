//! Runtime configuration
//!
//! Everything is read from the process environment (optionally seeded from a
//! `.env` file in `main`). Parsing goes through [`Config::from_lookup`] so it
//! can be exercised without touching the real environment.

use std::time::Duration;

use thiserror::Error;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;
/// Default origin of the upstream project-generation service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
/// Default hard timeout for the upstream call, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing required environment variables (SESSION_ID, USER_ID, or TEAM_ID)")]
    MissingCredentials,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which implementation answers project-creation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendMode {
    /// Fixed literal response, no network.
    #[default]
    Mock,
    /// Real upstream service over HTTPS.
    Upstream,
}

impl std::str::FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(BackendMode::Mock),
            "upstream" => Ok(BackendMode::Upstream),
            other => Err(format!("expected `mock` or `upstream`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Origin the widget bootstrap script calls back into.
    pub public_base_url: String,

    pub backend: BackendMode,
    pub api_base_url: String,
    pub upstream_timeout: Duration,

    // Upstream credentials. Optional here, required only by the upstream path.
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub team_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_base_url: format!("http://localhost:{}", DEFAULT_PORT),
            backend: BackendMode::Mock,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            session_id: None,
            user_id: None,
            team_id: None,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let backend = match get("PROJECT_BACKEND") {
            Some(raw) => raw
                .parse::<BackendMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: "PROJECT_BACKEND",
                    value: raw.clone(),
                    reason,
                })?,
            None => BackendMode::Mock,
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: "UPSTREAM_TIMEOUT_SECS",
                        value: raw.clone(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: "UPSTREAM_TIMEOUT_SECS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let public_base_url = get("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        let api_base_url = get("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            public_base_url,
            backend,
            api_base_url,
            upstream_timeout,
            session_id: get("SESSION_ID"),
            user_id: get("USER_ID"),
            team_id: get("TEAM_ID"),
        })
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Server-held credentials forwarded to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub session_id: String,
    pub user_id: String,
    pub team_id: String,
}

impl Credentials {
    /// Resolves the credentials, failing if any of the three is absent.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        match (&config.session_id, &config.user_id, &config.team_id) {
            (Some(session_id), Some(user_id), Some(team_id)) => Ok(Self {
                session_id: session_id.clone(),
                user_id: user_id.clone(),
                team_id: team_id.clone(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.upstream_timeout, Duration::from_secs(100));
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("PROJECT_BACKEND", "Upstream"),
            ("API_BASE_URL", "https://api.example.com/"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
            ("SESSION_ID", "s-1"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.public_base_url, "http://localhost:9100");
        assert_eq!(config.backend, BackendMode::Upstream);
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
        assert_eq!(config.session_id.as_deref(), Some("s-1"));
        assert_eq!(config.user_id, None);
    }

    #[test]
    fn blank_values_count_as_absent() {
        let config = Config::from_lookup(lookup(&[("SESSION_ID", "  "), ("PORT", "")])).unwrap();
        assert_eq!(config.session_id, None);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[("PROJECT_BACKEND", "live")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PROJECT_BACKEND", .. }));

        let err = Config::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "UPSTREAM_TIMEOUT_SECS", .. }));

        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn credentials_require_all_three_values() {
        let mut config = Config {
            session_id: Some("s".into()),
            user_id: Some("u".into()),
            ..Config::default()
        };
        assert_eq!(
            Credentials::from_config(&config),
            Err(ConfigError::MissingCredentials)
        );

        config.team_id = Some("t".into());
        let creds = Credentials::from_config(&config).unwrap();
        assert_eq!(creds.team_id, "t");
    }
}
