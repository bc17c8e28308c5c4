use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_name: String,

    // Content
    pub content_source: ContentSourceKind,
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub sanity_token: Option<String>,
    pub sanity_base_url: Option<String>,
    pub fetch_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSourceKind {
    /// Serve the built-in post list
    Static,
    /// Query the headless content store over HTTP
    Sanity,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Site
            site_name: env_or_default("SITE_NAME", "ConsultPro"),

            // Content
            content_source: parse_content_source(&env_or_default("CONTENT_SOURCE", "static"))?,
            sanity_project_id: env_or_default("SANITY_PROJECT_ID", "q6mqeovz"),
            sanity_dataset: env_or_default("SANITY_DATASET", "production"),
            sanity_api_version: env_or_default("SANITY_API_VERSION", "2023-05-03"),
            sanity_use_cdn: parse_env_bool("SANITY_USE_CDN", true)?,
            sanity_token: optional_env("SANITY_TOKEN"),
            sanity_base_url: optional_env("SANITY_BASE_URL"),
            fetch_timeout: Duration::from_secs(parse_env_u64("FETCH_TIMEOUT_SECS", 10)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Configuration with built-in defaults and the static content source.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            site_name: "ConsultPro".to_string(),
            content_source: ContentSourceKind::Static,
            sanity_project_id: "test-project".to_string(),
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2023-05-03".to_string(),
            sanity_use_cdn: false,
            sanity_token: None,
            sanity_base_url: None,
            fetch_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_source == ContentSourceKind::Sanity {
            if self.sanity_project_id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "SANITY_PROJECT_ID".to_string(),
                    message: "cannot be empty".to_string(),
                });
            }
            if self.sanity_dataset.is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "SANITY_DATASET".to_string(),
                    message: "cannot be empty".to_string(),
                });
            }
        }
        if let Some(base) = &self.sanity_base_url {
            if url::Url::parse(base).is_err() {
                return Err(ConfigError::InvalidValue {
                    name: "SANITY_BASE_URL".to_string(),
                    message: format!("not a valid URL: '{base}'"),
                });
            }
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "FETCH_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL of the content query API.
    ///
    /// The explicit override wins; otherwise the CDN or live API host of the project.
    #[must_use]
    pub fn sanity_api_base(&self) -> String {
        if let Some(base) = &self.sanity_base_url {
            return base.trim_end_matches('/').to_string();
        }
        let host = if self.sanity_use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!("https://{}.{host}", self.sanity_project_id)
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

fn parse_content_source(value: &str) -> Result<ContentSourceKind, ConfigError> {
    match value.to_lowercase().as_str() {
        "static" => Ok(ContentSourceKind::Static),
        "sanity" => Ok(ContentSourceKind::Sanity),
        _ => Err(ConfigError::InvalidValue {
            name: "CONTENT_SOURCE".to_string(),
            message: format!("must be 'static' or 'sanity', got '{value}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_source() {
        assert_eq!(parse_content_source("static").unwrap(), ContentSourceKind::Static);
        assert_eq!(parse_content_source("SANITY").unwrap(), ContentSourceKind::Sanity);
        assert!(parse_content_source("wordpress").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_env_bool("CONSULTPRO_NONEXISTENT_VAR", true).unwrap());
        assert!(!parse_env_bool("CONSULTPRO_NONEXISTENT_VAR", false).unwrap());
    }

    #[test]
    fn test_sanity_api_base() {
        let mut config = Config::for_testing();
        config.sanity_project_id = "abc123".to_string();
        assert_eq!(config.sanity_api_base(), "https://abc123.api.sanity.io");

        config.sanity_use_cdn = true;
        assert_eq!(config.sanity_api_base(), "https://abc123.apicdn.sanity.io");

        config.sanity_base_url = Some("http://127.0.0.1:9999/".to_string());
        assert_eq!(config.sanity_api_base(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_validate() {
        let mut config = Config::for_testing();
        assert!(config.validate().is_ok());

        config.content_source = ContentSourceKind::Sanity;
        config.sanity_project_id = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::for_testing();
        config.sanity_base_url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::for_testing();
        config.fetch_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
