use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a working local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub saves_dir: PathBuf,
    pub cors: CorsConfig,
}

/// Cross-origin policy. `allowed_origins == None` means any origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
    pub allow_credentials: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            saves_dir: PathBuf::from(env_or("SAVES_DIR", "saves")),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_or("CORS_ALLOWED_ORIGINS", "*")),
                allow_credentials: parse_bool(&env_or("CORS_ALLOW_CREDENTIALS", "true"))
                    .context("CORS_ALLOW_CREDENTIALS must be true or false")?,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// `*` (or an empty list) means any origin; otherwise a comma-separated allow list.
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_means_any_origin() {
        assert_eq!(parse_origins("*"), None);
        assert_eq!(parse_origins(""), None);
        assert_eq!(parse_origins("https://a.dev, *"), None);
    }

    #[test]
    fn test_origin_list_is_trimmed() {
        assert_eq!(
            parse_origins("https://a.dev, https://b.dev ,"),
            Some(vec!["https://a.dev".to_string(), "https://b.dev".to_string()])
        );
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
