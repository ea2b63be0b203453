use crate::time_utils::{self, ReportZone};
use std::env;
use thiserror::Error;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_REPORT_TITLE: &str = "REPORTED SPEECH TEST RESULTS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid REPORT_TIMEZONE: {0}")]
    InvalidTimezone(String),
}

/// Bot token and recipient for report delivery.
#[derive(Clone)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramCredentials {
    /// Both values must be present and non-empty, otherwise delivery is skipped.
    pub fn from_parts(bot_token: Option<String>, chat_id: Option<String>) -> Option<Self> {
        let bot_token = bot_token.filter(|v| !v.trim().is_empty())?;
        let chat_id = chat_id.filter(|v| !v.trim().is_empty())?;
        Some(Self { bot_token, chat_id })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub telegram: Option<TelegramCredentials>,
    pub telegram_api_url: String,
    pub report_zone: ReportZone,
    pub report_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| {
            let port = var("PORT").unwrap_or_else(|| "3000".to_string());
            format!("0.0.0.0:{}", port)
        });

        let telegram =
            TelegramCredentials::from_parts(var("TELEGRAM_BOT_TOKEN"), var("TELEGRAM_CHAT_ID"));

        let telegram_api_url = var("TELEGRAM_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let report_zone = match var("REPORT_TIMEZONE") {
            Some(raw) => time_utils::parse_timezone(&raw)
                .ok_or(ConfigError::InvalidTimezone(raw))?,
            None => ReportZone::default(),
        };

        let report_title = var("REPORT_TITLE").unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string());

        Ok(Self {
            bind_addr,
            telegram,
            telegram_api_url,
            report_zone,
            report_title,
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            telegram: None,
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            report_zone: ReportZone::default(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.telegram.is_none());
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.report_zone, ReportZone::default());
        assert_eq!(config.report_title, DEFAULT_REPORT_TITLE);
    }

    #[test]
    fn test_bind_addr_falls_back_to_port() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");

        let config = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = config_from(&[("TELEGRAM_API_URL", "http://localhost:8081/")]).unwrap();
        assert_eq!(config.telegram_api_url, "http://localhost:8081");

        let config = config_from(&[("TELEGRAM_API_URL", "  ")]).unwrap();
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
    }

    #[test]
    fn test_blank_title_uses_default() {
        let config = config_from(&[("REPORT_TITLE", "   ")]).unwrap();
        assert_eq!(config.report_title, "REPORTED SPEECH TEST RESULTS");

        let config = config_from(&[("REPORT_TITLE", "PAST SIMPLE QUIZ")]).unwrap();
        assert_eq!(config.report_title, "PAST SIMPLE QUIZ");
    }

    #[test]
    fn test_report_timezone() {
        let config = config_from(&[("REPORT_TIMEZONE", "Europe/Kyiv")]).unwrap();
        assert_eq!(config.report_zone, ReportZone::Named(chrono_tz::Europe::Kyiv));

        let err = config_from(&[("REPORT_TIMEZONE", "Nowhere/Land")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimezone(ref raw) if raw == "Nowhere/Land"));
    }

    #[test]
    fn test_credentials_loaded_from_lookup() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:ABC"), ("TELEGRAM_CHAT_ID", "42")])
            .unwrap();
        let creds = config.telegram.unwrap();
        assert_eq!(creds.bot_token, "123:ABC");
        assert_eq!(creds.chat_id, "42");

        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:ABC")]).unwrap();
        assert!(config.telegram.is_none());
    }

    #[test]
    fn test_credentials_require_both_values() {
        assert!(TelegramCredentials::from_parts(Some("t".into()), Some("42".into())).is_some());
        assert!(TelegramCredentials::from_parts(None, Some("42".into())).is_none());
        assert!(TelegramCredentials::from_parts(Some("t".into()), None).is_none());
        assert!(TelegramCredentials::from_parts(Some("".into()), Some("42".into())).is_none());
        assert!(TelegramCredentials::from_parts(Some("t".into()), Some("  ".into())).is_none());
    }

    #[test]
    fn test_credentials_debug_hides_token() {
        let creds = TelegramCredentials::from_parts(Some("secret-token".into()), Some("42".into()))
            .unwrap();
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("42"));
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();
        assert!(config.telegram.is_none());
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.report_title, "REPORTED SPEECH TEST RESULTS");
    }
}
