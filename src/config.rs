use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::models::Scope;

const BOT_TOKEN_ENV: &str = "TELOXIDE_TOKEN";
const WEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const ALLOWED_CHAT_ID_ENV: &str = "ALLOWED_CHAT_ID";
const ALLOWED_TOPIC_ID_ENV: &str = "ALLOWED_TOPIC_ID";
const WEATHER_BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
const HTTP_TIMEOUT_ENV: &str = "WEATHER_HTTP_TIMEOUT_SECS";

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid number: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("{0} must not be zero")]
    Zero(&'static str),
}

/// Настройки, без которых бот не запускается.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub weather_api_key: String,
    pub allowed_chat_id: i64,
    pub allowed_topic_id: i32,
    pub weather_base_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let bot_token = required(BOT_TOKEN_ENV)?;
        let weather_api_key = required(WEATHER_API_KEY_ENV)?;
        let allowed_chat_id: i64 = parse_non_zero(ALLOWED_CHAT_ID_ENV, &required(ALLOWED_CHAT_ID_ENV)?)?;
        let allowed_topic_id: i32 = parse_non_zero(ALLOWED_TOPIC_ID_ENV, &required(ALLOWED_TOPIC_ID_ENV)?)?;

        let weather_base_url = lookup(WEATHER_BASE_URL_ENV)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());

        let timeout_secs = match lookup(HTTP_TIMEOUT_ENV) {
            Some(raw) if !raw.trim().is_empty() => parse_non_zero(HTTP_TIMEOUT_ENV, raw.trim())?,
            _ => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Config {
            bot_token,
            weather_api_key,
            allowed_chat_id,
            allowed_topic_id,
            weather_base_url,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn scope(&self) -> Scope {
        Scope::new(self.allowed_chat_id, self.allowed_topic_id)
    }
}

// Токены в логи не попадают.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("weather_api_key", &"<redacted>")
            .field("allowed_chat_id", &self.allowed_chat_id)
            .field("allowed_topic_id", &self.allowed_topic_id)
            .field("weather_base_url", &self.weather_base_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

fn parse_non_zero<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let value: T = raw.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })?;
    if value == T::default() {
        return Err(ConfigError::Zero(name));
    }
    Ok(value)
}
