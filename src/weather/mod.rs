pub mod types;

use chrono::TimeDelta;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::formatter::{format_current_and_today, format_multi_day, group_by_date};
use crate::models::{CurrentConditions, ForecastRecord};
use crate::weather::types::{CurrentResponse, ForecastResponse};

pub const CITY_NOT_FOUND_TEXT: &str = "⚠️ Город не найден.";
pub const FORECAST_FAILED_TEXT: &str = "⚠️ Ошибка получения прогноза.";

const UNITS: &str = "metric";
const LANG: &str = "ru";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("weather provider answered {0}")]
    Status(StatusCode),
    #[error("unexpected weather payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("bad forecast timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Клиент OpenWeatherMap. Без повторов: любой не-200 ответ считается ошибкой.
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.weather_base_url.trim_end_matches('/').to_string(),
            api_key: config.weather_api_key.clone(),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WeatherError::Status(status));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str::<T>(&text)?)
    }

    pub async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let response: CurrentResponse = self.fetch("weather", city).await?;
        Ok(response.into())
    }

    /// Записи в порядке провайдера, без пересортировки. `dt_txt` приходит
    /// в UTC, время переводится в местное время города.
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastRecord>, WeatherError> {
        let response: ForecastResponse = self.fetch("forecast", city).await?;
        let offset = TimeDelta::seconds(response.city.map(|c| c.timezone).unwrap_or_default());
        response
            .list
            .into_iter()
            .map(|entry| -> Result<ForecastRecord, WeatherError> {
                let mut record = ForecastRecord::try_from(entry)?;
                record.at += offset;
                Ok(record)
            })
            .collect()
    }

    /// Готовый текст отчёта. Ошибки провайдера превращаются в фиксированные
    /// сообщения для пользователя.
    pub async fn get_weather_data(&self, city: &str, days: usize) -> String {
        if days <= 1 {
            self.one_day_report(city).await
        } else {
            self.multi_day_report(city, days).await
        }
    }

    async fn one_day_report(&self, city: &str) -> String {
        let current = match self.current(city).await {
            Ok(current) => current,
            Err(e) => {
                log::warn!("⚠️ Current weather for {:?} failed: {}", city, e);
                return CITY_NOT_FOUND_TEXT.to_string();
            }
        };
        log::debug!("🌡 Current weather for {:?} observed at {:?}", city, current.observed_at);

        let records = match self.forecast(city).await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("⚠️ Today's forecast for {:?} failed, sending current only: {}", city, e);
                Vec::new()
            }
        };

        let today: Vec<&ForecastRecord> = group_by_date(&records, 1)
            .into_iter()
            .flat_map(|(_, group)| group)
            .collect();

        format_current_and_today(city, &current, &today)
    }

    async fn multi_day_report(&self, city: &str, days: usize) -> String {
        match self.forecast(city).await {
            Ok(records) if !records.is_empty() => format_multi_day(city, &records, days),
            Ok(_) => {
                log::warn!("⚠️ Forecast for {:?} has no records", city);
                FORECAST_FAILED_TEXT.to_string()
            }
            Err(e) => {
                log::warn!("⚠️ Forecast for {:?} failed: {}", city, e);
                FORECAST_FAILED_TEXT.to_string()
            }
        }
    }
}
