use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::models::{CurrentConditions, ForecastRecord, Observation};

pub const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WindBlock {
    pub speed: f64,
}

/// Ответ `/weather`.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainBlock,
    pub wind: WindBlock,
}

/// Ответ `/forecast`: записи с шагом в три часа.
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<CityBlock>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CityBlock {
    /// Сдвиг от UTC в секундах.
    #[serde(default)]
    pub timezone: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainBlock,
    pub wind: WindBlock,
}

fn observation(main: MainBlock, wind: WindBlock, weather: Vec<Condition>) -> Observation {
    let condition = weather.into_iter().next().unwrap_or_default();
    Observation {
        temp: main.temp,
        feels_like: main.feels_like,
        humidity: main.humidity,
        wind_speed: wind.speed,
        description: condition.description,
        icon: condition.icon,
    }
}

impl From<CurrentResponse> for CurrentConditions {
    fn from(response: CurrentResponse) -> Self {
        CurrentConditions {
            observed_at: response.dt.and_then(|dt| DateTime::from_timestamp(dt, 0)),
            observation: observation(response.main, response.wind, response.weather),
        }
    }
}

impl TryFrom<ForecastEntry> for ForecastRecord {
    type Error = chrono::ParseError;

    fn try_from(entry: ForecastEntry) -> Result<Self, Self::Error> {
        let at = NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT)?;
        Ok(ForecastRecord {
            at,
            observation: observation(entry.main, entry.wind, entry.weather),
        })
    }
}
