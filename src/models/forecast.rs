use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Показатели погоды в одной точке времени.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

/// Текущая погода в городе.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub observed_at: Option<DateTime<Utc>>,
    pub observation: Observation,
}

/// Одна трёхчасовая запись прогноза. Время берётся из `dt_txt` провайдера.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub at: NaiveDateTime,
    pub observation: Observation,
}

impl ForecastRecord {
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }
}
