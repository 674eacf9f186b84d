use chrono::NaiveDate;

use crate::models::{CurrentConditions, ForecastRecord, Observation};

const UNKNOWN_ICON: &str = "❔";

/// Глиф по коду иконки провайдера ("04d", "10n", ...). День и ночь не различаются.
pub fn condition_icon(code: &str) -> &'static str {
    match code.get(..2) {
        Some("01") => "☀️",
        Some("02") => "🌤",
        Some("03") => "⛅",
        Some("04") => "☁️",
        Some("09") => "🌧",
        Some("10") => "🌦",
        Some("11") => "⛈",
        Some("13") => "❄️",
        Some("50") => "🌫",
        _ => UNKNOWN_ICON,
    }
}

/// Целые градусы, без "-0".
pub fn format_temp(temp: f64) -> String {
    let rounded = temp.round() as i64;
    format!("{}°C", rounded)
}

pub fn format_wind(speed: f64) -> String {
    format!("{:.1} м/с", speed)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_row(record: &ForecastRecord) -> String {
    let observation = &record.observation;
    format!(
        "  {}  {:>5}  {:>8}  {} {}",
        record.at.format("%H:%M"),
        format_temp(observation.temp),
        format_wind(observation.wind_speed),
        condition_icon(&observation.icon),
        capitalize(&observation.description)
    )
}

/// Группирует записи по дате в порядке первого появления даты и оставляет
/// первые `day_count` дат. Внутри даты записи идут по времени.
pub fn group_by_date(
    records: &[ForecastRecord],
    day_count: usize,
) -> Vec<(NaiveDate, Vec<&ForecastRecord>)> {
    let mut groups: Vec<(NaiveDate, Vec<&ForecastRecord>)> = Vec::new();

    for record in records {
        let date = record.date();
        match groups.iter_mut().find(|(group_date, _)| *group_date == date) {
            Some((_, group)) => group.push(record),
            None => groups.push((date, vec![record])),
        }
    }

    groups.truncate(day_count);
    for (_, group) in groups.iter_mut() {
        group.sort_by_key(|record| record.at);
    }
    groups
}

/// Текущая погода и почасовые строки на сегодня.
pub fn format_current_and_today(
    city: &str,
    current: &CurrentConditions,
    todays_records: &[&ForecastRecord],
) -> String {
    let Observation {
        temp,
        feels_like,
        humidity,
        wind_speed,
        description,
        icon,
    } = &current.observation;

    let mut text = format!(
        "📍 Город: {}\n\
         🌡 Температура: {} (ощущается как {})\n\
         💨 Ветер: {}\n\
         💧 Влажность: {}%\n\
         {} Состояние: {}",
        city,
        format_temp(*temp),
        format_temp(*feels_like),
        format_wind(*wind_speed),
        humidity.round() as i64,
        condition_icon(icon),
        capitalize(description)
    );

    if !todays_records.is_empty() {
        text.push_str("\n\n🕒 Сегодня (местное время):");
        for record in todays_records {
            text.push('\n');
            text.push_str(&format_row(record));
        }
    }

    text
}

pub fn format_multi_day(city: &str, records: &[ForecastRecord], day_count: usize) -> String {
    let mut text = format!("📆 Прогноз погоды для {}:", city);

    for (date, group) in group_by_date(records, day_count) {
        text.push_str("\n\n📅 ");
        text.push_str(&format_date(date));
        for record in group {
            text.push('\n');
            text.push_str(&format_row(record));
        }
    }

    text
}
