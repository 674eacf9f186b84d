/// Кнопки выбора периода прогноза.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    OneDay,
    ThreeDays,
    FiveDays,
}

impl DaySelector {
    pub const ALL: [DaySelector; 3] = [DaySelector::OneDay, DaySelector::ThreeDays, DaySelector::FiveDays];

    /// Неизвестные значения трактуются как прогноз на один день.
    pub fn from_payload(payload: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|selector| selector.payload() == payload)
            .unwrap_or(DaySelector::OneDay)
    }

    pub fn payload(self) -> &'static str {
        match self {
            DaySelector::OneDay => "one_day",
            DaySelector::ThreeDays => "three_days",
            DaySelector::FiveDays => "five_days",
        }
    }

    pub fn days(self) -> usize {
        match self {
            DaySelector::OneDay => 1,
            DaySelector::ThreeDays => 3,
            DaySelector::FiveDays => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DaySelector::OneDay => "🌤 1 день",
            DaySelector::ThreeDays => "⛅ 3 дня",
            DaySelector::FiveDays => "☀ 5 дней",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_payloads_map_to_day_counts() {
        assert_eq!(DaySelector::from_payload("one_day").days(), 1);
        assert_eq!(DaySelector::from_payload("three_days").days(), 3);
        assert_eq!(DaySelector::from_payload("five_days").days(), 5);
    }

    #[test]
    fn unknown_payload_defaults_to_one_day() {
        assert_eq!(DaySelector::from_payload("one_week"), DaySelector::OneDay);
        assert_eq!(DaySelector::from_payload(""), DaySelector::OneDay);
    }

    #[test]
    fn payload_round_trips_for_every_button() {
        for selector in DaySelector::ALL {
            assert_eq!(DaySelector::from_payload(selector.payload()), selector);
        }
    }
}
