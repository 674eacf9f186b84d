use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::models::DaySelector;

fn day_button(selector: DaySelector) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(selector.label(), selector.payload())
}

/// Клавиатура выбора периода: 1 и 3 дня в первом ряду, 5 дней во втором.
pub fn make_days_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![day_button(DaySelector::OneDay), day_button(DaySelector::ThreeDays)],
        vec![day_button(DaySelector::FiveDays)],
    ])
}
