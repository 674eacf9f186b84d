pub mod conversation;
pub mod day_selector;
pub mod forecast;
pub mod scope;
pub mod slots;

pub use conversation::Conversation;
pub use day_selector::DaySelector;
pub use forecast::{CurrentConditions, ForecastRecord, Observation};
pub use scope::Scope;
pub use slots::{Slot, SlotRegistry};
