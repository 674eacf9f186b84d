use std::collections::HashMap;
use teloxide::types::UserId;

use super::SlotRegistry;

/// Состояние одной разрешённой темы: живые сообщения и запомненные города.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub slots: SlotRegistry,
    cities: HashMap<UserId, String>,
}

impl Conversation {
    pub fn remember_city(&mut self, user_id: UserId, city: String) {
        self.cities.insert(user_id, city);
    }

    pub fn city(&self, user_id: UserId) -> Option<&str> {
        self.cities.get(&user_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_per_user_and_overwritten() {
        let mut conversation = Conversation::default();
        conversation.remember_city(UserId(1), "Oslo".to_string());
        conversation.remember_city(UserId(1), "Bergen".to_string());

        assert_eq!(conversation.city(UserId(1)), Some("Bergen"));
        assert_eq!(conversation.city(UserId(2)), None);
    }
}
