use std::collections::HashMap;
use teloxide::types::MessageId;

/// Назначение сообщения: в каждом слоте живёт не больше одного сообщения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Buttons,
    Report,
    LastUserInput,
}

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::Buttons => "buttons",
            Slot::Report => "report",
            Slot::LastUserInput => "last_user_input",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotRegistry {
    occupants: HashMap<Slot, MessageId>,
}

impl SlotRegistry {
    #[cfg(test)]
    pub fn get(&self, slot: Slot) -> Option<MessageId> {
        self.occupants.get(&slot).copied()
    }

    /// Освобождает слот и возвращает прежнего владельца.
    pub fn take(&mut self, slot: Slot) -> Option<MessageId> {
        self.occupants.remove(&slot)
    }

    pub fn put(&mut self, slot: Slot, message_id: MessageId) {
        self.occupants.insert(slot, message_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_slot() {
        let mut slots = SlotRegistry::default();
        slots.put(Slot::Report, MessageId(7));

        assert_eq!(slots.take(Slot::Report), Some(MessageId(7)));
        assert_eq!(slots.get(Slot::Report), None);
        assert_eq!(slots.take(Slot::Report), None);
    }

    #[test]
    fn slots_are_independent() {
        let mut slots = SlotRegistry::default();
        slots.put(Slot::Buttons, MessageId(1));
        slots.put(Slot::Report, MessageId(2));
        slots.put(Slot::Buttons, MessageId(3));

        assert_eq!(slots.get(Slot::Buttons), Some(MessageId(3)));
        assert_eq!(slots.get(Slot::Report), Some(MessageId(2)));
        assert_eq!(slots.get(Slot::LastUserInput), None);
    }
}
