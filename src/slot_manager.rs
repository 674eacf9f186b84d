use teloxide::types::MessageId;

use crate::messenger::{Messenger, MessengerError, OutgoingMessage};
use crate::models::{Scope, Slot, SlotRegistry};

/// Удаляет текущего владельца слота, если он есть.
async fn evict<M: Messenger>(messenger: &M, scope: Scope, slots: &mut SlotRegistry, slot: Slot) {
    let Some(previous) = slots.take(slot) else {
        return;
    };

    // Ошибку удаления намеренно отбрасываем: сообщение могли удалить руками
    // или оно уже недоступно боту. Повторов нет.
    if let Err(e) = messenger.delete(scope, previous).await {
        log::debug!("🗑️ Could not delete {} message {}: {}", slot.name(), previous.0, e);
    }
}

/// Удаляет прежнее сообщение слота, отправляет новое и запоминает его id.
/// Ошибка отправки прерывает обработку; слот при этом остаётся пустым.
pub async fn replace<M: Messenger>(
    messenger: &M,
    scope: Scope,
    slots: &mut SlotRegistry,
    slot: Slot,
    content: OutgoingMessage,
) -> Result<MessageId, MessengerError> {
    evict(messenger, scope, slots, slot).await;

    let message_id = messenger.send(scope, content).await?;
    slots.put(slot, message_id);
    log::debug!("📌 {} slot now holds message {}", slot.name(), message_id.0);

    Ok(message_id)
}

/// То же, что `replace`, но для сообщения, которое отправил не бот
/// (например, город от пользователя).
pub async fn record<M: Messenger>(
    messenger: &M,
    scope: Scope,
    slots: &mut SlotRegistry,
    slot: Slot,
    message_id: MessageId,
) {
    evict(messenger, scope, slots, slot).await;
    slots.put(slot, message_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messenger::fake::{Call, RecordingMessenger};

    fn scope() -> Scope {
        Scope::new(-1001, 42)
    }

    #[tokio::test]
    async fn replace_on_empty_slot_only_sends() {
        let messenger = RecordingMessenger::default();
        let mut slots = SlotRegistry::default();

        let id = replace(&messenger, scope(), &mut slots, Slot::Report, OutgoingMessage::text("a"))
            .await
            .unwrap();

        assert_eq!(slots.get(Slot::Report), Some(id));
        assert_eq!(
            messenger.calls(),
            vec![Call::Send { id, text: "a".to_string(), keyboard: false }]
        );
    }

    #[tokio::test]
    async fn replace_deletes_previous_before_sending() {
        let messenger = RecordingMessenger::default();
        let mut slots = SlotRegistry::default();

        let first = replace(&messenger, scope(), &mut slots, Slot::Report, OutgoingMessage::text("a"))
            .await
            .unwrap();
        let second = replace(&messenger, scope(), &mut slots, Slot::Report, OutgoingMessage::text("b"))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(slots.get(Slot::Report), Some(second));
        assert_eq!(
            messenger.calls(),
            vec![
                Call::Send { id: first, text: "a".to_string(), keyboard: false },
                Call::Delete(first),
                Call::Send { id: second, text: "b".to_string(), keyboard: false },
            ]
        );
    }

    #[tokio::test]
    async fn failed_delete_does_not_block_update() {
        let messenger = RecordingMessenger::failing_deletes();
        let mut slots = SlotRegistry::default();
        slots.put(Slot::Buttons, MessageId(5));

        let id = replace(&messenger, scope(), &mut slots, Slot::Buttons, OutgoingMessage::text("keys"))
            .await
            .unwrap();

        assert_eq!(slots.get(Slot::Buttons), Some(id));
        assert_eq!(messenger.calls()[0], Call::Delete(MessageId(5)));
    }

    #[tokio::test]
    async fn failed_send_propagates_and_leaves_slot_empty() {
        let messenger = RecordingMessenger::default();
        messenger.fail_sends(true);
        let mut slots = SlotRegistry::default();
        slots.put(Slot::Report, MessageId(5));

        let result = replace(&messenger, scope(), &mut slots, Slot::Report, OutgoingMessage::text("x")).await;

        assert!(result.is_err());
        assert_eq!(slots.get(Slot::Report), None);
        assert_eq!(messenger.calls(), vec![Call::Delete(MessageId(5))]);
    }

    #[tokio::test]
    async fn record_evicts_previous_user_message() {
        let messenger = RecordingMessenger::default();
        let mut slots = SlotRegistry::default();

        record(&messenger, scope(), &mut slots, Slot::LastUserInput, MessageId(10)).await;
        record(&messenger, scope(), &mut slots, Slot::LastUserInput, MessageId(11)).await;

        assert_eq!(slots.get(Slot::LastUserInput), Some(MessageId(11)));
        assert_eq!(messenger.calls(), vec![Call::Delete(MessageId(10))]);
    }
}
