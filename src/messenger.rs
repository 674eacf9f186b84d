use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};
use thiserror::Error;

use crate::models::Scope;

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),
}

/// Исходящее сообщение: обычный текст, при необходимости с inline-клавиатурой.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Всё, что бот делает с Telegram.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, scope: Scope, message: OutgoingMessage)
        -> Result<MessageId, MessengerError>;

    /// Результат можно отбросить: сообщение могли уже удалить вручную.
    async fn delete(&self, scope: Scope, message_id: MessageId) -> Result<(), MessengerError>;

    async fn answer_callback(&self, query_id: &str) -> Result<(), MessengerError>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send(&self, scope: Scope, message: OutgoingMessage)
        -> Result<MessageId, MessengerError> {
        let mut request = self
            .send_message(scope.chat_id, message.text)
            .message_thread_id(scope.thread_id);
        if let Some(keyboard) = message.keyboard {
            request = request.reply_markup(keyboard);
        }
        let sent = request.await?;
        Ok(sent.id)
    }

    async fn delete(&self, scope: Scope, message_id: MessageId) -> Result<(), MessengerError> {
        self.delete_message(scope.chat_id, message_id).await?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<(), MessengerError> {
        self.answer_callback_query(query_id.to_string()).await?;
        Ok(())
    }
}
