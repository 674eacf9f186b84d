use teloxide::types::{ChatId, MessageId, ThreadId};

/// Чат и тема форума, в которых бот вообще что-то делает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    pub chat_id: ChatId,
    pub thread_id: ThreadId,
}

impl Scope {
    pub fn new(chat_id: i64, topic_id: i32) -> Self {
        Self {
            chat_id: ChatId(chat_id),
            thread_id: ThreadId(MessageId(topic_id)),
        }
    }

    /// Событие из другого чата, из другой темы или вне темы не совпадает.
    pub fn matches(&self, chat_id: ChatId, thread_id: Option<ThreadId>) -> bool {
        self.chat_id == chat_id && thread_id == Some(self.thread_id)
    }
}
