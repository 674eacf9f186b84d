use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::models::{Conversation, Scope};
use crate::weather::WeatherClient;

type ConversationMap = Arc<RwLock<HashMap<Scope, Arc<Mutex<Conversation>>>>>;

/// Разговоры по темам. Обработчик держит мьютекс разговора всё время
/// обработки события, поэтому события одной темы идут строго по очереди.
#[derive(Clone, Default)]
pub struct ConversationRegistry {
    conversations: ConversationMap,
}

impl ConversationRegistry {
    pub async fn get(&self, scope: Scope) -> Arc<Mutex<Conversation>> {
        {
            let conversations = self.conversations.read().await;
            if let Some(conversation) = conversations.get(&scope) {
                return conversation.clone();
            }
        }

        let mut conversations = self.conversations.write().await;
        conversations.entry(scope).or_default().clone()
    }
}

#[derive(Clone)]
pub struct BotState {
    config: Arc<Config>,
    pub weather: WeatherClient,
    pub conversations: ConversationRegistry,
}

impl BotState {
    pub fn new(config: Config, weather: WeatherClient) -> Self {
        Self {
            config: Arc::new(config),
            weather,
            conversations: ConversationRegistry::default(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.config.scope()
    }
}
