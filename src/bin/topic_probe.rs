//! Отвечает на любое текстовое сообщение идентификаторами чата и темы.
//! Нужен один раз, чтобы узнать ALLOWED_CHAT_ID и ALLOWED_TOPIC_ID.

use teloxide::prelude::*;
use std::error::Error;

fn describe(msg: &Message) -> String {
    let topic = msg
        .thread_id
        .map(|thread| thread.0 .0.to_string())
        .unwrap_or_else(|| "нет".to_string());
    format!("Chat ID: {}\nTopic ID: {}", msg.chat.id, topic)
}

async fn reply_with_ids(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.starts_with('/') {
        return Ok(());
    }

    log::info!("📍 Probe from chat {} thread {:?}", msg.chat.id, msg.thread_id);

    let mut request = bot.send_message(msg.chat.id, describe(&msg));
    if let Some(thread_id) = msg.thread_id {
        request = request.message_thread_id(thread_id);
    }
    request.await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("🔎 Starting topic probe...");

    let bot = Bot::from_env();
    let handler = Update::filter_message().endpoint(reply_with_ids);

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
