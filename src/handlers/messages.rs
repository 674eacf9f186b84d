use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::handlers::flow::{self, CityMessage};

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Неизвестные команды городом не считаем
    if text.starts_with('/') {
        return Ok(());
    }

    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let input = CityMessage {
        chat_id: msg.chat.id,
        thread_id: msg.thread_id,
        user_id: user.id,
        message_id: msg.id,
        text: text.to_string(),
    };
    flow::on_city_message(&bot, &state, input).await?;

    Ok(())
}
