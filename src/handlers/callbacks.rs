use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::handlers::flow::{self, ButtonClick};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(ref message) = q.message else {
        return Ok(());
    };

    let click = ButtonClick {
        query_id: q.id.clone(),
        chat_id: message.chat().id,
        thread_id: message.regular_message().and_then(|m| m.thread_id),
        user_id: q.from.id,
        payload: q.data.clone(),
    };
    flow::on_button_click(&bot, &state, click).await?;

    Ok(())
}
