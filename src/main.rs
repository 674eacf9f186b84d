use anyhow::Context;
use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod formatter;
mod handlers;
mod messenger;
mod models;
mod slot_manager;
mod weather;

use crate::bot_state::BotState;
use crate::config::Config;
use crate::handlers::{callback_handler, command_handler, message_handler};
use crate::weather::WeatherClient;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "показать кнопки прогноза")]
    Start,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().context("bot configuration is incomplete")?;
    log::info!(
        "🌦 Starting weather bot for chat {} topic {}...",
        config.allowed_chat_id,
        config.allowed_topic_id
    );

    let weather = WeatherClient::new(&config).context("failed to build weather HTTP client")?;
    let bot = Bot::new(config.bot_token.clone());
    let state = BotState::new(config, weather);

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler)
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
