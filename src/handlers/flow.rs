use teloxide::types::{ChatId, MessageId, ThreadId, UserId};

use crate::bot_state::BotState;
use crate::handlers::utils::make_days_keyboard;
use crate::messenger::{Messenger, MessengerError, OutgoingMessage};
use crate::models::{Conversation, DaySelector, Scope, Slot};
use crate::slot_manager;

pub const BUTTONS_TEXT: &str = "🔘 Выберите прогноз:";
pub const NO_CITY_TEXT: &str = "❗ Сначала введите название города.";

/// Текстовое сообщение с названием города.
#[derive(Debug, Clone)]
pub struct CityMessage {
    pub chat_id: ChatId,
    pub thread_id: Option<ThreadId>,
    pub user_id: UserId,
    pub message_id: MessageId,
    pub text: String,
}

/// Нажатие кнопки выбора периода.
#[derive(Debug, Clone)]
pub struct ButtonClick {
    pub query_id: String,
    pub chat_id: ChatId,
    pub thread_id: Option<ThreadId>,
    pub user_id: UserId,
    pub payload: Option<String>,
}

fn in_scope(state: &BotState, chat_id: ChatId, thread_id: Option<ThreadId>) -> Option<Scope> {
    let scope = state.scope();
    if scope.matches(chat_id, thread_id) {
        Some(scope)
    } else {
        log::debug!("🚫 Ignoring event from chat {} thread {:?}", chat_id, thread_id);
        None
    }
}

pub async fn render_buttons<M: Messenger>(
    messenger: &M,
    scope: Scope,
    conversation: &mut Conversation,
) -> Result<MessageId, MessengerError> {
    slot_manager::replace(
        messenger,
        scope,
        &mut conversation.slots,
        Slot::Buttons,
        OutgoingMessage::with_keyboard(BUTTONS_TEXT, make_days_keyboard()),
    )
    .await
}

/// Новый отчёт, затем клавиатура: кнопки всегда последние в теме.
async fn publish_report<M: Messenger>(
    messenger: &M,
    scope: Scope,
    conversation: &mut Conversation,
    report: String,
) -> Result<(), MessengerError> {
    slot_manager::replace(
        messenger,
        scope,
        &mut conversation.slots,
        Slot::Report,
        OutgoingMessage::text(report),
    )
    .await?;
    render_buttons(messenger, scope, conversation).await?;
    Ok(())
}

pub async fn on_start<M: Messenger>(
    messenger: &M,
    state: &BotState,
    chat_id: ChatId,
    thread_id: Option<ThreadId>,
) -> Result<(), MessengerError> {
    let Some(scope) = in_scope(state, chat_id, thread_id) else {
        return Ok(());
    };

    let conversation = state.conversations.get(scope).await;
    let mut conversation = conversation.lock().await;
    render_buttons(messenger, scope, &mut conversation).await?;
    Ok(())
}

pub async fn on_city_message<M: Messenger>(
    messenger: &M,
    state: &BotState,
    input: CityMessage,
) -> Result<(), MessengerError> {
    let Some(scope) = in_scope(state, input.chat_id, input.thread_id) else {
        return Ok(());
    };

    let conversation = state.conversations.get(scope).await;
    let mut conversation = conversation.lock().await;

    let slots = &mut conversation.slots;
    slot_manager::record(messenger, scope, slots, Slot::LastUserInput, input.message_id).await;

    let city = input.text.trim();
    if city.is_empty() {
        return Ok(());
    }

    log::info!("🏙 User {} asked for {:?}", input.user_id.0, city);
    conversation.remember_city(input.user_id, city.to_string());

    let report = state.weather.get_weather_data(city, DaySelector::OneDay.days()).await;
    publish_report(messenger, scope, &mut conversation, report).await
}

pub async fn on_button_click<M: Messenger>(
    messenger: &M,
    state: &BotState,
    click: ButtonClick,
) -> Result<(), MessengerError> {
    let Some(scope) = in_scope(state, click.chat_id, click.thread_id) else {
        return Ok(());
    };

    if let Err(e) = messenger.answer_callback(&click.query_id).await {
        log::warn!("⚠️ Could not answer callback {}: {}", click.query_id, e);
    }

    let conversation = state.conversations.get(scope).await;
    let mut conversation = conversation.lock().await;

    let Some(city) = conversation.city(click.user_id).map(str::to_owned) else {
        messenger.send(scope, OutgoingMessage::text(NO_CITY_TEXT)).await?;
        return Ok(());
    };

    let selector = DaySelector::from_payload(click.payload.as_deref().unwrap_or_default());
    log::info!("📆 User {} asked for {} day(s) in {:?}", click.user_id.0, selector.days(), city);

    let report = state.weather.get_weather_data(&city, selector.days()).await;
    publish_report(messenger, scope, &mut conversation, report).await
}
