//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::inbound::{event_from_message, session_key};
use super::types::{HandlerDeps, HandlerError};
use crate::registration::{Event, SessionKey, Submitter};
use crate::telegram::bot::Command;

/// Creates the dispatcher schema for the registration bot.
///
/// The same tree is used in production and can be driven by tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (flow and gateway)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let destination = deps.flow.destination();

    Update::filter_message()
        // Messages inside the destination group are never form input
        .filter(move |msg: Message| msg.chat.id != destination)
        .branch(command_handler(deps.clone()))
        .branch(message_handler(deps))
}

/// Handler for /start and /cancel
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .filter_command::<Command>()
        .endpoint(move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                let Some(user) = msg.from.as_ref() else {
                    return Ok(());
                };
                let event = match cmd {
                    Command::Start => Event::Start(Submitter::from_user(user)),
                    Command::Cancel => Event::Cancel,
                };
                dispatch(&deps, SessionKey::new(msg.chat.id, user.id), event).await
            }
        })
}

/// Handler for everything else: text, photos, unknown commands, other media.
///
/// In groups only senders with a form in progress are answered; other group
/// chatter is left alone.
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let flow = deps.flow.clone();

    dptree::filter_map(|msg: Message| session_key(&msg))
        .filter(move |msg: Message, key: SessionKey| msg.chat.is_private() || flow.sessions().contains(&key))
        .endpoint(move |msg: Message, key: SessionKey| {
            let deps = deps.clone();
            async move { dispatch(&deps, key, event_from_message(&msg)).await }
        })
}

/// Runs one event through the flow; delivery failures end the turn with an error
async fn dispatch(deps: &HandlerDeps, key: SessionKey, event: Event) -> Result<(), HandlerError> {
    deps.flow.handle(deps.gateway.as_ref(), key, event).await.map_err(|e| {
        log::error!("❌ Failed to handle update for user {} in chat {}: {}", key.user, key.chat, e);
        Box::new(e) as HandlerError
    })
}
