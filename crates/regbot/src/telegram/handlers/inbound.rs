//! Translation of incoming Telegram messages into flow events

use teloxide::types::{Message, PhotoSize};

use crate::registration::{Event, PhotoRef, SessionKey};

/// Conversation key of a message, `None` for messages without a sender (channel posts)
pub fn session_key(msg: &Message) -> Option<SessionKey> {
    msg.from.as_ref().map(|user| SessionKey::new(msg.chat.id, user.id))
}

/// Classifies a non-command-routed message.
///
/// Slash commands the router did not recognise become [`Event::Command`] so
/// they can never end up as field values.
pub fn event_from_message(msg: &Message) -> Event {
    if let Some(photos) = msg.photo() {
        return match largest_photo(photos) {
            Some(photo) => Event::Photo(photo),
            None => Event::Unsupported,
        };
    }

    match msg.text() {
        Some(text) => classify_text(text),
        None => Event::Unsupported,
    }
}

pub fn classify_text(text: &str) -> Event {
    if text.trim_start().starts_with('/') {
        Event::Command(text.to_string())
    } else {
        Event::Text(text.to_string())
    }
}

/// Highest-resolution variant of a photo
pub fn largest_photo(sizes: &[PhotoSize]) -> Option<PhotoRef> {
    sizes
        .iter()
        .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
        .map(|p| PhotoRef(p.file.id.0.clone()))
}
