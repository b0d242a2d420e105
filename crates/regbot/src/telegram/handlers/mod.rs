//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema for the bot. Commands go to the
//! command branch, every other message is classified into a flow event.

mod inbound;
mod schema;
mod types;

pub use inbound::{classify_text, event_from_message, largest_photo, session_key};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
