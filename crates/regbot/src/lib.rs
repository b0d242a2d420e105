//! regbot - Telegram bot that collects exhibition registration forms
//!
//! Users fill in a short form in a private chat (name, phone, vehicle, up to
//! three photos); completed forms are posted to the organisers' group.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `registration`: data model, conversation state machine and delivery
//! - `telegram`: Telegram bot integration and handlers
//! - `cli`: command-line interface

pub mod cli;
pub mod core;
pub mod registration;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{AppError, AppResult, Config};
pub use registration::{Gateway, RegistrationFlow};
pub use telegram::{create_bot, schema, HandlerDeps};
