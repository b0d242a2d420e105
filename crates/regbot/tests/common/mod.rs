//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

pub mod recorder;

pub use recorder::{RecordingGateway, Sent};

use regbot::registration::{CompletionKeywords, Event, PhotoRef, RegistrationFlow, SessionKey, Submitter};
use teloxide::types::{ChatId, UserId};

/// Destination group used by every test
pub const GROUP: ChatId = ChatId(-1001234567890);

/// A user chatting with the bot privately
#[derive(Debug, Clone)]
pub struct TestUser {
    pub key: SessionKey,
    pub username: Option<String>,
}

impl TestUser {
    pub fn new(id: u64, username: Option<&str>) -> Self {
        Self {
            key: SessionKey::new(ChatId(id as i64), UserId(id)),
            username: username.map(str::to_string),
        }
    }

    pub fn chat(&self) -> ChatId {
        self.key.chat
    }

    pub fn start(&self) -> Event {
        Event::Start(Submitter::new(self.key.user, self.username.clone()))
    }
}

pub fn ivan() -> TestUser {
    TestUser::new(123456789, Some("ivan_petrov"))
}

pub fn flow() -> RegistrationFlow {
    RegistrationFlow::new(GROUP, CompletionKeywords::default())
}

pub fn text(value: &str) -> Event {
    Event::Text(value.to_string())
}

pub fn photo(id: &str) -> Event {
    Event::Photo(PhotoRef(id.to_string()))
}
