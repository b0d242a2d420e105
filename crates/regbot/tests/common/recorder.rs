//! Gateway that records every outbound send instead of talking to Telegram

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use regbot::registration::{Gateway, PhotoRef};
use regbot::{AppError, AppResult};
use teloxide::types::ChatId;

/// One recorded outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat: ChatId, text: String },
    Photo { chat: ChatId, photo: PhotoRef, caption: Option<String> },
}

impl Sent {
    pub fn chat(&self) -> ChatId {
        match self {
            Sent::Text { chat, .. } | Sent::Photo { chat, .. } => *chat,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Sent::Text { text, .. } => Some(text),
            Sent::Photo { caption, .. } => caption.as_deref(),
        }
    }
}

/// Records sends; can be told to fail from the n-th photo on
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<Sent>>,
    fail_from_photo: Option<usize>,
    photos_attempted: Mutex<usize>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photo sends with a 1-based index >= `n` fail with an IO error
    pub fn failing_from_photo(n: usize) -> Self {
        Self {
            fail_from_photo: Some(n),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Everything sent to `chat`, in order
    pub fn sent_to(&self, chat: ChatId) -> Vec<Sent> {
        self.sent().into_iter().filter(|s| s.chat() == chat).collect()
    }

    /// Texts sent to `chat`, in order
    pub fn texts_to(&self, chat: ChatId) -> Vec<String> {
        self.sent_to(chat)
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Photo { .. } => None,
            })
            .collect()
    }

    pub fn last_text_to(&self, chat: ChatId) -> Option<String> {
        self.texts_to(chat).pop()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_text(&self, chat: ChatId, text: String) -> AppResult<()> {
        self.sent.lock().unwrap().push(Sent::Text { chat, text });
        Ok(())
    }

    async fn send_photo(&self, chat: ChatId, photo: PhotoRef, caption: Option<String>) -> AppResult<()> {
        let attempt = {
            let mut attempted = self.photos_attempted.lock().unwrap();
            *attempted += 1;
            *attempted
        };
        if self.fail_from_photo.is_some_and(|n| attempt >= n) {
            return Err(AppError::Io(std::io::Error::other("simulated delivery failure")));
        }

        self.sent.lock().unwrap().push(Sent::Photo { chat, photo, caption });
        Ok(())
    }
}
