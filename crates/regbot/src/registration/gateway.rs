//! Outbound side of the messaging platform

use async_trait::async_trait;
use teloxide::types::ChatId;

use super::submission::PhotoRef;
use crate::core::error::AppResult;

/// Sends messages on behalf of the flow.
///
/// Texts and captions are HTML. Implementations do not retry: a failed send is
/// returned to the caller as is.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send_text(&self, chat: ChatId, text: String) -> AppResult<()>;

    async fn send_photo(&self, chat: ChatId, photo: PhotoRef, caption: Option<String>) -> AppResult<()>;
}
