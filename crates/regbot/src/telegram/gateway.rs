//! [`Gateway`] backed by the Telegram Bot API

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, ParseMode};

use crate::core::error::AppResult;
use crate::registration::{Gateway, PhotoRef};

/// Sends through a teloxide [`Bot`], HTML parse mode everywhere
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Gateway for TelegramGateway {
    async fn send_text(&self, chat: ChatId, text: String) -> AppResult<()> {
        self.bot.send_message(chat, text).parse_mode(ParseMode::Html).await?;
        Ok(())
    }

    async fn send_photo(&self, chat: ChatId, photo: PhotoRef, caption: Option<String>) -> AppResult<()> {
        let mut req = self.bot.send_photo(chat, InputFile::file_id(FileId(photo.0)));
        if let Some(caption) = caption {
            req = req.caption(caption).parse_mode(ParseMode::Html);
        }
        req.await?;
        Ok(())
    }
}
