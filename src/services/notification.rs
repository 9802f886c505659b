//! Notification service implementation
//!
//! This service is the only place that talks to the Telegram send API. Other
//! components depend on the [`NotificationSink`] trait so tests can record
//! outgoing messages instead of sending them.

use async_trait::async_trait;
use teloxide::{Bot, requests::Requester, payloads::{SendPhotoSetters, SendVideoSetters}};
use teloxide::types::{ChatId, InputFile};
use tracing::{debug, error};
use crate::utils::errors::{AskRelayError, Result};

/// Capability to deliver text, photos and videos to a chat
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    async fn send_photo(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()>;

    async fn send_video(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()>;
}

/// Notification service backed by the Telegram Bot API
#[derive(Clone)]
pub struct NotificationService {
    bot: Bot,
}

impl NotificationService {
    /// Create a new NotificationService instance
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn log_failure(chat_id: i64, kind: &str, error: &teloxide::RequestError) {
        error!(chat_id = chat_id, kind = kind, error = %error, "Failed to send notification");
    }
}

#[async_trait]
impl NotificationSink for NotificationService {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        debug!(chat_id = chat_id, "Sending text message");

        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| {
                Self::log_failure(chat_id, "text", &e);
                AskRelayError::Telegram(e)
            })?;

        Ok(())
    }

    async fn send_photo(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()> {
        debug!(chat_id = chat_id, "Sending photo");

        self.bot
            .send_photo(ChatId(chat_id), InputFile::file_id(file_id.to_string()))
            .caption(caption)
            .await
            .map_err(|e| {
                Self::log_failure(chat_id, "photo", &e);
                AskRelayError::Telegram(e)
            })?;

        Ok(())
    }

    async fn send_video(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()> {
        debug!(chat_id = chat_id, "Sending video");

        self.bot
            .send_video(ChatId(chat_id), InputFile::file_id(file_id.to_string()))
            .caption(caption)
            .await
            .map_err(|e| {
                Self::log_failure(chat_id, "video", &e);
                AskRelayError::Telegram(e)
            })?;

        Ok(())
    }
}
