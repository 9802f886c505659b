//! /media command handler

use std::sync::Arc;
use async_trait::async_trait;
use crate::database::QuestionStore;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::{IncomingMessage, MediaType};
use crate::services::{AuthService, NotificationSink, Permission};
use crate::utils::errors::{AskRelayError, Result};
use crate::utils::logging::{log_admin_action, log_delivery_failure};

pub const MEDIA_USAGE: &str = "Usage: /media <question_id>";

/// Handle /media: re-send a question's attachment to the admin
pub struct MediaHandler {
    auth: AuthService,
    questions: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl MediaHandler {
    pub fn new(auth: AuthService, questions: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { auth, questions, notifier }
    }
}

pub fn parse_media_args(args: &str) -> Result<i64> {
    let id_token = args
        .split_whitespace()
        .next()
        .ok_or_else(|| AskRelayError::InvalidInput(MEDIA_USAGE.to_string()))?;

    id_token
        .parse::<i64>()
        .map_err(|_| AskRelayError::InvalidInput(format!("Invalid question ID: {}", id_token)))
}

#[async_trait]
impl CommandHandler for MediaHandler {
    fn command(&self) -> &'static str {
        "media"
    }

    fn description(&self) -> &'static str {
        "show the media attached to a question (admin)"
    }

    fn arguments(&self) -> &'static str {
        "<id>"
    }

    async fn handle(&self, msg: &IncomingMessage, args: &str) -> Result<()> {
        self.auth.require(msg.sender_id, Permission::Admin)?;
        let question_id = parse_media_args(args)?;

        let question = self.questions.fetch_by_id(question_id).await?;
        log_admin_action(msg.sender_id, "media", Some(question_id));

        if !question.has_media() {
            let text = format!("Question #{} has no media attached.", question_id);
            send_reply(self.notifier.as_ref(), msg.chat_id, &text).await;
            return Ok(());
        }

        let caption = question.media_caption();
        let sent = match question.media_type.parse::<MediaType>() {
            Ok(MediaType::Photo) => {
                self.notifier.send_photo(msg.chat_id, &question.file_id, &caption).await
            }
            Ok(MediaType::Video) => {
                self.notifier.send_video(msg.chat_id, &question.file_id, &caption).await
            }
            Err(unknown) => {
                let text = format!("Unknown media type: {}", unknown);
                send_reply(self.notifier.as_ref(), msg.chat_id, &text).await;
                return Ok(());
            }
        };

        if let Err(e) = sent {
            log_delivery_failure(msg.chat_id, "media", &e);
        }
        Ok(())
    }
}
