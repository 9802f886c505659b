//! /askcohere command handler

use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::IncomingMessage;
use crate::services::{NotificationSink, TextGenerator};
use crate::utils::errors::Result;
use crate::utils::helpers::{split_message, TELEGRAM_MESSAGE_LIMIT};

/// Handle /askcohere: answer the prompt with generated text. Open to everyone.
pub struct AskHandler {
    generator: Arc<dyn TextGenerator>,
    notifier: Arc<dyn NotificationSink>,
}

impl AskHandler {
    pub fn new(generator: Arc<dyn TextGenerator>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { generator, notifier }
    }
}

#[async_trait]
impl CommandHandler for AskHandler {
    fn command(&self) -> &'static str {
        "askcohere"
    }

    fn description(&self) -> &'static str {
        "ask the text generation model"
    }

    fn arguments(&self) -> &'static str {
        "<prompt>"
    }

    async fn handle(&self, msg: &IncomingMessage, args: &str) -> Result<()> {
        let generated = self.generator.generate(args).await?;
        info!(user_id = msg.sender_id, chars = generated.chars().count(), "Generated text reply");

        for chunk in split_message(&generated, TELEGRAM_MESSAGE_LIMIT) {
            send_reply(self.notifier.as_ref(), msg.chat_id, &chunk).await;
        }
        Ok(())
    }
}
