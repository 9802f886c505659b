//! Start command handler

use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::IncomingMessage;
use crate::services::NotificationSink;
use crate::utils::errors::Result;

pub const WELCOME_TEXT: &str = "👋 Hi! Send me any message, photo or video and I will pass it \
    on to the administrator anonymously.\n\nType /help for the list of commands.";

/// Handle /start: greet the user and explain how to ask
pub struct StartHandler {
    notifier: Arc<dyn NotificationSink>,
}

impl StartHandler {
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl CommandHandler for StartHandler {
    fn command(&self) -> &'static str {
        "start"
    }

    fn description(&self) -> &'static str {
        "start the bot"
    }

    async fn handle(&self, msg: &IncomingMessage, _args: &str) -> Result<()> {
        debug!(user_id = msg.sender_id, chat_id = msg.chat_id, "Processing /start command");
        send_reply(self.notifier.as_ref(), msg.chat_id, WELCOME_TEXT).await;
        Ok(())
    }
}
