//! Help command handler

use std::sync::Arc;
use async_trait::async_trait;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::IncomingMessage;
use crate::services::NotificationSink;
use crate::utils::errors::Result;

/// One line of the /help listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub command: &'static str,
    pub arguments: &'static str,
    pub description: &'static str,
}

impl CommandSummary {
    pub fn of(handler: &dyn CommandHandler) -> Self {
        Self {
            command: handler.command(),
            arguments: handler.arguments(),
            description: handler.description(),
        }
    }
}

/// Handle /help. The listing is rendered once from the registered commands.
pub struct HelpHandler {
    notifier: Arc<dyn NotificationSink>,
    text: String,
}

impl HelpHandler {
    pub const DESCRIPTION: &'static str = "show this help message";

    /// `commands` lists every other registered command; /help adds itself
    pub fn new(notifier: Arc<dyn NotificationSink>, commands: &[CommandSummary]) -> Self {
        let mut summaries = commands.to_vec();
        summaries.push(CommandSummary {
            command: "help",
            arguments: "",
            description: Self::DESCRIPTION,
        });

        Self {
            notifier,
            text: render_help(&summaries),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

pub fn render_help(commands: &[CommandSummary]) -> String {
    let mut text = String::from("🤖 Available commands:\n");
    for summary in commands {
        text.push_str("\n/");
        text.push_str(summary.command);
        if !summary.arguments.is_empty() {
            text.push(' ');
            text.push_str(summary.arguments);
        }
        text.push_str(" - ");
        text.push_str(summary.description);
    }
    text
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn command(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    async fn handle(&self, msg: &IncomingMessage, _args: &str) -> Result<()> {
        send_reply(self.notifier.as_ref(), msg.chat_id, &self.text).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_help_lists_arguments() {
        let text = render_help(&[
            CommandSummary { command: "start", arguments: "", description: "start the bot" },
            CommandSummary { command: "media", arguments: "<id>", description: "show media" },
        ]);
        assert!(text.contains("/start - start the bot"));
        assert!(text.contains("/media <id> - show media"));
    }
}
