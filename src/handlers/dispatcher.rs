//! Command registry and dispatcher
//!
//! Every command is a [`CommandHandler`] registered once by name. The
//! dispatcher runs the matching handler and turns any error it returns into a
//! reply to the chat the command came from, so no error escapes a single
//! update.

use std::sync::Arc;
use async_trait::async_trait;
use teloxide::types::BotCommand;
use tracing::{debug, info};
use crate::models::{CommandInvocation, IncomingMessage};
use crate::services::NotificationSink;
use crate::utils::errors::{AskRelayError, Result};
use crate::utils::logging::{log_command_error, log_delivery_failure};

/// Reply for commands no handler claims
pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command. Type /help for the list of commands.";

/// Authorization and business logic of one bot command
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name without the leading slash
    fn command(&self) -> &'static str;

    /// One-line description shown in /help and the Telegram command menu
    fn description(&self) -> &'static str;

    /// Argument synopsis for /help, e.g. `<id> <text>`
    fn arguments(&self) -> &'static str {
        ""
    }

    fn can_handle(&self, command: &str) -> bool {
        command == self.command()
    }

    /// Run the command. `args` is the text after the command token.
    async fn handle(&self, msg: &IncomingMessage, args: &str) -> Result<()>;
}

/// What happened to a dispatched command
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler completed
    Handled,
    /// The handler failed; the user was told why
    Rejected(AskRelayError),
    /// No handler claims the command
    Unknown,
}

/// Command dispatcher
pub struct CommandDispatcher {
    handlers: Vec<Arc<dyn CommandHandler>>,
    notifier: Arc<dyn NotificationSink>,
}

impl CommandDispatcher {
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            handlers: Vec::new(),
            notifier,
        }
    }

    /// Register a handler. A command name can be claimed only once.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> Result<()> {
        if let Some(existing) = self.find(handler.command()) {
            return Err(AskRelayError::Config(format!(
                "Command /{} is already handled by /{}",
                handler.command(),
                existing.command()
            )));
        }

        debug!(command = handler.command(), "Registered command handler");
        self.handlers.push(handler);
        Ok(())
    }

    /// First registered handler that accepts the command
    pub fn find(&self, command: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.iter().find(|h| h.can_handle(command))
    }

    pub fn handlers(&self) -> &[Arc<dyn CommandHandler>] {
        &self.handlers
    }

    /// Command list for `set_my_commands`
    pub fn bot_commands(&self) -> Vec<BotCommand> {
        self.handlers
            .iter()
            .map(|h| BotCommand::new(h.command(), h.description()))
            .collect()
    }

    /// Run the handler for `invocation` and report failures to the sender
    pub async fn dispatch(&self, invocation: &CommandInvocation, msg: &IncomingMessage) -> DispatchOutcome {
        let handler = match self.find(&invocation.name) {
            Some(handler) => handler,
            None => {
                debug!(command = %invocation.name, user_id = msg.sender_id, "Unknown command");
                self.reply(msg.chat_id, UNKNOWN_COMMAND_TEXT).await;
                return DispatchOutcome::Unknown;
            }
        };

        info!(command = %invocation.name, user_id = msg.sender_id, chat_id = msg.chat_id, "Handling command");

        match handler.handle(msg, &invocation.args).await {
            Ok(()) => DispatchOutcome::Handled,
            Err(e) => {
                log_command_error(&invocation.name, msg.sender_id, &e);
                self.reply(msg.chat_id, &e.user_message()).await;
                DispatchOutcome::Rejected(e)
            }
        }
    }

    async fn reply(&self, chat_id: i64, text: &str) {
        send_reply(self.notifier.as_ref(), chat_id, text).await;
    }
}

/// Send a reply to the chat a command came from. Delivery failures are
/// logged and never turn a completed command into a failed one.
pub async fn send_reply(notifier: &dyn NotificationSink, chat_id: i64, text: &str) {
    if let Err(e) = notifier.send_text(chat_id, text).await {
        log_delivery_failure(chat_id, "command reply", &e);
    }
}
