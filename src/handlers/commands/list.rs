//! /list command handler

use std::sync::Arc;
use async_trait::async_trait;
use crate::database::QuestionStore;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::{IncomingMessage, Question};
use crate::services::{AuthService, NotificationSink, Permission};
use crate::utils::errors::Result;
use crate::utils::helpers::{split_message, TELEGRAM_MESSAGE_LIMIT};
use crate::utils::logging::log_admin_action;

pub const NO_QUESTIONS_TEXT: &str = "No questions yet.";

/// Handle /list: every stored question, one line each, in id order
pub struct ListHandler {
    auth: AuthService,
    questions: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl ListHandler {
    pub fn new(auth: AuthService, questions: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { auth, questions, notifier }
    }
}

pub fn format_question_line(question: &Question) -> String {
    format!(
        "ID: {} | User: {} | Answer: {} | Answered: {}",
        question.id, question.username, question.answer, question.answered
    )
}

#[async_trait]
impl CommandHandler for ListHandler {
    fn command(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "list all questions (admin)"
    }

    async fn handle(&self, msg: &IncomingMessage, _args: &str) -> Result<()> {
        self.auth.require(msg.sender_id, Permission::Admin)?;

        let questions = self.questions.fetch_all().await?;
        log_admin_action(msg.sender_id, "list", None);

        if questions.is_empty() {
            send_reply(self.notifier.as_ref(), msg.chat_id, NO_QUESTIONS_TEXT).await;
            return Ok(());
        }

        let listing = questions
            .iter()
            .map(format_question_line)
            .collect::<Vec<_>>()
            .join("\n");

        for chunk in split_message(&listing, TELEGRAM_MESSAGE_LIMIT) {
            send_reply(self.notifier.as_ref(), msg.chat_id, &chunk).await;
        }
        Ok(())
    }
}
