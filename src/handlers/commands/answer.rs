//! /answer command handler

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use crate::database::QuestionStore;
use crate::handlers::dispatcher::{send_reply, CommandHandler};
use crate::models::IncomingMessage;
use crate::services::{AuthService, NotificationSink, Permission};
use crate::utils::errors::{AskRelayError, Result};
use crate::utils::logging::{log_admin_action, log_delivery_failure};

pub const ANSWER_USAGE: &str = "Usage: /answer <question_id> <answer>";

/// Relays the admin's answer to the submitter and marks the question answered
pub struct AnswerHandler {
    auth: AuthService,
    questions: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationSink>,
    // Held across fetch, check, mutate and persist
    answer_lock: Mutex<()>,
}

impl AnswerHandler {
    pub fn new(auth: AuthService, questions: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            auth,
            questions,
            notifier,
            answer_lock: Mutex::new(()),
        }
    }
}

/// Split `<id> <text>`; the answer text keeps its inner whitespace
pub fn parse_answer_args(args: &str) -> Result<(i64, String)> {
    let usage = || AskRelayError::InvalidInput(ANSWER_USAGE.to_string());

    let (id_token, rest) = args.trim().split_once(char::is_whitespace).ok_or_else(usage)?;
    let answer = rest.trim();
    if answer.is_empty() {
        return Err(usage());
    }

    let question_id = id_token
        .parse::<i64>()
        .map_err(|_| AskRelayError::InvalidInput(format!("Invalid question ID: {}", id_token)))?;

    Ok((question_id, answer.to_string()))
}

#[async_trait]
impl CommandHandler for AnswerHandler {
    fn command(&self) -> &'static str {
        "answer"
    }

    fn description(&self) -> &'static str {
        "answer a question (admin)"
    }

    fn arguments(&self) -> &'static str {
        "<id> <answer>"
    }

    async fn handle(&self, msg: &IncomingMessage, args: &str) -> Result<()> {
        self.auth.require(msg.sender_id, Permission::Admin)?;
        let (question_id, answer) = parse_answer_args(args)?;

        let _guard = self.answer_lock.lock().await;

        let mut question = self.questions.fetch_by_id(question_id).await?;
        if question.answered {
            return Err(AskRelayError::AlreadyAnswered { question_id });
        }

        let reply = format!("Answer to your question (ID={}):\n{}", question_id, answer);
        let delivered = match self.notifier.send_text(question.user_id, &reply).await {
            Ok(()) => true,
            Err(e) => {
                log_delivery_failure(question.user_id, "answer", &e);
                false
            }
        };

        question
            .record_answer(answer)
            .map_err(|conflict| AskRelayError::AlreadyAnswered { question_id: conflict.question_id })?;
        self.questions.update(&question).await?;

        log_admin_action(msg.sender_id, "answer", Some(question_id));
        debug!(question_id = question_id, delivered = delivered, "Question answered");

        let confirmation = if delivered {
            format!("Answer to question #{} sent.", question_id)
        } else {
            format!(
                "Answer to question #{} saved, but it could not be delivered to the submitter.",
                question_id
            )
        };
        send_reply(self.notifier.as_ref(), msg.chat_id, &confirmation).await;
        Ok(())
    }
}
