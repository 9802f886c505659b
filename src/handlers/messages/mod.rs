//! Message handlers module
//!
//! Handles non-command messages: every one of them is an anonymous question
//! that gets stored and forwarded to the administrator.

use std::sync::Arc;
use tracing::{debug, error};
use crate::database::QuestionStore;
use crate::models::{IncomingMessage, Question};
use crate::services::NotificationSink;
use crate::utils::errors::AskRelayError;
use crate::utils::logging::{log_delivery_failure, log_submission};

pub const SAVE_FAILED_TEXT: &str = "Sorry, your question could not be saved. Please try again later.";
pub const PROCESS_FAILED_TEXT: &str = "Sorry, your question could not be processed. Please try again later.";
pub const ACKNOWLEDGEMENT_TEXT: &str = "Your question has been sent. Thank you!";

/// What happened to a submitted question
#[derive(Debug)]
pub enum SubmissionOutcome {
    Stored { question_id: i64 },
    Failed(AskRelayError),
}

/// Stores incoming questions and notifies the administrator
pub struct SubmissionHandler {
    questions: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationSink>,
    admin_id: i64,
}

impl SubmissionHandler {
    pub fn new(questions: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationSink>, admin_id: i64) -> Self {
        Self { questions, notifier, admin_id }
    }

    /// Handle one incoming non-command message
    pub async fn submit(&self, msg: &IncomingMessage) -> SubmissionOutcome {
        debug!(user_id = msg.sender_id, chat_id = msg.chat_id, "Processing question submission");

        let mut question = build_question(msg);
        if let Err(e) = self.questions.create(&mut question).await {
            error!(error = %e, user_id = msg.sender_id, "Failed to store question");
            self.reply(msg.chat_id, SAVE_FAILED_TEXT, "save failure").await;
            return SubmissionOutcome::Failed(e);
        }

        let question_id = match self.questions.last_id().await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, user_id = msg.sender_id, "Failed to read the new question id");
                self.reply(msg.chat_id, PROCESS_FAILED_TEXT, "processing failure").await;
                return SubmissionOutcome::Failed(e);
            }
        };
        question.id = question_id;

        log_submission(msg.sender_id, question_id, &question.media_type);

        self.reply(self.admin_id, &admin_notification(&question), "admin notification").await;
        self.reply(msg.chat_id, ACKNOWLEDGEMENT_TEXT, "acknowledgement").await;

        SubmissionOutcome::Stored { question_id }
    }

    async fn reply(&self, chat_id: i64, text: &str, purpose: &str) {
        if let Err(e) = self.notifier.send_text(chat_id, text).await {
            log_delivery_failure(chat_id, purpose, &e);
        }
    }
}

/// Question built from a message. Media messages use the caption as text.
pub fn build_question(msg: &IncomingMessage) -> Question {
    match &msg.attachment {
        Some(attachment) => {
            Question::new(msg.sender_id, msg.username.as_str(), msg.caption.as_str())
                .with_media(attachment.media_type, attachment.file_id.as_str())
        }
        None => Question::new(msg.sender_id, msg.username.as_str(), msg.text.as_str()),
    }
}

/// Text the administrator receives for a new question
pub fn admin_notification(question: &Question) -> String {
    let sender = if question.username.is_empty() {
        question.user_id.to_string()
    } else {
        format!("@{} / {}", question.username, question.user_id)
    };

    let mut text = format!(
        "New anonymous question:\n{}\nQuestion ID: {}\n(from: {})",
        question.text, question.id, sender
    );
    if question.has_media() {
        text.push_str(&format!(
            "\nAttached {}: send /media {} to view it",
            question.media_type, question.id
        ));
    }
    text
}
