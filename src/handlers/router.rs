//! Message routing
//!
//! Commands go to the [`CommandDispatcher`]; everything else is a question
//! submission.

use tracing::instrument;
use crate::handlers::commands::build_dispatcher;
use crate::handlers::dispatcher::{CommandDispatcher, DispatchOutcome};
use crate::handlers::messages::{SubmissionHandler, SubmissionOutcome};
use crate::models::IncomingMessage;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Result of routing one message
#[derive(Debug)]
pub enum RouteOutcome {
    Command(DispatchOutcome),
    Submission(SubmissionOutcome),
}

/// Entry point for every inbound message
pub struct MessageRouter {
    dispatcher: CommandDispatcher,
    submissions: SubmissionHandler,
}

impl MessageRouter {
    pub fn new(services: &ServiceFactory) -> Result<Self> {
        Ok(Self {
            dispatcher: build_dispatcher(services)?,
            submissions: SubmissionHandler::new(
                services.questions.clone(),
                services.notifier.clone(),
                services.admin_id(),
            ),
        })
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    #[instrument(skip(self, msg), fields(user_id = msg.sender_id, chat_id = msg.chat_id))]
    pub async fn route(&self, msg: &IncomingMessage) -> RouteOutcome {
        match msg.command() {
            Some(invocation) => RouteOutcome::Command(self.dispatcher.dispatch(&invocation, msg).await),
            None => RouteOutcome::Submission(self.submissions.submit(msg).await),
        }
    }
}
