//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /answer, etc.

pub mod answer;
pub mod ask;
pub mod help;
pub mod list;
pub mod media;
pub mod start;

pub use answer::AnswerHandler;
pub use ask::AskHandler;
pub use help::{CommandSummary, HelpHandler};
pub use list::ListHandler;
pub use media::MediaHandler;
pub use start::StartHandler;

use std::sync::Arc;
use crate::handlers::dispatcher::{CommandDispatcher, CommandHandler};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Build a dispatcher with every bot command registered
pub fn build_dispatcher(services: &ServiceFactory) -> Result<CommandDispatcher> {
    let mut dispatcher = CommandDispatcher::new(services.notifier.clone());

    let handlers: Vec<Arc<dyn CommandHandler>> = vec![
        Arc::new(StartHandler::new(services.notifier.clone())),
        Arc::new(AnswerHandler::new(
            services.auth_service.clone(),
            services.questions.clone(),
            services.notifier.clone(),
        )),
        Arc::new(ListHandler::new(
            services.auth_service.clone(),
            services.questions.clone(),
            services.notifier.clone(),
        )),
        Arc::new(MediaHandler::new(
            services.auth_service.clone(),
            services.questions.clone(),
            services.notifier.clone(),
        )),
        Arc::new(AskHandler::new(services.generator.clone(), services.notifier.clone())),
    ];

    for handler in handlers {
        dispatcher.register(handler)?;
    }

    let summaries: Vec<CommandSummary> = dispatcher
        .handlers()
        .iter()
        .map(|h| CommandSummary::of(h.as_ref()))
        .collect();
    dispatcher.register(Arc::new(HelpHandler::new(services.notifier.clone(), &summaries)))?;

    Ok(dispatcher)
}
