//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod generation;
pub mod notification;

// Re-export commonly used services
pub use auth::{AuthService, Permission};
pub use generation::{GenerationService, TextGenerator, GenerateRequest, GenerateResponse};
pub use notification::{NotificationService, NotificationSink};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::QuestionStore;
use crate::utils::errors::Result;
use teloxide::Bot;

/// Service factory holding the collaborators every handler is built from
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub questions: Arc<dyn QuestionStore>,
    pub notifier: Arc<dyn NotificationSink>,
    pub generator: Arc<dyn TextGenerator>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory wired to Telegram and the text generation API
    pub fn new(
        bot: Bot,
        settings: &Settings,
        questions: Arc<dyn QuestionStore>,
    ) -> Result<Self> {
        let auth_service = AuthService::new(settings);
        let notifier = Arc::new(NotificationService::new(bot));
        let generator = Arc::new(GenerationService::new(settings.generation.clone())?);

        Ok(Self::from_parts(auth_service, questions, notifier, generator))
    }

    /// Assemble a factory from already built collaborators
    pub fn from_parts(
        auth_service: AuthService,
        questions: Arc<dyn QuestionStore>,
        notifier: Arc<dyn NotificationSink>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            auth_service,
            questions,
            notifier,
            generator,
        }
    }

    pub fn admin_id(&self) -> i64 {
        self.auth_service.admin_id()
    }
}
