//! Test helpers module
//!
//! In-memory stand-ins for the question store, the Telegram send API and the
//! text generation service, plus a router wired to all three.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use AskRelay::database::QuestionStore;
use AskRelay::handlers::{MessageRouter, RouteOutcome};
use AskRelay::models::{IncomingMessage, MediaType, Question};
use AskRelay::services::{AuthService, NotificationSink, ServiceFactory, TextGenerator};
use AskRelay::utils::errors::{AskRelayError, GenerationError, GenerationResult, Result};

pub mod telegram_mock;

pub const ADMIN_ID: i64 = 1000;
pub const USER_ID: i64 = 12345;
pub const USERNAME: &str = "alice";

/// One outgoing message captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, file_id: String, caption: String },
    Video { chat_id: i64, file_id: String, caption: String },
}

impl Sent {
    pub fn chat_id(&self) -> i64 {
        match self {
            Sent::Text { chat_id, .. } | Sent::Photo { chat_id, .. } | Sent::Video { chat_id, .. } => *chat_id,
        }
    }
}

/// Notification sink that records deliveries instead of sending them
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Sent>>,
    unreachable: Mutex<HashSet<i64>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every delivery to `chat_id` fails from now on
    pub fn make_unreachable(&self, chat_id: i64) {
        self.unreachable.lock().unwrap().insert(chat_id);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<Sent> {
        self.sent().into_iter().filter(|s| s.chat_id() == chat_id).collect()
    }

    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.sent_to(chat_id)
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_text_to(&self, chat_id: i64) -> Option<String> {
        self.texts_to(chat_id).pop()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn deliver(&self, chat_id: i64, message: Sent) -> Result<()> {
        if self.unreachable.lock().unwrap().contains(&chat_id) {
            return Err(AskRelayError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("chat {} is unreachable", chat_id),
            )));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.deliver(chat_id, Sent::Text { chat_id, text: text.to_string() })
    }

    async fn send_photo(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()> {
        self.deliver(chat_id, Sent::Photo {
            chat_id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        })
    }

    async fn send_video(&self, chat_id: i64, file_id: &str, caption: &str) -> Result<()> {
        self.deliver(chat_id, Sent::Video {
            chat_id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        })
    }
}

/// Question store kept in a vector, with switchable failures
#[derive(Default)]
pub struct InMemoryQuestionStore {
    questions: Mutex<Vec<Question>>,
    pub fail_create: AtomicBool,
    pub fail_last_id: AtomicBool,
    pub fail_update: AtomicBool,
}

impl InMemoryQuestionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a question directly and return its id
    pub fn seed(&self, mut question: Question) -> i64 {
        let mut questions = self.questions.lock().unwrap();
        question.id = questions.len() as i64 + 1;
        questions.push(question);
        questions.len() as i64
    }

    pub fn all(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<Question> {
        self.all().into_iter().find(|q| q.id == id)
    }

    fn storage_failure() -> AskRelayError {
        AskRelayError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn create(&self, question: &mut Question) -> Result<i64> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::storage_failure());
        }
        let id = self.seed(question.clone());
        question.id = id;
        Ok(id)
    }

    async fn fetch_by_id(&self, question_id: i64) -> Result<Question> {
        self.get(question_id)
            .ok_or(AskRelayError::QuestionNotFound { question_id })
    }

    async fn fetch_all(&self) -> Result<Vec<Question>> {
        Ok(self.all())
    }

    async fn last_id(&self) -> Result<i64> {
        if self.fail_last_id.load(Ordering::SeqCst) {
            return Err(Self::storage_failure());
        }
        self.all()
            .iter()
            .map(|q| q.id)
            .max()
            .ok_or(AskRelayError::EmptyStore)
    }

    async fn update(&self, question: &Question) -> Result<()> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(Self::storage_failure());
        }
        let mut questions = self.questions.lock().unwrap();
        let slot = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(AskRelayError::QuestionNotFound { question_id: question.id })?;
        *slot = question.clone();
        Ok(())
    }
}

/// Text generator returning a canned reply or a canned failure
pub struct StubGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Every non-empty prompt fails with HTTP 503
    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GenerationError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }
}

/// Router wired to in-memory collaborators
pub struct TestBot {
    pub router: MessageRouter,
    pub sink: Arc<RecordingSink>,
    pub store: Arc<InMemoryQuestionStore>,
    pub generator: Arc<StubGenerator>,
}

impl TestBot {
    pub fn new() -> Self {
        Self::with_generator(StubGenerator::replying("Generated answer"))
    }

    pub fn with_generator(generator: Arc<StubGenerator>) -> Self {
        let sink = RecordingSink::new();
        let store = InMemoryQuestionStore::new();
        let services = ServiceFactory::from_parts(
            AuthService::with_admin(ADMIN_ID),
            store.clone(),
            sink.clone(),
            generator.clone(),
        );
        let router = MessageRouter::new(&services).expect("router should build");

        Self { router, sink, store, generator }
    }

    /// Route a text message sent by `user_id` from their private chat
    pub async fn send(&self, user_id: i64, text: &str) -> RouteOutcome {
        let username = if user_id == ADMIN_ID { "admin" } else { USERNAME };
        self.router.route(&IncomingMessage::text(user_id, user_id, username, text)).await
    }

    pub async fn send_media(&self, user_id: i64, media_type: MediaType, file_id: &str, caption: &str) -> RouteOutcome {
        let msg = IncomingMessage::text(user_id, user_id, USERNAME, "")
            .with_attachment(media_type, file_id, caption);
        self.router.route(&msg).await
    }

    pub async fn send_as_admin(&self, text: &str) -> RouteOutcome {
        self.send(ADMIN_ID, text).await
    }
}
