//! Mock Telegram API server for testing
//!
//! Simulates the Bot API endpoints the notification service calls, using
//! wiremock. Method names are matched case-insensitively because the Bot API
//! accepts both `sendMessage` and `SendMessage`.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_BOT_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Bot pointed at the mock server
    pub fn bot(&self) -> teloxide::Bot {
        let api_url = url::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        teloxide::Bot::new(TEST_BOT_TOKEN).set_api_url(api_url)
    }

    fn sent_message(chat_id: i64) -> Value {
        json!({
            "ok": true,
            "result": {
                "message_id": 123,
                "from": {
                    "id": 12345,
                    "is_bot": true,
                    "first_name": "AskRelayBot",
                    "username": "askrelay_bot"
                },
                "chat": {
                    "id": chat_id,
                    "title": "Test Group",
                    "type": "supergroup"
                },
                "date": 1640995200,
                "text": "Test message"
            }
        })
    }

    async fn mount(&self, api_method: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path_regex(format!(r"(?i)^/bot{}/{}$", TEST_BOT_TOKEN, api_method)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Accept every send call
    pub async fn mock_send_success(&self, chat_id: i64) {
        for api_method in ["sendMessage", "sendPhoto", "sendVideo"] {
            self.mount(
                api_method,
                ResponseTemplate::new(200).set_body_json(Self::sent_message(chat_id)),
            )
            .await;
        }
    }

    /// Reject every send call the way Telegram does for a blocked bot
    pub async fn mock_send_forbidden(&self) {
        let body = json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        });
        for api_method in ["sendMessage", "sendPhoto", "sendVideo"] {
            self.mount(api_method, ResponseTemplate::new(403).set_body_json(body.clone()))
                .await;
        }
    }

    /// Number of requests whose path ends with `api_method`, ignoring case
    pub async fn calls_to(&self, api_method: &str) -> usize {
        let suffix = format!("/{}", api_method.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&suffix))
            .count()
    }
}
