//! Inbound message model
//!
//! Handlers work on [`IncomingMessage`] rather than on teloxide's `Message`
//! so they can be driven by tests without a Telegram connection.

use teloxide::types::Message;
use super::question::MediaType;

/// Media attached to an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub media_type: MediaType,
    pub file_id: String,
}

/// A message received from a chat, reduced to what the bot needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub sender_id: i64,
    pub username: String,
    pub text: String,
    pub caption: String,
    pub attachment: Option<Attachment>,
}

/// A command token and its raw argument string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Lowercased command name without the leading `/` or `@botname` suffix
    pub name: String,
    pub args: String,
}

impl CommandInvocation {
    /// Parse `/name[@bot] args...`; `None` when the text is not a command
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;
        let (token, args) = match rest.find(char::is_whitespace) {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        let name = token.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_lowercase(),
            args: args.trim().to_string(),
        })
    }
}

impl IncomingMessage {
    /// Plain text message, mostly useful for building test input
    pub fn text(chat_id: i64, sender_id: i64, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            sender_id,
            username: username.into(),
            text: text.into(),
            caption: String::new(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, media_type: MediaType, file_id: impl Into<String>, caption: impl Into<String>) -> Self {
        self.attachment = Some(Attachment {
            media_type,
            file_id: file_id.into(),
        });
        self.caption = caption.into();
        self
    }

    /// Command carried by the message text, if any. Captions never carry commands.
    pub fn command(&self) -> Option<CommandInvocation> {
        CommandInvocation::parse(&self.text)
    }

    /// Convert a Telegram message. Returns `None` for messages without a
    /// sender (channel posts), which the bot ignores.
    pub fn from_telegram(msg: &Message) -> Option<Self> {
        let user = msg.from.as_ref()?;

        let attachment = if let Some(photos) = msg.photo() {
            photos
                .iter()
                .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
                .map(|p| Attachment {
                    media_type: MediaType::Photo,
                    file_id: p.file.id.clone(),
                })
        } else {
            msg.video().map(|video| Attachment {
                media_type: MediaType::Video,
                file_id: video.file.id.clone(),
            })
        };

        Some(Self {
            chat_id: msg.chat.id.0,
            sender_id: user.id.0 as i64,
            username: user.username.clone().unwrap_or_default(),
            text: msg.text().unwrap_or_default().to_string(),
            caption: msg.caption().unwrap_or_default().to_string(),
            attachment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_command() {
        let cmd = CommandInvocation::parse("/list").unwrap();
        assert_eq!(cmd.name, "list");
        assert_eq!(cmd.args, "");
    }

    #[test]
    fn test_parse_command_with_args_keeps_inner_text() {
        let cmd = CommandInvocation::parse("/answer 1 Thanks  for\nasking ").unwrap();
        assert_eq!(cmd.name, "answer");
        assert_eq!(cmd.args, "1 Thanks  for\nasking");
    }

    #[test]
    fn test_parse_strips_bot_mention_and_lowercases() {
        let cmd = CommandInvocation::parse("/Media@AskRelayBot 5").unwrap();
        assert_eq!(cmd.name, "media");
        assert_eq!(cmd.args, "5");
    }

    #[test]
    fn test_non_commands() {
        assert!(CommandInvocation::parse("hello").is_none());
        assert!(CommandInvocation::parse("/").is_none());
        assert!(CommandInvocation::parse("/ spaced").is_none());
        assert!(CommandInvocation::parse(" /list").is_none());
    }

    fn telegram_message(extra: serde_json::Value) -> Message {
        let mut json = serde_json::json!({
            "message_id": 42,
            "date": 1640995200,
            "chat": {
                "id": -1001234567890_i64,
                "title": "Questions",
                "type": "supergroup"
            },
            "from": {
                "id": 12345,
                "is_bot": false,
                "first_name": "Alice",
                "username": "alice"
            }
        });
        for (key, value) in extra.as_object().unwrap() {
            json[key] = value.clone();
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_from_telegram_picks_largest_photo() {
        let msg = telegram_message(serde_json::json!({
            "photo": [
                { "file_id": "small", "file_unique_id": "s", "width": 90, "height": 90, "file_size": 1000 },
                { "file_id": "large", "file_unique_id": "l", "width": 1280, "height": 720, "file_size": 90000 },
                { "file_id": "medium", "file_unique_id": "m", "width": 320, "height": 320, "file_size": 9000 }
            ],
            "caption": "what is this?"
        }));

        let incoming = IncomingMessage::from_telegram(&msg).unwrap();
        assert_eq!(incoming.sender_id, 12345);
        assert_eq!(incoming.chat_id, -1001234567890);
        assert_eq!(incoming.username, "alice");
        assert_eq!(incoming.caption, "what is this?");
        assert_eq!(
            incoming.attachment,
            Some(Attachment { media_type: MediaType::Photo, file_id: "large".to_string() })
        );
    }

    #[test]
    fn test_from_telegram_text_message() {
        let msg = telegram_message(serde_json::json!({ "text": "/list" }));

        let incoming = IncomingMessage::from_telegram(&msg).unwrap();
        assert_eq!(incoming.text, "/list");
        assert!(incoming.attachment.is_none());
        assert_eq!(incoming.command().unwrap().name, "list");
    }

    #[test]
    fn test_caption_is_not_a_command() {
        let msg = IncomingMessage::text(1, 1, "u", "")
            .with_attachment(MediaType::Photo, "file", "/list");
        assert!(msg.command().is_none());
    }
}
