//! Question model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of media attached to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(MediaType::Photo),
            "video" => Ok(MediaType::Video),
            other => Err(other.to_string()),
        }
    }
}

/// An anonymous question and, once given, the administrator's answer.
///
/// `media_type` and `file_id` are either both empty or both set; the only way
/// to attach media is [`Question::with_media`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub text: String,
    pub file_id: String,
    pub media_type: String,
    pub answered: bool,
    pub answer: String,
}

impl Question {
    /// New unanswered question without an id; the store assigns one on create
    pub fn new(user_id: i64, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            user_id,
            username: username.into(),
            text: text.into(),
            file_id: String::new(),
            media_type: String::new(),
            answered: false,
            answer: String::new(),
        }
    }

    pub fn with_media(mut self, media_type: MediaType, file_id: impl Into<String>) -> Self {
        let file_id = file_id.into();
        if file_id.is_empty() {
            return self;
        }
        self.media_type = media_type.as_str().to_string();
        self.file_id = file_id;
        self
    }

    pub fn has_media(&self) -> bool {
        !self.file_id.is_empty()
    }

    /// Record the administrator's answer.
    ///
    /// Fails with the current answer left untouched when one was already given.
    pub fn record_answer(&mut self, answer: impl Into<String>) -> Result<(), AnswerConflict> {
        if self.answered {
            return Err(AnswerConflict { question_id: self.id });
        }
        self.answered = true;
        self.answer = answer.into();
        Ok(())
    }

    /// Caption used when re-sending the attached media to the admin
    pub fn media_caption(&self) -> String {
        format!("Question #{}: {}", self.id, self.text)
    }
}

/// Returned by [`Question::record_answer`] for an already answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerConflict {
    pub question_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_is_unanswered_without_media() {
        let q = Question::new(12345, "alice", "Hello");
        assert_eq!(q.id, 0);
        assert!(!q.answered);
        assert!(q.answer.is_empty());
        assert!(!q.has_media());
        assert!(q.media_type.is_empty());
    }

    #[test]
    fn test_media_fields_are_set_together() {
        let q = Question::new(1, "bob", "look").with_media(MediaType::Photo, "AgADBAAD");
        assert_eq!(q.media_type, "photo");
        assert_eq!(q.file_id, "AgADBAAD");

        let q = Question::new(1, "bob", "look").with_media(MediaType::Video, "");
        assert!(q.media_type.is_empty());
        assert!(q.file_id.is_empty());
    }

    #[test]
    fn test_answer_is_recorded_once() {
        let mut q = Question::new(1, "bob", "why?");
        q.id = 7;
        assert!(q.record_answer("because").is_ok());
        assert_eq!(
            q.record_answer("again"),
            Err(AnswerConflict { question_id: 7 })
        );
        assert!(q.answered);
        assert_eq!(q.answer, "because");
    }

    #[test]
    fn test_media_type_parsing() {
        assert_eq!("photo".parse::<MediaType>(), Ok(MediaType::Photo));
        assert_eq!("video".parse::<MediaType>(), Ok(MediaType::Video));
        assert_eq!("audio".parse::<MediaType>(), Err("audio".to_string()));
        assert_eq!(MediaType::Video.to_string(), "video");
    }

    #[test]
    fn test_media_caption() {
        let mut q = Question::new(1, "bob", "see attached");
        q.id = 4;
        assert_eq!(q.media_caption(), "Question #4: see attached");
    }
}
