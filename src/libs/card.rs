use super::error::RecallError;
use super::messages::Message;
use super::priority::Priority;
use super::scheduler::Scheduled;
use super::task::{optional_text, required_text, MAX_TITLE_LEN};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A vocabulary card. Cards are reviewed indefinitely and never archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: i64,
    pub word: String,
    pub translation: String,
    pub example: Option<String>,
    pub priority: Priority,
    pub attempts: u32,
    pub successes: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub last_reviewed: Option<NaiveDateTime>,
}

impl Card {
    /// Rounded share of successful reviews in percent, `None` before the first review.
    pub fn success_rate(&self) -> Option<u8> {
        if self.attempts == 0 {
            return None;
        }
        let rate = (f64::from(self.successes) / f64::from(self.attempts) * 100.0).round();
        Some(rate.clamp(0.0, 100.0) as u8)
    }
}

impl Scheduled for Card {
    fn id(&self) -> i64 {
        self.id
    }

    fn schedule_key(&self) -> Option<NaiveDateTime> {
        self.last_reviewed
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardRequest {
    pub word: String,
    pub translation: String,
    pub example: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub word: String,
    pub translation: String,
    pub example: Option<String>,
    pub priority: Priority,
}

impl CardRequest {
    pub fn new(word: &str, translation: &str) -> Self {
        CardRequest {
            word: word.to_string(),
            translation: translation.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<CardDraft, RecallError> {
        let word = required_text(&self.word, Message::WordRequired, Message::WordTooLong(MAX_TITLE_LEN))?;
        let translation = self.translation.trim();
        if translation.is_empty() {
            return Err(RecallError::Validation(Message::TranslationRequired));
        }

        Ok(CardDraft {
            word,
            translation: translation.to_string(),
            example: optional_text(self.example.as_deref()),
            priority: Priority::parse_label(self.priority.as_deref())?,
        })
    }
}
