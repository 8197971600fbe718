//! Task and history records, and the requests that create or change them.

use super::date::parse_timestamp;
use super::error::RecallError;
use super::messages::Message;
use super::priority::Priority;
use super::scheduler::Scheduled;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Longest accepted title or word, in characters.
pub const MAX_TITLE_LEN: usize = 250;

/// An active task waiting for its next review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub next_review_date: NaiveDateTime,
    pub priority: Priority,
}

impl Scheduled for Task {
    fn id(&self) -> i64 {
        self.id
    }

    fn schedule_key(&self) -> Option<NaiveDateTime> {
        Some(self.next_review_date)
    }

    fn due_date(&self) -> Option<NaiveDateTime> {
        Some(self.next_review_date)
    }
}

/// Snapshot of a task taken when it was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SucceededTask {
    pub id: i64,
    /// Id the task had while active. Not a live reference: the task row is gone.
    pub source_task_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub completed_at: NaiveDateTime,
}

/// Raw task input as it arrives from the command line.
#[derive(Debug, Clone, Default)]
pub struct TaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub next_review_date: String,
    pub priority: Option<String>,
    /// Only honoured by edits.
    pub created_at: Option<String>,
}

/// Validated task fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub next_review_date: NaiveDateTime,
    pub priority: Priority,
    pub created_at: Option<NaiveDateTime>,
}

impl TaskRequest {
    pub fn new(title: &str, next_review_date: &str) -> Self {
        TaskRequest {
            title: title.to_string(),
            next_review_date: next_review_date.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<TaskDraft, RecallError> {
        Ok(TaskDraft {
            title: required_text(&self.title, Message::TitleRequired, Message::TitleTooLong(MAX_TITLE_LEN))?,
            description: optional_text(self.description.as_deref()),
            next_review_date: parse_timestamp(&self.next_review_date)?,
            priority: Priority::parse_label(self.priority.as_deref())?,
            created_at: self.created_at.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

/// Raw input for editing a history record.
#[derive(Debug, Clone, Default)]
pub struct SucceededTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SucceededTaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
}

impl SucceededTaskRequest {
    pub fn validate(&self) -> Result<SucceededTaskDraft, RecallError> {
        Ok(SucceededTaskDraft {
            title: required_text(&self.title, Message::TitleRequired, Message::TitleTooLong(MAX_TITLE_LEN))?,
            description: optional_text(self.description.as_deref()),
            priority: Priority::parse_label(self.priority.as_deref())?,
        })
    }
}

/// Trims `value` and checks it is non-empty and at most `MAX_TITLE_LEN` characters.
pub(crate) fn required_text(value: &str, empty: Message, too_long: Message) -> Result<String, RecallError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RecallError::Validation(empty));
    }
    if value.chars().count() > MAX_TITLE_LEN {
        return Err(RecallError::Validation(too_long));
    }
    Ok(value.to_string())
}

/// Blank optional text is stored as NULL.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
