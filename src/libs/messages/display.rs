//! Display implementation for recall-flow messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent between the command layer, validation errors and logs.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "Title is required".to_string(),
            Message::TitleTooLong(max) => format!("Title must not exceed {} characters", max),
            Message::WordRequired => "Word is required".to_string(),
            Message::WordTooLong(max) => format!("Word must not exceed {} characters", max),
            Message::TranslationRequired => "Translation is required".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Expected YYYY-MM-DDTHH:MM[:SS]", value),
            Message::InvalidPriority(value) => format!("Invalid priority '{}'. Allowed values: Low, Medium, High", value),

            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created", id, title),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskRescheduled(id, date) => format!("Task #{} rescheduled to {}", id, date),
            Message::TaskCompleted(id, title) => format!("Task #{} '{}' completed and moved to history", id, title),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::ActiveTasksHeader(count) => format!("Active tasks ({})", count),
            Message::NoActiveTasks => "No active tasks".to_string(),
            Message::NoOverdueTasks => "No overdue tasks".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task #{} without archiving it?", id),

            // === HISTORY MESSAGES ===
            Message::SucceededTaskUpdated(id) => format!("History record #{} updated", id),
            Message::SucceededTaskDeleted(id) => format!("History record #{} deleted", id),
            Message::SucceededTasksHeader(count) => format!("Completed tasks ({})", count),
            Message::NoSucceededTasks => "No completed tasks yet".to_string(),
            Message::HistoryUnavailable(cause) => format!("Completed tasks are unavailable: {}", cause),
            Message::ConfirmDeleteSucceededTask(id) => format!("Delete history record #{}?", id),

            // === CARD MESSAGES ===
            Message::CardCreated(id, word) => format!("Card #{} '{}' created", id, word),
            Message::CardUpdated(id) => format!("Card #{} updated", id),
            Message::CardDeleted(id) => format!("Card #{} deleted", id),
            Message::CardReviewed(id, attempts, successes) => {
                format!("Card #{} reviewed ({} of {} correct)", id, successes, attempts)
            }
            Message::CardsHeader(count) => format!("Cards ({})", count),
            Message::NoCards => "No cards yet".to_string(),
            Message::ConfirmDeleteCard(id) => format!("Delete card #{}?", id),

            // === REVIEW SESSION MESSAGES ===
            Message::ReviewSessionHeader(count) => format!("Reviewing {} card(s)", count),
            Message::ReviewWord(word) => format!("Word: {}", word),
            Message::ReviewTranslation(translation) => format!("Translation: {}", translation),
            Message::ReviewExample(example) => format!("Example: {}", example),
            Message::ReviewAnswerPrompt => "Your answer (Enter to reveal)".to_string(),
            Message::ReviewPrompt => "Did you remember it?".to_string(),
            Message::ReviewCorrect => "Correct!".to_string(),
            Message::ReviewIncorrect => "Wrong, it will come back soon".to_string(),
            Message::ReviewSessionFinished(reviewed, correct) => {
                format!("Session finished: {} of {} correct", correct, reviewed)
            }
            Message::NoCardsToReview => "Nothing to review".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigParseError(cause) => format!("Failed to parse configuration: {}", cause),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptReviewBatchSize => "Cards per review session".to_string(),
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database has pending migrations".to_string(),
            Message::MigrationHistoryHeader => "Applied migrations:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, cause) => format!("Migration v{} failed: {}", version, cause),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", s)
    }
}
