/// Every piece of user-facing text in recall-flow.
///
/// Variants carry the values interpolated into the rendered text. The text
/// itself lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === VALIDATION MESSAGES ===
    TitleRequired,
    TitleTooLong(usize), // max length
    WordRequired,
    WordTooLong(usize), // max length
    TranslationRequired,
    InvalidDate(String),
    InvalidPriority(String),

    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, title
    TaskUpdated(i64),
    TaskRescheduled(i64, String), // id, new due date
    TaskCompleted(i64, String),   // id, title
    TaskDeleted(i64),
    ActiveTasksHeader(usize),
    NoActiveTasks,
    NoOverdueTasks,
    ConfirmDeleteTask(i64),

    // === HISTORY MESSAGES ===
    SucceededTaskUpdated(i64),
    SucceededTaskDeleted(i64),
    SucceededTasksHeader(usize),
    NoSucceededTasks,
    HistoryUnavailable(String), // cause
    ConfirmDeleteSucceededTask(i64),

    // === CARD MESSAGES ===
    CardCreated(i64, String), // id, word
    CardUpdated(i64),
    CardDeleted(i64),
    CardReviewed(i64, u32, u32), // id, attempts, successes
    CardsHeader(usize),
    NoCards,
    ConfirmDeleteCard(i64),

    // === REVIEW SESSION MESSAGES ===
    ReviewSessionHeader(usize),
    ReviewWord(String),
    ReviewTranslation(String),
    ReviewExample(String),
    ReviewAnswerPrompt,
    ReviewPrompt,
    ReviewCorrect,
    ReviewIncorrect,
    ReviewSessionFinished(usize, usize), // reviewed, correct
    NoCardsToReview,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    PromptDatabasePath,
    PromptReviewBatchSize,
    DatabaseOpened(String),

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistoryHeader,
    MigrationHistoryEntry(u32, String, String), // version, name, applied_at
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
