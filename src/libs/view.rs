use super::card::Card;
use super::date::{display, display_opt};
use super::scheduler::is_overdue;
use super::task::{SucceededTask, Task};
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Active tasks; overdue ones are flagged with `!`.
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "", "PRIORITY", "CREATED"]);
        for task in tasks {
            let flag = if is_overdue(task, now) { "!" } else { "" };
            table.add_row(row![
                task.id,
                task.title,
                task.description.as_deref().unwrap_or(""),
                display(&task.next_review_date),
                flag,
                task.priority,
                display(&task.created_at)
            ]);
        }
        table.printstd();
    }

    pub fn succeeded_tasks(records: &[SucceededTask]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK ID", "TITLE", "DESCRIPTION", "PRIORITY", "COMPLETED"]);
        for record in records {
            table.add_row(row![
                record.id,
                record.source_task_id,
                record.title,
                record.description.as_deref().unwrap_or(""),
                record.priority,
                display(&record.completed_at)
            ]);
        }
        table.printstd();
    }

    pub fn cards(cards: &[Card]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "WORD", "TRANSLATION", "ATTEMPTS", "CORRECT", "RATE", "LAST REVIEWED"]);
        for card in cards {
            let rate = card.success_rate().map_or_else(|| "-".to_string(), |rate| format!("{}%", rate));
            table.add_row(row![
                card.id,
                card.word,
                card.translation,
                card.attempts,
                card.successes,
                rate,
                display_opt(card.last_reviewed.as_ref())
            ]);
        }
        table.printstd();
    }
}
