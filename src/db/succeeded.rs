use crate::libs::task::{SucceededTask, SucceededTaskDraft, Task};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_SUCCEEDED_TASK: &str =
    "INSERT INTO succeeded_tasks (source_task_id, title, description, priority, completed_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SUCCEEDED_TASKS: &str = "SELECT id, source_task_id, title, description, priority, completed_at FROM succeeded_tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_SOURCE_ID: &str = "WHERE source_task_id = ?1";
const ORDER_BY_COMPLETED: &str = "ORDER BY completed_at DESC, id DESC";
const UPDATE_SUCCEEDED_TASK: &str = "UPDATE succeeded_tasks SET title = ?2, description = ?3, priority = ?4 WHERE id = ?1";
const DELETE_SUCCEEDED_TASK: &str = "DELETE FROM succeeded_tasks WHERE id = ?1";

/// History of completed tasks, most recent first.
pub struct SucceededTasks<'c> {
    conn: &'c Connection,
}

impl<'c> SucceededTasks<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SucceededTasks { conn }
    }

    /// Records a snapshot of `task` completed at `completed_at`.
    pub fn insert(&self, task: &Task, completed_at: NaiveDateTime) -> rusqlite::Result<SucceededTask> {
        self.conn.execute(
            INSERT_SUCCEEDED_TASK,
            params![task.id, task.title, task.description, task.priority, completed_at],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    pub fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<SucceededTask>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_SUCCEEDED_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    pub fn list(&self) -> rusqlite::Result<Vec<SucceededTask>> {
        self.query(&format!("{} {}", SELECT_SUCCEEDED_TASKS, ORDER_BY_COMPLETED), params![])
    }

    /// Every completion recorded for the task that had `source_task_id`.
    pub fn list_by_source(&self, source_task_id: i64) -> rusqlite::Result<Vec<SucceededTask>> {
        self.query(
            &format!("{} {} {}", SELECT_SUCCEEDED_TASKS, WHERE_SOURCE_ID, ORDER_BY_COMPLETED),
            params![source_task_id],
        )
    }

    pub fn update(&self, id: i64, draft: &SucceededTaskDraft) -> rusqlite::Result<usize> {
        self.conn
            .execute(UPDATE_SUCCEEDED_TASK, params![id, draft.title, draft.description, draft.priority])
    }

    pub fn delete(&self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_SUCCEEDED_TASK, params![id])
    }

    fn query(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> rusqlite::Result<Vec<SucceededTask>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, Self::from_row)?;
        rows.collect()
    }

    fn from_row(row: &Row) -> rusqlite::Result<SucceededTask> {
        Ok(SucceededTask {
            id: row.get(0)?,
            source_task_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            priority: row.get(4)?,
            completed_at: row.get(5)?,
        })
    }
}
