use super::Repository;
use crate::libs::error::Entity;
use crate::libs::task::{Task, TaskDraft};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, created_at, next_review_date, priority) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASKS: &str = "SELECT id, title, description, created_at, next_review_date, priority FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_DUE: &str = "ORDER BY next_review_date, id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, next_review_date = ?4, priority = ?5, created_at = COALESCE(?6, created_at) WHERE id = ?1";
const UPDATE_NEXT_REVIEW_DATE: &str = "UPDATE tasks SET next_review_date = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks<'c> {
    conn: &'c Connection,
}

impl<'c> Tasks<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Tasks { conn }
    }

    /// Moves the due date and nothing else.
    pub fn update_next_review_date(&self, id: i64, next_review_date: NaiveDateTime) -> rusqlite::Result<usize> {
        self.conn.execute(UPDATE_NEXT_REVIEW_DATE, params![id, next_review_date])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            created_at: row.get(3)?,
            next_review_date: row.get(4)?,
            priority: row.get(5)?,
        })
    }
}

impl Repository for Tasks<'_> {
    type Item = Task;
    type Draft = TaskDraft;

    const ENTITY: Entity = Entity::Task;

    fn insert(&self, draft: &TaskDraft, now: NaiveDateTime) -> rusqlite::Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![draft.title, draft.description, now, draft.next_review_date, draft.priority],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    fn list_ordered(&self) -> rusqlite::Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_DUE))?;
        let task_iter = stmt.query_map([], Self::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn update(&self, id: i64, draft: &TaskDraft, _now: NaiveDateTime) -> rusqlite::Result<usize> {
        self.conn.execute(
            UPDATE_TASK,
            params![id, draft.title, draft.description, draft.next_review_date, draft.priority, draft.created_at],
        )
    }

    fn delete(&self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_TASK, params![id])
    }
}
