//! Item store for recall-flow.
//!
//! SQLite tables for active tasks, completed tasks and cards, with versioned
//! migrations. Repositories borrow a `&Connection`; a `rusqlite::Transaction`
//! derefs to one, so the same repository code runs inside
//! [`Db::with_transaction`](db::Db::with_transaction) and outside it.
//!
//! ```rust,no_run
//! use recall_flow::db::{db::Db, tasks::Tasks, Repository};
//!
//! let db = Db::open_in_memory()?;
//! let tasks = Tasks::new(&db.conn).list_ordered()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::error::Entity;
use chrono::NaiveDateTime;

/// Connection handle and transaction helper.
pub mod db;

/// Schema versioning applied when the database is opened.
pub mod migrations;

/// Cards and their review counters.
pub mod cards;

/// History of completed tasks.
pub mod succeeded;

/// Active tasks.
pub mod tasks;

/// Storage operations shared by every kind of reviewable item.
///
/// Counts returned by `update` and `delete` are affected rows; zero means the
/// id does not exist.
pub trait Repository {
    type Item;
    type Draft;

    /// Reported in not-found errors.
    const ENTITY: Entity;

    /// Persists a new item and returns it as stored, id included.
    fn insert(&self, draft: &Self::Draft, now: NaiveDateTime) -> rusqlite::Result<Self::Item>;

    fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<Self::Item>>;

    /// All items in the repository's default order.
    fn list_ordered(&self) -> rusqlite::Result<Vec<Self::Item>>;

    /// Replaces the mutable fields of `id`.
    fn update(&self, id: i64, draft: &Self::Draft, now: NaiveDateTime) -> rusqlite::Result<usize>;

    fn delete(&self, id: i64) -> rusqlite::Result<usize>;
}
