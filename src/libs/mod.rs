//! Domain logic of recall-flow.
//!
//! - `task`, `card`, `priority`, `date`: records and input validation
//! - `scheduler`: pure due-date and review-order rules
//! - `lifecycle`: the operations that move items between states
//! - `config`, `messages`, `view`: configuration and terminal output
//!
//! ```rust,no_run
//! use recall_flow::db::db::Db;
//! use recall_flow::libs::lifecycle::Lifecycle;
//! use recall_flow::libs::task::TaskRequest;
//!
//! let db = Db::open_in_memory()?;
//! let engine = Lifecycle::new(&db);
//! let task = engine.create_task(&TaskRequest::new("Review Go", "2024-01-10T09:00:00"))?;
//! engine.complete_task(task.id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod card;
pub mod config;
pub mod date;
pub mod error;
pub mod lifecycle;
pub mod messages;
pub mod priority;
pub mod scheduler;
pub mod task;
pub mod view;
