//! State transitions for tasks, completed tasks and cards.
//!
//! ```text
//! Task:          Active --edit/reschedule--> Active
//!                Active --complete--> (removed) + SucceededTask
//!                Active --delete--> (removed)
//! SucceededTask: Created --edit--> Created, Created --delete--> (removed)
//! Card:          Active --edit/review--> Active, Active --delete--> (removed)
//! ```
//!
//! Every operation validates its input before touching storage and reports
//! a missing id as [`RecallError::NotFound`] without writing anything.
//! Multi-statement operations run inside [`Db::with_transaction`], so a
//! failure part-way leaves the store as it was.

use super::card::{Card, CardRequest};
use super::date::{now, parse_timestamp};
use super::error::{Entity, RecallError, Result};
use super::messages::Message;
use super::scheduler;
use super::task::{SucceededTask, SucceededTaskRequest, Task, TaskRequest};
use crate::db::cards::Cards;
use crate::db::db::Db;
use crate::db::succeeded::SucceededTasks;
use crate::db::tasks::Tasks;
use crate::db::Repository;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Active tasks together with the completed ones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overview {
    pub tasks: Vec<Task>,
    pub succeeded_tasks: Vec<SucceededTask>,
}

pub struct Lifecycle<'db> {
    db: &'db Db,
}

impl<'db> Lifecycle<'db> {
    pub fn new(db: &'db Db) -> Self {
        Lifecycle { db }
    }

    // === TASKS ===

    pub fn create_task(&self, request: &TaskRequest) -> Result<Task> {
        let draft = request.validate()?;
        let task = create(&Tasks::new(&self.db.conn), &draft)?;
        info!(task_id = task.id, due = %task.next_review_date, "task created");
        Ok(task)
    }

    /// Replaces title, description, due date and priority. `created_at` is
    /// only replaced when the request carries one.
    pub fn edit_task(&self, id: i64, request: &TaskRequest) -> Result<Task> {
        let draft = request.validate()?;
        let task = self.db.with_transaction(|tx| edit(&Tasks::new(tx), id, &draft))?;
        info!(task_id = id, "task edited");
        Ok(task)
    }

    pub fn reschedule_task(&self, id: i64, next_review_date: &str) -> Result<Task> {
        let next_review_date = parse_timestamp(next_review_date)?;
        let task = self.db.with_transaction(|tx| -> Result<Task> {
            let tasks = Tasks::new(tx);
            if tasks.update_next_review_date(id, next_review_date)? == 0 {
                return Err(RecallError::not_found(Entity::Task, id));
            }
            fetch(&tasks, id)
        })?;
        info!(task_id = id, due = %next_review_date, "task rescheduled");
        Ok(task)
    }

    /// Moves a task into history.
    ///
    /// The history insert and the task delete share one transaction: either
    /// both are committed or neither is. Title, description and priority are
    /// copied into the history record.
    pub fn complete_task(&self, id: i64) -> Result<SucceededTask> {
        let record = self.db.with_transaction(|tx| -> Result<SucceededTask> {
            let tasks = Tasks::new(tx);
            let task = fetch(&tasks, id)?;
            let record = SucceededTasks::new(tx).insert(&task, now())?;
            if tasks.delete(id)? == 0 {
                return Err(RecallError::not_found(Entity::Task, id));
            }
            Ok(record)
        })?;
        info!(task_id = id, history_id = record.id, "task completed");
        Ok(record)
    }

    /// Removes a task without archiving it.
    pub fn delete_task(&self, id: i64) -> Result<()> {
        remove(&Tasks::new(&self.db.conn), id)?;
        info!(task_id = id, "task deleted");
        Ok(())
    }

    pub fn get_task(&self, id: i64) -> Result<Task> {
        fetch(&Tasks::new(&self.db.conn), id)
    }

    /// Active tasks, earliest due first.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(Tasks::new(&self.db.conn).list_ordered()?)
    }

    pub fn overdue_tasks(&self, now: NaiveDateTime) -> Result<Vec<Task>> {
        Ok(scheduler::overdue(self.list_tasks()?, now))
    }

    /// Active and completed tasks in one read.
    ///
    /// A failure to read history is logged and replaced by an empty list so
    /// the active tasks still reach the caller. Failures reading active tasks
    /// are returned as usual.
    pub fn overview(&self) -> Result<Overview> {
        let tasks = self.list_tasks()?;
        let succeeded_tasks = self.list_succeeded_tasks().unwrap_or_else(|e| {
            warn!("{}", Message::HistoryUnavailable(e.to_string()));
            Vec::new()
        });
        debug!(active = tasks.len(), completed = succeeded_tasks.len(), "overview loaded");
        Ok(Overview { tasks, succeeded_tasks })
    }

    // === HISTORY ===

    /// Completed tasks, most recent first.
    pub fn list_succeeded_tasks(&self) -> Result<Vec<SucceededTask>> {
        Ok(SucceededTasks::new(&self.db.conn).list()?)
    }

    pub fn get_succeeded_task(&self, id: i64) -> Result<SucceededTask> {
        SucceededTasks::new(&self.db.conn)
            .get_by_id(id)?
            .ok_or_else(|| RecallError::not_found(Entity::SucceededTask, id))
    }

    pub fn edit_succeeded_task(&self, id: i64, request: &SucceededTaskRequest) -> Result<SucceededTask> {
        let draft = request.validate()?;
        let record = self.db.with_transaction(|tx| -> Result<SucceededTask> {
            let history = SucceededTasks::new(tx);
            if history.update(id, &draft)? == 0 {
                return Err(RecallError::not_found(Entity::SucceededTask, id));
            }
            history.get_by_id(id)?.ok_or_else(|| RecallError::not_found(Entity::SucceededTask, id))
        })?;
        info!(history_id = id, "history record edited");
        Ok(record)
    }

    pub fn delete_succeeded_task(&self, id: i64) -> Result<()> {
        if SucceededTasks::new(&self.db.conn).delete(id)? == 0 {
            return Err(RecallError::not_found(Entity::SucceededTask, id));
        }
        info!(history_id = id, "history record deleted");
        Ok(())
    }

    // === CARDS ===

    pub fn create_card(&self, request: &CardRequest) -> Result<Card> {
        let draft = request.validate()?;
        let card = create(&Cards::new(&self.db.conn), &draft)?;
        info!(card_id = card.id, "card created");
        Ok(card)
    }

    pub fn edit_card(&self, id: i64, request: &CardRequest) -> Result<Card> {
        let draft = request.validate()?;
        let card = self.db.with_transaction(|tx| edit(&Cards::new(tx), id, &draft))?;
        info!(card_id = id, "card edited");
        Ok(card)
    }

    pub fn delete_card(&self, id: i64) -> Result<()> {
        remove(&Cards::new(&self.db.conn), id)?;
        info!(card_id = id, "card deleted");
        Ok(())
    }

    pub fn get_card(&self, id: i64) -> Result<Card> {
        fetch(&Cards::new(&self.db.conn), id)
    }

    /// Cards in review order.
    pub fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(Cards::new(&self.db.conn).list_ordered()?)
    }

    /// Records one review attempt. The card stays active.
    pub fn review_card(&self, id: i64, success: bool) -> Result<Card> {
        let card = self.db.with_transaction(|tx| -> Result<Card> {
            let cards = Cards::new(tx);
            if cards.record_review(id, success, now())? == 0 {
                return Err(RecallError::not_found(Entity::Card, id));
            }
            fetch(&cards, id)
        })?;
        info!(card_id = id, success, attempts = card.attempts, successes = card.successes, "card reviewed");
        Ok(card)
    }

    /// The next `limit` cards to review.
    pub fn review_batch(&self, limit: usize) -> Result<Vec<Card>> {
        Ok(scheduler::next_batch(self.list_cards()?, limit))
    }
}

fn create<R: Repository>(repo: &R, draft: &R::Draft) -> Result<R::Item> {
    Ok(repo.insert(draft, now())?)
}

fn fetch<R: Repository>(repo: &R, id: i64) -> Result<R::Item> {
    repo.get_by_id(id)?.ok_or_else(|| RecallError::not_found(R::ENTITY, id))
}

fn edit<R: Repository>(repo: &R, id: i64, draft: &R::Draft) -> Result<R::Item> {
    if repo.update(id, draft, now())? == 0 {
        return Err(RecallError::not_found(R::ENTITY, id));
    }
    fetch(repo, id)
}

fn remove<R: Repository>(repo: &R, id: i64) -> Result<()> {
    if repo.delete(id)? == 0 {
        return Err(RecallError::not_found(R::ENTITY, id));
    }
    Ok(())
}
