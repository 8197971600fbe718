//! Due-date and review-order rules.
//!
//! Everything here is pure: callers pass `now` in and get filtered or sorted
//! collections back. The policy is least-recently-reviewed first; choosing the
//! next interval is left to whoever sets the due date.

use chrono::NaiveDateTime;

/// Default number of cards offered per review session.
pub const REVIEW_BATCH_SIZE: usize = 10;

/// Anything that can be placed in a review queue.
pub trait Scheduled {
    fn id(&self) -> i64;

    /// Sort key for the review queue. `None` means never reviewed and sorts first.
    fn schedule_key(&self) -> Option<NaiveDateTime>;

    /// Moment after which the item counts as overdue, if it has one.
    fn due_date(&self) -> Option<NaiveDateTime> {
        None
    }
}

pub fn is_overdue<T: Scheduled>(item: &T, now: NaiveDateTime) -> bool {
    item.due_date().is_some_and(|due| due < now)
}

/// Never-reviewed items first, then oldest key first, ties by id.
pub fn review_order<T: Scheduled>(mut items: Vec<T>) -> Vec<T> {
    // Option orders None before Some, which is exactly the never-reviewed rule.
    items.sort_by_key(|item| (item.schedule_key(), item.id()));
    items
}

/// The first `limit` items in review order.
pub fn next_batch<T: Scheduled>(items: Vec<T>, limit: usize) -> Vec<T> {
    let mut ordered = review_order(items);
    ordered.truncate(limit);
    ordered
}

/// Overdue items, keeping the input order.
pub fn overdue<T: Scheduled>(items: Vec<T>, now: NaiveDateTime) -> Vec<T> {
    items.into_iter().filter(|item| is_overdue(item, now)).collect()
}
