#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use recall_flow::libs::date::parse_timestamp;
    use recall_flow::libs::priority::Priority;
    use recall_flow::libs::scheduler::{is_overdue, next_batch, overdue, review_order, Scheduled};
    use recall_flow::libs::task::Task;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        reviewed: Option<NaiveDateTime>,
    }

    impl Scheduled for Item {
        fn id(&self) -> i64 {
            self.id
        }

        fn schedule_key(&self) -> Option<NaiveDateTime> {
            self.reviewed
        }
    }

    fn at(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    fn item(id: i64, reviewed: Option<&str>) -> Item {
        Item {
            id,
            reviewed: reviewed.map(at),
        }
    }

    fn task(id: i64, due: &str) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: None,
            created_at: at("2030-01-01T00:00"),
            next_review_date: at(due),
            priority: Priority::None,
        }
    }

    fn ids<T: Scheduled>(items: &[T]) -> Vec<i64> {
        items.iter().map(Scheduled::id).collect()
    }

    #[test]
    fn test_least_recently_reviewed_first() {
        let items = vec![
            item(3, Some("2030-01-03T10:00")),
            item(2, Some("2030-01-02T10:00")),
            item(1, Some("2030-01-01T10:00")),
        ];

        assert_eq!(ids(&review_order(items)), vec![1, 2, 3]);
    }

    #[test]
    fn test_never_reviewed_then_yesterday_then_today() {
        let a = item(1, None);
        let b = item(2, Some("2030-01-01T10:00"));
        let c = item(3, Some("2030-01-02T10:00"));

        assert_eq!(review_order(vec![c.clone(), b.clone(), a.clone()]), vec![a, b, c]);
    }

    #[test]
    fn test_never_reviewed_come_first() {
        let items = vec![
            item(1, Some("2030-01-01T10:00")),
            item(5, None),
            item(2, None),
        ];

        assert_eq!(ids(&review_order(items)), vec![2, 5, 1]);
    }

    #[test]
    fn test_ties_break_on_id() {
        let items = vec![
            item(9, Some("2030-01-01T10:00")),
            item(4, Some("2030-01-01T10:00")),
            item(7, Some("2030-01-01T10:00")),
        ];

        assert_eq!(ids(&review_order(items)), vec![4, 7, 9]);
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let items = vec![
            item(2, Some("2030-01-02T10:00")),
            item(3, None),
            item(1, Some("2030-01-02T10:00")),
        ];

        let once = review_order(items);
        let twice = review_order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_next_batch_limits() {
        let items: Vec<Item> = (1..=5).map(|id| item(id, None)).collect();

        assert_eq!(ids(&next_batch(items.clone(), 3)), vec![1, 2, 3]);
        assert_eq!(next_batch(items.clone(), 50).len(), 5);
        assert!(next_batch(items, 0).is_empty());
        assert!(next_batch(Vec::<Item>::new(), 3).is_empty());
    }

    #[test]
    fn test_overdue_is_strictly_before_now() {
        let now = at("2030-01-01T12:00");

        assert!(is_overdue(&task(1, "2030-01-01T11:59:59"), now));
        assert!(!is_overdue(&task(2, "2030-01-01T12:00"), now));
        assert!(!is_overdue(&task(3, "2030-01-02T00:00"), now));
    }

    #[test]
    fn test_items_without_due_date_never_overdue() {
        let now = at("2030-01-01T12:00");
        assert!(!is_overdue(&item(1, Some("2000-01-01T00:00")), now));
    }

    #[test]
    fn test_overdue_filter_keeps_order() {
        let now = at("2030-01-10T00:00");
        let tasks = vec![
            task(1, "2030-01-01T00:00"),
            task(2, "2030-02-01T00:00"),
            task(3, "2030-01-05T00:00"),
        ];

        assert_eq!(ids(&overdue(tasks, now)), vec![1, 3]);
    }

    #[test]
    fn test_tasks_order_by_due_date() {
        let tasks = vec![task(1, "2030-01-03T00:00"), task(2, "2030-01-01T00:00")];
        assert_eq!(ids(&review_order(tasks)), vec![2, 1]);
    }
}
