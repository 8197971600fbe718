#[cfg(test)]
mod tests {
    use recall_flow::db::db::Db;
    use recall_flow::libs::card::CardRequest;
    use recall_flow::libs::error::{Entity, RecallError};
    use recall_flow::libs::lifecycle::Lifecycle;
    use recall_flow::libs::messages::Message;
    use recall_flow::libs::priority::Priority;
    use rusqlite::params;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CardTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for CardTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("cards.db")).unwrap();
            CardTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn set_last_reviewed(db: &Db, id: i64, at: &str) {
        db.conn
            .execute("UPDATE cards SET last_reviewed = ?2 WHERE id = ?1", params![id, at])
            .unwrap();
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_card_crud(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);

        let mut request = CardRequest::new("Haus", "house");
        request.example = Some("Das Haus ist alt.".to_string());
        let card = engine.create_card(&request).unwrap();
        assert_eq!(card.word, "Haus");
        assert_eq!(card.attempts, 0);
        assert_eq!(card.successes, 0);
        assert_eq!(card.last_reviewed, None);
        assert_eq!(card.created_at, card.updated_at);

        let mut edit = CardRequest::new("das Haus", "the house");
        edit.priority = Some("low".to_string());
        let edited = engine.edit_card(card.id, &edit).unwrap();
        assert_eq!(edited.word, "das Haus");
        assert_eq!(edited.translation, "the house");
        assert_eq!(edited.example, None);
        assert_eq!(edited.priority, Priority::Low);
        assert_eq!(edited.created_at, card.created_at);

        engine.delete_card(card.id).unwrap();
        let err = engine.get_card(card.id).unwrap_err();
        assert!(matches!(err, RecallError::NotFound { entity: Entity::Card, .. }));
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_card_validation(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);

        let err = engine.create_card(&CardRequest::new(" ", "house")).unwrap_err();
        assert!(matches!(err, RecallError::Validation(Message::WordRequired)));

        let err = engine.create_card(&CardRequest::new("Haus", "  ")).unwrap_err();
        assert!(matches!(err, RecallError::Validation(Message::TranslationRequired)));

        assert!(engine.list_cards().unwrap().is_empty());
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_review_updates_counters(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);
        let card = engine.create_card(&CardRequest::new("Baum", "tree")).unwrap();
        assert_eq!(card.success_rate(), None);

        let after_hit = engine.review_card(card.id, true).unwrap();
        assert_eq!((after_hit.attempts, after_hit.successes), (1, 1));
        assert!(after_hit.last_reviewed.is_some());

        let after_miss = engine.review_card(card.id, false).unwrap();
        assert_eq!((after_miss.attempts, after_miss.successes), (2, 1));

        let after_hit = engine.review_card(card.id, true).unwrap();
        assert_eq!((after_hit.attempts, after_hit.successes), (3, 2));
        assert_eq!(after_hit.success_rate(), Some(67));
        assert!(after_hit.successes <= after_hit.attempts);
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_counters_never_decrease(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);
        let card = engine.create_card(&CardRequest::new("Wasser", "water")).unwrap();

        let outcomes = [false, false, true, false, true, true, false, true];
        let (mut attempts, mut successes) = (card.attempts, card.successes);
        for success in outcomes {
            let reviewed = engine.review_card(card.id, success).unwrap();
            assert_eq!(reviewed.attempts, attempts + 1);
            assert!(reviewed.successes >= successes);
            assert!(reviewed.successes <= reviewed.attempts);
            attempts = reviewed.attempts;
            successes = reviewed.successes;
        }

        assert_eq!(attempts, 8);
        assert_eq!(successes, 4);
        assert_eq!(engine.get_card(card.id).unwrap().success_rate(), Some(50));
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_edit_keeps_review_statistics(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);
        let card = engine.create_card(&CardRequest::new("Katze", "cat")).unwrap();
        let reviewed = engine.review_card(card.id, false).unwrap();

        let edited = engine.edit_card(card.id, &CardRequest::new("die Katze", "the cat")).unwrap();
        assert_eq!(edited.attempts, 1);
        assert_eq!(edited.successes, 0);
        assert_eq!(edited.last_reviewed, reviewed.last_reviewed);
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_review_missing_card(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);

        assert!(engine.review_card(42, true).unwrap_err().is_not_found());
        assert!(engine.edit_card(42, &CardRequest::new("a", "b")).unwrap_err().is_not_found());
        assert!(engine.delete_card(42).unwrap_err().is_not_found());
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_review_batch_order(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);
        let recent = engine.create_card(&CardRequest::new("eins", "one")).unwrap();
        let old = engine.create_card(&CardRequest::new("zwei", "two")).unwrap();
        let fresh = engine.create_card(&CardRequest::new("drei", "three")).unwrap();
        let fresher = engine.create_card(&CardRequest::new("vier", "four")).unwrap();

        set_last_reviewed(&ctx.db, recent.id, "2030-01-03 10:00:00");
        set_last_reviewed(&ctx.db, old.id, "2030-01-01 10:00:00");

        let ids: Vec<i64> = engine.review_batch(10).unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![fresh.id, fresher.id, old.id, recent.id]);

        let ids: Vec<i64> = engine.review_batch(2).unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![fresh.id, fresher.id]);

        assert!(engine.review_batch(0).unwrap().is_empty());
    }

    #[test_context(CardTestContext)]
    #[test]
    fn test_reviewed_card_moves_to_back(ctx: &mut CardTestContext) {
        let engine = Lifecycle::new(&ctx.db);
        let first = engine.create_card(&CardRequest::new("rot", "red")).unwrap();
        let second = engine.create_card(&CardRequest::new("blau", "blue")).unwrap();

        engine.review_card(first.id, true).unwrap();

        let ids: Vec<i64> = engine.list_cards().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
