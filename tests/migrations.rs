#[cfg(test)]
mod tests {
    use recall_flow::db::db::Db;
    use recall_flow::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("migrations.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn table_exists(conn: &rusqlite::Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            > 0
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_unversioned(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert!(!table_exists(&conn, "tasks"));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
        for table in ["tasks", "succeeded_tasks", "cards"] {
            assert!(table_exists(&db.conn, table), "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_tasks_and_history", "add_priority", "add_cards"]);
        for (i, (version, _, applied_at)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(!applied_at.is_empty());
            assert!(manager.is_migration_applied(&conn, *version).unwrap());
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let first = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let second = get_db_version(&conn).unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), first as usize);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_partial_schema_is_upgraded(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE migrations (
                id INTEGER PRIMARY KEY,
                version INTEGER NOT NULL UNIQUE,
                name TEXT NOT NULL,
                applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );
            CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                created_at TIMESTAMP NOT NULL,
                next_review_date TIMESTAMP NOT NULL
            );
            CREATE TABLE succeeded_tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source_task_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                completed_at TIMESTAMP NOT NULL
            );
            INSERT INTO tasks (title, created_at, next_review_date)
                VALUES ('old task', '2029-12-01 08:00:00', '2030-01-01 08:00:00');
            INSERT INTO migrations (version, name) VALUES (1, 'create_tasks_and_history');",
        )
        .unwrap();
        assert!(needs_migration(&conn).unwrap());

        MigrationManager::new().run_migrations(&mut conn).unwrap();

        assert!(!needs_migration(&conn).unwrap());
        let priority: i64 = conn
            .query_row("SELECT priority FROM tasks WHERE title = 'old task'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(priority, 0);
        assert!(table_exists(&conn, "cards"));
    }
}
