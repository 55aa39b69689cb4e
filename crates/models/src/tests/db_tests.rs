use crate::db::{connect_in_memory, connect_with_config, in_memory_config};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

/// In-memory SQLite answers a trivial query
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&in_memory_config()).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Migrations create the company table and can be re-applied
#[tokio::test]
async fn test_migrations_create_company_table() -> Result<()> {
    let db = connect_in_memory().await?;
    crate::db::migrate(&db).await?;

    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'company'".to_string(),
    );
    let row = db.query_one(stmt).await?;
    assert!(row.is_some());
    Ok(())
}
