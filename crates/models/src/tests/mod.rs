
/// Transaction commit/rollback behaviour
pub mod transaction_tests;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, in_memory_config};

/// Fresh in-memory database with migrations applied
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&in_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_connection_ping() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    crate::db::test_connection(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::up(&db, None).await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert_eq!(applied.len(), 1);
    Ok(())
}
