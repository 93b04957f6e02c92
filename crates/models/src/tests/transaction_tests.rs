use crate::item;
use sea_orm::{EntityTrait, TransactionTrait};
use anyhow::Result;

use super::setup_test_db;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = item::create(&txn, "committed", "").await?;
    txn.commit().await?;

    let found = item::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|m| m.name), Some("committed".to_string()));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = item::create(&txn, "rolled back", "").await?;
    txn.rollback().await?;

    let found = item::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_none());
    Ok(())
}
