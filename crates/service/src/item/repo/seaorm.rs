use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionError, TransactionTrait,
};
use tracing::{debug, error};

use models::item::{self, Entity as ItemEntity};

use crate::errors::ServiceError;
use crate::item::domain::{ItemChanges, NewItem};
use crate::item::repository::ItemRepository;

/// SeaORM-backed repository. Each write runs in its own transaction, which
/// is committed when the closure returns `Ok` and rolled back otherwise.
///
/// SQLite transactions are deferred: the first statement of every write
/// transaction must itself be a write, so the lock is taken through the busy
/// handler instead of being upgraded from a read lock (which fails with
/// `SQLITE_BUSY` when two transactions race).
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Unwrap a transaction outcome, logging storage failures that caused a rollback.
fn rolled_back(op: &'static str, e: TransactionError<ServiceError>) -> ServiceError {
    let err = match e {
        TransactionError::Connection(e) => e.into(),
        TransactionError::Transaction(e) => e,
    };
    if err.is_storage() {
        error!(event = "storage_rollback", op, error = %err, "transaction rolled back");
    }
    err
}

#[async_trait::async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn list(&self) -> Result<Vec<item::Model>, ServiceError> {
        let rows = ItemEntity::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<item::Model>, ServiceError> {
        let found = ItemEntity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn create(&self, input: NewItem) -> Result<item::Model, ServiceError> {
        self.db
            .transaction::<_, item::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    let created = item::create(txn, &input.name, &input.description).await?;
                    debug!(id = created.id, "item inserted");
                    Ok(created)
                })
            })
            .await
            .map_err(|e| rolled_back("create", e))
    }

    async fn update(&self, id: i32, changes: ItemChanges) -> Result<item::Model, ServiceError> {
        if changes.is_empty() {
            return self.get(id).await?.ok_or_else(|| ServiceError::not_found("Item"));
        }
        self.db
            .transaction::<_, item::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    // UPDATE first: takes the write lock before anything is read
                    let mut stmt = ItemEntity::update_many().filter(item::Column::Id.eq(id));
                    if let Some(name) = changes.name {
                        stmt = stmt.col_expr(item::Column::Name, Expr::value(name));
                    }
                    if let Some(description) = changes.description {
                        stmt = stmt.col_expr(item::Column::Description, Expr::value(description));
                    }
                    let res = stmt.exec(txn).await?;
                    if res.rows_affected == 0 {
                        return Err(ServiceError::not_found("Item"));
                    }
                    let updated = ItemEntity::find_by_id(id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("Item"))?;
                    Ok(updated)
                })
            })
            .await
            .map_err(|e| rolled_back("update", e))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        self.db
            .transaction::<_, bool, ServiceError>(|txn| {
                Box::pin(async move {
                    let res = ItemEntity::delete_by_id(id).exec(txn).await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await
            .map_err(|e| rolled_back("delete", e))
    }
}
