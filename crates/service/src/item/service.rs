use std::sync::Arc;
use tracing::{info, instrument};

use models::item;

use crate::errors::ServiceError;
use crate::item::domain::{CreateItemInput, UpdateItemInput};
use crate::item::repository::ItemRepository;

/// Application service encapsulating the item business rules.
/// Inputs are validated here, before any storage call is made.
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<item::Model>, ServiceError> {
        let items = self.repo.list().await?;
        info!(event = "items_listed", count = items.len(), "list items");
        Ok(items)
    }

    pub async fn get(&self, id: i32) -> Result<item::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Item"))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateItemInput) -> Result<item::Model, ServiceError> {
        let new = input.validate()?;
        let created = self.repo.create(new).await?;
        info!(event = "item_created", id = created.id, name = %created.name, "created item");
        Ok(created)
    }

    /// Partial update: only fields present in `input` change.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateItemInput) -> Result<item::Model, ServiceError> {
        let changes = input.validate()?;
        let updated = self.repo.update(id, changes).await?;
        info!(event = "item_updated", id = updated.id, "updated item");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Item"));
        }
        info!(event = "item_deleted", id, "deleted item");
        Ok(())
    }
}
