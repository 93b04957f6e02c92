use async_trait::async_trait;

use models::item;

use super::domain::{ItemChanges, NewItem};
use crate::errors::ServiceError;

/// Storage seam for items. Implementations own transaction handling.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<item::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<item::Model>, ServiceError>;
    async fn create(&self, input: NewItem) -> Result<item::Model, ServiceError>;
    /// Apply `changes` to an existing item; `NotFound` if `id` is unknown.
    async fn update(&self, id: i32, changes: ItemChanges) -> Result<item::Model, ServiceError>;
    /// Returns false when no row had this id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        next_id: i32,
        items: BTreeMap<i32, item::Model>,
    }

    #[derive(Default)]
    pub struct MockItemRepository {
        state: Mutex<State>,
        fail_writes: AtomicBool,
    }

    impl MockItemRepository {
        /// Make every subsequent write fail as if the commit was rejected.
        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        fn lock(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock state poisoned".into()))
        }

        fn check_write(&self) -> Result<(), ServiceError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("simulated commit failure".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ItemRepository for MockItemRepository {
        async fn list(&self) -> Result<Vec<item::Model>, ServiceError> {
            Ok(self.lock()?.items.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<item::Model>, ServiceError> {
            Ok(self.lock()?.items.get(&id).cloned())
        }

        async fn create(&self, input: NewItem) -> Result<item::Model, ServiceError> {
            self.check_write()?;
            let mut state = self.lock()?;
            state.next_id += 1;
            let model = item::Model { id: state.next_id, name: input.name, description: input.description };
            state.items.insert(model.id, model.clone());
            Ok(model)
        }

        async fn update(&self, id: i32, changes: ItemChanges) -> Result<item::Model, ServiceError> {
            let mut state = self.lock()?;
            let Some(existing) = state.items.get(&id) else { return Err(ServiceError::not_found("Item")); };
            self.check_write()?;
            let mut updated = existing.clone();
            if let Some(name) = changes.name { updated.name = name; }
            if let Some(description) = changes.description { updated.description = description; }
            state.items.insert(id, updated.clone());
            Ok(updated)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut state = self.lock()?;
            if !state.items.contains_key(&id) { return Ok(false); }
            self.check_write()?;
            Ok(state.items.remove(&id).is_some())
        }
    }
}
