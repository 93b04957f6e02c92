use serde::Deserialize;

use models::item;

use crate::errors::ServiceError;

/// Request body of `POST /items`. `name` is optional here so that a missing
/// field surfaces as a validation error instead of a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body of `PUT /items/{id}`; absent (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

/// Validated partial update; at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl CreateItemInput {
    pub fn validate(self) -> Result<NewItem, ServiceError> {
        let Some(name) = self.name else {
            return Err(ServiceError::Validation("Name is required".into()));
        };
        item::validate_name(&name)?;
        let description = self.description.unwrap_or_default();
        Ok(NewItem { name, description })
    }
}

impl UpdateItemInput {
    pub fn validate(self) -> Result<ItemChanges, ServiceError> {
        let changes = ItemChanges { name: self.name, description: self.description };
        if changes.is_empty() {
            return Err(ServiceError::Validation("No data provided".into()));
        }
        if let Some(name) = &changes.name {
            item::validate_name(name)?;
        }
        Ok(changes)
    }
}
