use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Only the empty string is rejected; whitespace and length are stored as given.
pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.is_empty() {
        return Err(errors::ModelError::Validation("name is required".into()));
    }
    Ok(())
}

/// Validate and insert a new item; `id` is assigned by the database.
pub async fn create<C: ConnectionTrait>(db: &C, name: &str, description: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
