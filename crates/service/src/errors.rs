use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Storage-side failure, as opposed to a rejected request.
    pub fn is_storage(&self) -> bool {
        matches!(self, ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
