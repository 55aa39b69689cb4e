use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No company stored under `id`. The only domain failure callers are expected to recover from.
    #[error("{message}")]
    NotFound { id: i64, message: String },
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id, message: format!("Company with id {id} not found") }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}
