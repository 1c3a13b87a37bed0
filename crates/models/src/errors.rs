use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),
    /// An entity could not be projected into its wire shape. Never caused by
    /// caller input.
    #[error("mapping error: {0}")]
    Mapping(String),
}

impl ModelError {
    pub fn missing(entity: &str, field: &str) -> Self {
        Self::Mapping(format!("{entity} has no {field}"))
    }
}
