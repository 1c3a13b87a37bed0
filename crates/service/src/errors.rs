use models::{FieldError, ModelError, ValidationErrors};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Every failing field, in declaration order.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    /// Entity/DTO projection failed. Internal, never caused by caller input.
    #[error("mapping error: {0}")]
    Mapping(String),
}

impl ServiceError {
    pub fn therapist_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("Therapist with id: {id} is not found."))
    }

    pub fn clients_not_found(therapist_id: Uuid) -> Self {
        Self::NotFound(format!("No clients found with therapist id: {therapist_id}."))
    }

    pub fn client_not_found(client_id: Uuid) -> Self {
        Self::NotFound(format!("No client found with id: {client_id}."))
    }

    pub fn no_client_for_therapist(therapist_id: Uuid) -> Self {
        Self::NotFound(format!("No client found with therapist id: {therapist_id}."))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errors) => Self::Validation(errors.into_errors()),
            ModelError::Mapping(msg) => Self::Mapping(msg),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e.into_errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_keeps_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "must not be blank");
        errors.push("email", "must not be blank");
        let e = ServiceError::from(ModelError::from(errors));
        match e {
            ServiceError::Validation(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, ["name", "email"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn not_found_messages_name_the_id() {
        let id = Uuid::nil();
        assert_eq!(
            ServiceError::therapist_not_found(id).to_string(),
            format!("Therapist with id: {id} is not found.")
        );
    }
}
