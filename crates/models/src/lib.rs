//! Entities, wire DTOs, field validation and entity/DTO mapping for the
//! therapist service.
//!
//! - `therapist` / `client`: entities plus their request, update and response shapes.
//! - `validation`: field-level rules reporting every failing field at once.
//! - `mapping`: explicit conversions between DTOs and entities, including the
//!   partial-update merge.

pub mod client;
pub mod errors;
pub mod mapping;
pub mod therapist;
pub mod validation;

pub use client::{Client, ClientRequest, ClientResponse, ClientUpdateRequest, Gender};
pub use errors::ModelError;
pub use therapist::{Therapist, TherapistRequest, TherapistResponse, TherapistUpdateRequest};
pub use validation::{FieldError, Validate, ValidationErrors};
