//! Service layer for therapists and their clients.
//! - `storage`: thread-safe in-memory stores, constructed once and shared by handle.
//! - `therapist_service` / `client_service`: orchestrate store + mapping and turn
//!   "absent in store" into `ServiceError::NotFound`.

pub mod client_service;
pub mod errors;
pub mod storage;
pub mod therapist_service;

pub use client_service::ClientService;
pub use errors::ServiceError;
pub use therapist_service::TherapistService;
