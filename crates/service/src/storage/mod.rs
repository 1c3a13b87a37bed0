//! In-memory stores.
//!
//! Stores never produce domain errors: lookups return `Option` and deletes of
//! missing keys are no-ops. Translating absence into `NotFound` is the
//! services' job.

pub mod client_store;
pub mod memory_store;
pub mod therapist_store;

pub use client_store::{ClientGroup, ClientStore};
pub use memory_store::InMemoryStore;
pub use therapist_store::TherapistStore;
