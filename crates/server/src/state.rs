use std::sync::Arc;

use service::storage::{ClientStore, TherapistStore};
use service::{ClientService, TherapistService};

/// Shared handler state. Stores are created once per process and reached only
/// through these services.
#[derive(Clone)]
pub struct AppState {
    pub therapists: Arc<TherapistService>,
    pub clients: Arc<ClientService>,
}

impl AppState {
    pub fn new(therapist_store: Arc<TherapistStore>, client_store: Arc<ClientStore>) -> Self {
        Self {
            therapists: Arc::new(TherapistService::new(therapist_store)),
            clients: Arc::new(ClientService::new(client_store)),
        }
    }

    /// Fresh, empty stores.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(TherapistStore::new()), Arc::new(ClientStore::new()))
    }
}
