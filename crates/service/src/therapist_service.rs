use std::sync::Arc;

use models::mapping::{map_all, to_entity, to_response, Merge};
use models::{Therapist, TherapistRequest, TherapistResponse, TherapistUpdateRequest};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::TherapistStore;

/// Therapist use cases: add, list, get, partial update.
pub struct TherapistService {
    store: Arc<TherapistStore>,
}

impl TherapistService {
    pub fn new(store: Arc<TherapistStore>) -> Self {
        Self { store }
    }

    #[instrument(skip_all)]
    pub fn add(&self, request: TherapistRequest) -> Result<TherapistResponse, ServiceError> {
        let therapist: Therapist = to_entity(request)?;
        let saved = self.store.save_or_update(therapist);
        let view: TherapistResponse = to_response(&saved)?;
        info!(therapist_id = %view.id, "therapist_added");
        Ok(view)
    }

    pub fn list(&self) -> Result<Vec<TherapistResponse>, ServiceError> {
        let all = self.store.find_all();
        debug!(count = all.len(), "therapists_listed");
        Ok(map_all(&all)?)
    }

    #[instrument(skip(self))]
    pub fn get(&self, id: Uuid) -> Result<TherapistResponse, ServiceError> {
        let therapist = self.find(id)?;
        Ok(to_response(&therapist)?)
    }

    /// Merge the present fields of `request` into the stored therapist.
    #[instrument(skip(self, request))]
    pub fn update(&self, id: Uuid, request: TherapistUpdateRequest) -> Result<TherapistResponse, ServiceError> {
        let mut therapist = self.find(id)?;
        request.merge_into(&mut therapist)?;
        let saved = self.store.save_or_update(therapist);
        info!(therapist_id = %id, "therapist_updated");
        Ok(to_response(&saved)?)
    }

    fn find(&self, id: Uuid) -> Result<Therapist, ServiceError> {
        self.store.find_by_id(&id).ok_or_else(|| {
            warn!(therapist_id = %id, "therapist_not_found");
            ServiceError::therapist_not_found(id)
        })
    }
}
