use models::Therapist;
use tracing::debug;
use uuid::Uuid;

use super::memory_store::InMemoryStore;

/// Therapists keyed by id. The only write path is `save_or_update`, so a
/// stored therapist's id always equals its key.
#[derive(Default)]
pub struct TherapistStore {
    store: InMemoryStore<Uuid, Therapist>,
}

impl TherapistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id when unset, then upsert under that id.
    pub fn save_or_update(&self, mut therapist: Therapist) -> Therapist {
        let id = *therapist.id.get_or_insert_with(Uuid::new_v4);
        debug!(therapist_id = %id, "therapist_store_upsert");
        self.store.save(id, therapist)
    }

    pub fn find_all(&self) -> Vec<Therapist> {
        self.store.find_all()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<Therapist> {
        self.store.find_by_id(id)
    }

    pub fn exists_by_id(&self, id: &Uuid) -> bool {
        self.store.exists_by_id(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}
