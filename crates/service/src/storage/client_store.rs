use std::collections::HashMap;

use models::Client;
use tracing::debug;
use uuid::Uuid;

use super::memory_store::InMemoryStore;

/// One therapist's clients, keyed by client id.
pub type ClientGroup = HashMap<Uuid, Client>;

/// Two-level index: therapist id -> client id -> client.
///
/// A therapist's group comes into existence with its first client and only
/// disappears when the whole outer entry is deleted; removing the last client
/// leaves an empty group behind. Every mutation of a group runs under that
/// therapist's key lock, so concurrent writers to the same group never lose
/// each other's changes.
#[derive(Default)]
pub struct ClientStore {
    store: InMemoryStore<Uuid, ClientGroup>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id when unset and upsert into the therapist's group,
    /// creating the group if needed.
    pub fn save(&self, therapist_id: Uuid, mut client: Client) -> Client {
        let client_id = *client.id.get_or_insert_with(Uuid::new_v4);
        debug!(%therapist_id, %client_id, "client_store_upsert");
        self.store.upsert_with(therapist_id, |group| {
            group.insert(client_id, client.clone());
        });
        client
    }

    /// Run `f` against an existing group under its lock. `None` when the
    /// therapist has no group.
    pub fn with_group<R>(&self, therapist_id: &Uuid, f: impl FnOnce(&mut ClientGroup) -> R) -> Option<R> {
        self.store.update(therapist_id, f)
    }

    /// Snapshot of a therapist's group.
    pub fn find_by_id(&self, therapist_id: &Uuid) -> Option<ClientGroup> {
        self.store.find_by_id(therapist_id)
    }

    pub fn exists_by_id(&self, therapist_id: &Uuid) -> bool {
        self.store.exists_by_id(therapist_id)
    }

    /// Number of therapists with a group.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Drop a therapist's whole group, returning it if there was one.
    pub fn remove(&self, therapist_id: &Uuid) -> Option<ClientGroup> {
        self.store.remove(therapist_id)
    }
}
