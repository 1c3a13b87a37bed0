//! Client use cases, all scoped to the owning therapist.
//!
//! A therapist without a client group (never had a client added, or had all
//! of them bulk-deleted) is reported as `NotFound` by every read and write
//! except `add`, including `list`.

use std::sync::Arc;

use models::mapping::{map_all, to_entity, to_response, Merge};
use models::{Client, ClientRequest, ClientResponse, ClientUpdateRequest};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::{ClientGroup, ClientStore};

pub struct ClientService {
    store: Arc<ClientStore>,
}

impl ClientService {
    pub fn new(store: Arc<ClientStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, request))]
    pub fn add(&self, therapist_id: Uuid, request: ClientRequest) -> Result<ClientResponse, ServiceError> {
        let mut client: Client = to_entity(request)?;
        client.therapist_id = Some(therapist_id);
        let saved = self.store.save(therapist_id, client);
        let view: ClientResponse = to_response(&saved)?;
        info!(%therapist_id, client_id = %view.id, "client_added");
        Ok(view)
    }

    #[instrument(skip(self))]
    pub fn list(&self, therapist_id: Uuid) -> Result<Vec<ClientResponse>, ServiceError> {
        let group = self.find_group(therapist_id)?;
        debug!(count = group.len(), "clients_listed");
        Ok(map_all(group.values())?)
    }

    #[instrument(skip(self))]
    pub fn get(&self, therapist_id: Uuid, client_id: Uuid) -> Result<ClientResponse, ServiceError> {
        let group = self.find_group(therapist_id)?;
        let client = group.get(&client_id).ok_or_else(|| Self::missing_client(client_id))?;
        Ok(to_response(client)?)
    }

    /// Merge the present fields of `request` into the stored client. The
    /// lookup, merge and write-back run under the group lock.
    #[instrument(skip(self, request))]
    pub fn update(
        &self,
        therapist_id: Uuid,
        client_id: Uuid,
        request: ClientUpdateRequest,
    ) -> Result<ClientResponse, ServiceError> {
        let updated = self.in_group(therapist_id, |group| {
            let client = group.get_mut(&client_id).ok_or_else(|| Self::missing_client(client_id))?;
            request.merge_into(&mut *client)?;
            Ok(client.clone())
        })?;
        info!(%therapist_id, %client_id, "client_updated");
        Ok(to_response(&updated)?)
    }

    /// Remove one client; its siblings and the (possibly empty) group remain.
    #[instrument(skip(self))]
    pub fn remove(&self, therapist_id: Uuid, client_id: Uuid) -> Result<(), ServiceError> {
        self.in_group(therapist_id, |group| {
            group.remove(&client_id).map(|_| ()).ok_or_else(|| Self::missing_client(client_id))
        })?;
        info!(%therapist_id, %client_id, "client_removed");
        Ok(())
    }

    /// Drop the therapist's whole group, not just its contents.
    #[instrument(skip(self))]
    pub fn remove_all(&self, therapist_id: Uuid) -> Result<(), ServiceError> {
        match self.store.remove(&therapist_id) {
            Some(group) => {
                info!(%therapist_id, removed = group.len(), "clients_removed");
                Ok(())
            }
            None => {
                warn!(%therapist_id, "client_group_not_found");
                Err(ServiceError::no_client_for_therapist(therapist_id))
            }
        }
    }

    fn find_group(&self, therapist_id: Uuid) -> Result<ClientGroup, ServiceError> {
        self.store.find_by_id(&therapist_id).ok_or_else(|| Self::missing_group(therapist_id))
    }

    fn in_group<R>(
        &self,
        therapist_id: Uuid,
        f: impl FnOnce(&mut ClientGroup) -> Result<R, ServiceError>,
    ) -> Result<R, ServiceError> {
        self.store.with_group(&therapist_id, f).ok_or_else(|| Self::missing_group(therapist_id))?
    }

    fn missing_group(therapist_id: Uuid) -> ServiceError {
        warn!(%therapist_id, "client_group_not_found");
        ServiceError::clients_not_found(therapist_id)
    }

    fn missing_client(client_id: Uuid) -> ServiceError {
        warn!(%client_id, "client_not_found");
        ServiceError::client_not_found(client_id)
    }
}
