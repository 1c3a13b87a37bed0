use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use models::{ClientRequest, ClientResponse, ClientUpdateRequest};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::extract::{AppJson, AppPath};
#[allow(unused_imports)] // referenced only inside #[utoipa::path] attributes
use crate::openapi::{ClientRequestDoc, ClientResponseDoc, ClientUpdateRequestDoc, ErrorItemDoc, ErrorResponseDoc};
use crate::state::AppState;

type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

#[utoipa::path(
    post, path = "/therapists/{therapist_id}/clients", tag = "clients",
    params(("therapist_id" = Uuid, Path, description = "Therapist ID")),
    request_body = ClientRequestDoc,
    responses(
        (status = 201, description = "Created", body = ClientResponseDoc),
        (status = 400, description = "Validation Error", body = ErrorResponseDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppPath(therapist_id): AppPath<Uuid>,
    AppJson(input): AppJson<ClientRequest>,
) -> Result<Created<ClientResponse>, ApiError> {
    let created = state.clients.add(therapist_id, input)?;
    let location = format!("/therapists/{therapist_id}/clients/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    get, path = "/therapists/{therapist_id}/clients", tag = "clients",
    params(("therapist_id" = Uuid, Path, description = "Therapist ID")),
    responses(
        (status = 200, description = "List OK", body = [ClientResponseDoc]),
        (status = 404, description = "Therapist has no clients", body = ErrorItemDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    AppPath(therapist_id): AppPath<Uuid>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    Ok(Json(state.clients.list(therapist_id)?))
}

#[utoipa::path(
    get, path = "/therapists/{therapist_id}/clients/{client_id}", tag = "clients",
    params(
        ("therapist_id" = Uuid, Path, description = "Therapist ID"),
        ("client_id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "OK", body = ClientResponseDoc),
        (status = 404, description = "Not Found", body = ErrorItemDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    AppPath((therapist_id, client_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ClientResponse>, ApiError> {
    Ok(Json(state.clients.get(therapist_id, client_id)?))
}

#[utoipa::path(
    put, path = "/therapists/{therapist_id}/clients/{client_id}", tag = "clients",
    params(
        ("therapist_id" = Uuid, Path, description = "Therapist ID"),
        ("client_id" = Uuid, Path, description = "Client ID")
    ),
    request_body = ClientUpdateRequestDoc,
    responses(
        (status = 200, description = "Updated", body = ClientResponseDoc),
        (status = 400, description = "Validation Error", body = ErrorResponseDoc),
        (status = 404, description = "Not Found", body = ErrorItemDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath((therapist_id, client_id)): AppPath<(Uuid, Uuid)>,
    AppJson(input): AppJson<ClientUpdateRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    Ok(Json(state.clients.update(therapist_id, client_id, input)?))
}

#[utoipa::path(
    delete, path = "/therapists/{therapist_id}/clients/{client_id}", tag = "clients",
    params(
        ("therapist_id" = Uuid, Path, description = "Therapist ID"),
        ("client_id" = Uuid, Path, description = "Client ID")
    ),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found", body = ErrorItemDoc))
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath((therapist_id, client_id)): AppPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.clients.remove(therapist_id, client_id)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/therapists/{therapist_id}/clients", tag = "clients",
    params(("therapist_id" = Uuid, Path, description = "Therapist ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Therapist has no clients", body = ErrorItemDoc))
)]
pub async fn delete_all(
    State(state): State<AppState>,
    AppPath(therapist_id): AppPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.clients.remove_all(therapist_id)?;
    Ok(StatusCode::OK)
}
