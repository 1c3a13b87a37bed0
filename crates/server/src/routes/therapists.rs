use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use models::{TherapistRequest, TherapistResponse, TherapistUpdateRequest};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::extract::{AppJson, AppPath};
#[allow(unused_imports)] // referenced only inside #[utoipa::path] attributes
use crate::openapi::{ErrorItemDoc, ErrorResponseDoc, TherapistRequestDoc, TherapistResponseDoc, TherapistUpdateRequestDoc};
use crate::state::AppState;

type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

#[utoipa::path(
    post, path = "/therapists", tag = "therapists",
    request_body = TherapistRequestDoc,
    responses(
        (status = 201, description = "Created", body = TherapistResponseDoc),
        (status = 400, description = "Validation Error", body = ErrorResponseDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<TherapistRequest>,
) -> Result<Created<TherapistResponse>, ApiError> {
    let created = state.therapists.add(input)?;
    let location = format!("/therapists/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    get, path = "/therapists", tag = "therapists",
    responses((status = 200, description = "List OK", body = [TherapistResponseDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TherapistResponse>>, ApiError> {
    Ok(Json(state.therapists.list()?))
}

#[utoipa::path(
    get, path = "/therapists/{therapist_id}", tag = "therapists",
    params(("therapist_id" = Uuid, Path, description = "Therapist ID")),
    responses(
        (status = 200, description = "OK", body = TherapistResponseDoc),
        (status = 404, description = "Not Found", body = ErrorItemDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    AppPath(therapist_id): AppPath<Uuid>,
) -> Result<Json<TherapistResponse>, ApiError> {
    Ok(Json(state.therapists.get(therapist_id)?))
}

#[utoipa::path(
    put, path = "/therapists/{therapist_id}", tag = "therapists",
    params(("therapist_id" = Uuid, Path, description = "Therapist ID")),
    request_body = TherapistUpdateRequestDoc,
    responses(
        (status = 200, description = "Updated", body = TherapistResponseDoc),
        (status = 400, description = "Validation Error", body = ErrorResponseDoc),
        (status = 404, description = "Not Found", body = ErrorItemDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(therapist_id): AppPath<Uuid>,
    AppJson(input): AppJson<TherapistUpdateRequest>,
) -> Result<Json<TherapistResponse>, ApiError> {
    Ok(Json(state.therapists.update(therapist_id, input)?))
}
