use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{GeofenceArea, GeofenceDraft, LatLng, ValidationError};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeofencePayload {
    topic: Option<String>,
    description: Option<String>,
    coordinates: Option<Vec<LatLng>>,
}

impl TryFrom<GeofencePayload> for GeofenceDraft {
    type Error = ValidationError;

    fn try_from(payload: GeofencePayload) -> Result<Self, Self::Error> {
        GeofenceDraft::new(
            payload.topic.ok_or(ValidationError::MissingField("topic"))?,
            payload.description.ok_or(ValidationError::MissingField("description"))?,
            payload.coordinates.ok_or(ValidationError::MissingField("coordinates"))?,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    id: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<GeofenceArea>>, ApiError> {
    Ok(Json(state.areas.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<GeofencePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<GeofenceArea>), ApiError> {
    let Json(payload) = payload?;
    let area = state.areas.create(payload.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(area)))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GeofencePayload>, JsonRejection>,
) -> Result<Json<GeofenceArea>, ApiError> {
    let Json(payload) = payload?;

    match state.areas.replace(&id, payload.try_into()?).await? {
        Some(area) => Ok(Json(area)),
        None => Err(not_found(&id)),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    delete_area(&state, &id).await
}

pub async fn delete_by_body(State(state): State<AppState>, payload: Result<Json<DeletePayload>, JsonRejection>) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    let id = payload.id.filter(|id| !id.trim().is_empty()).ok_or(ValidationError::MissingField("id"))?;

    delete_area(&state, &id).await
}

async fn delete_area(state: &AppState, id: &str) -> Result<StatusCode, ApiError> {
    if state.areas.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("geofence '{}' not found", id))
}
