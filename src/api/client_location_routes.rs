use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{ClientLocationRecord, LatLng, LocationReport, ValidationError};
use crate::lat_lng_deserializer;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    client_id: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    punch_status: Option<String>,
}

impl TryFrom<LocationPayload> for LocationReport {
    type Error = ValidationError;

    fn try_from(payload: LocationPayload) -> Result<Self, Self::Error> {
        let client_id = payload.client_id.ok_or(ValidationError::MissingField("clientId"))?;
        let lat = payload.lat.ok_or(ValidationError::MissingField("lat"))?;
        let lng = payload.lng.ok_or(ValidationError::MissingField("lng"))?;
        lat_lng_deserializer::validate(lat, lng).map_err(ValidationError::InvalidCoordinate)?;

        LocationReport::new(client_id, LatLng::new(lat, lng), payload.punch_status)
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClientLocationRecord>>, ApiError> {
    Ok(Json(state.locations.list().await?))
}

pub async fn report(State(state): State<AppState>, payload: Result<Json<LocationPayload>, JsonRejection>) -> Result<Json<ClientLocationRecord>, ApiError> {
    let Json(payload) = payload?;
    let record = state.locations.upsert(payload.try_into()?).await?;

    Ok(Json(record))
}
