use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::ValidationError;
use crate::geocoding::{Place, search};
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    q: Option<String>,
}

pub async fn geocode(State(state): State<AppState>, Query(query): Query<GeocodeQuery>) -> Result<Json<Place>, ApiError> {
    let q = query.q.filter(|q| !q.trim().is_empty()).ok_or(ValidationError::MissingField("q"))?;
    let place = search(&state.geocoding_client, &state.config, q.trim()).await?;

    Ok(Json(place))
}
