use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::refresher::LiveSnapshot;
use axum::Json;
use axum::extract::State;
use axum::http::{Method, Uri};
use serde_json::{Value, json};

pub async fn live_view(State(state): State<AppState>) -> Json<LiveSnapshot> {
    Json(state.live_view.borrow().clone())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {} {}", method, uri.path()))
}
