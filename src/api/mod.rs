mod client_location_routes;
mod error;
mod geocode_routes;
mod geofence_routes;
mod state;
mod status_routes;

use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, put};
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/geofence",
            get(geofence_routes::list).post(geofence_routes::create).delete(geofence_routes::delete_by_body),
        )
        .route("/geofence/{id}", put(geofence_routes::replace).delete(geofence_routes::delete))
        .route("/client-location", get(client_location_routes::list).post(client_location_routes::report))
        .route("/geocode", get(geocode_routes::geocode))
        .route("/live-view", get(status_routes::live_view))
        .route("/health", get(status_routes::health))
        .fallback(status_routes::fallback)
        .layer(cors)
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState, shutdown: impl Future<Output = ()> + Send + 'static) -> std::io::Result<()> {
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await
}
