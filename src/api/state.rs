use crate::app_config::AppConfig;
use crate::refresher::LiveSnapshot;
use crate::store::{GeofenceRepository, LocationRepository};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub areas: Arc<dyn GeofenceRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub geocoding_client: Client,
    pub live_view: watch::Receiver<LiveSnapshot>,
}
