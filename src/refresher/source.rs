use crate::domain::{ClientLocationRecord, GeofenceArea};
use crate::store::{GeofenceRepository, LocationRepository, StoreError};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;

/// Where a live view reads its areas and client locations from.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_areas(&self) -> Result<Vec<GeofenceArea>, FetchError>;

    async fn fetch_locations(&self) -> Result<Vec<ClientLocationRecord>, FetchError>;
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Reads straight from the repositories of this process.
pub struct StoreSource {
    areas: Arc<dyn GeofenceRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl StoreSource {
    pub fn new(areas: Arc<dyn GeofenceRepository>, locations: Arc<dyn LocationRepository>) -> Self {
        StoreSource { areas, locations }
    }
}

#[async_trait]
impl SnapshotSource for StoreSource {
    async fn fetch_areas(&self) -> Result<Vec<GeofenceArea>, FetchError> {
        Ok(self.areas.list().await?)
    }

    async fn fetch_locations(&self) -> Result<Vec<ClientLocationRecord>, FetchError> {
        Ok(self.locations.list().await?)
    }
}

/// Polls the REST API of another instance of this service.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        HttpSource {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch_areas(&self) -> Result<Vec<GeofenceArea>, FetchError> {
        let response = self.client.get(format!("{}/geofence", self.base_url)).send().await?.error_for_status()?;
        Ok(response.json::<Vec<GeofenceArea>>().await?)
    }

    async fn fetch_locations(&self) -> Result<Vec<ClientLocationRecord>, FetchError> {
        let response = self.client.get(format!("{}/client-location", self.base_url)).send().await?.error_for_status()?;
        Ok(response.json::<Vec<ClientLocationRecord>>().await?)
    }
}
