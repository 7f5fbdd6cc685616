use crate::domain::{ClientLocationRecord, GeofenceArea, GeofenceDraft, LocationReport};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing document store could not serve the request. The in-memory store never fails.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence of geofence areas. Listing returns areas in creation order.
#[async_trait]
pub trait GeofenceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<GeofenceArea>, StoreError>;

    async fn create(&self, draft: GeofenceDraft) -> Result<GeofenceArea, StoreError>;

    /// Replaces the area with the given id, `None` when there is no such area.
    async fn replace(&self, id: &str, draft: GeofenceDraft) -> Result<Option<GeofenceArea>, StoreError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Persistence of the latest location per client.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ClientLocationRecord>, StoreError>;

    /// Creates or overwrites the record of the reporting client.
    async fn upsert(&self, report: LocationReport) -> Result<ClientLocationRecord, StoreError>;
}
