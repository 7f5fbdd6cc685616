use crate::domain::{ClientLocationRecord, GeofenceArea, GeofenceDraft, LocationReport};
use crate::store::{GeofenceRepository, LocationRepository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Keeps all documents in memory. Clones share the same data.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    areas: Arc<RwLock<Vec<GeofenceArea>>>,
    locations: Arc<RwLock<Vec<ClientLocationRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GeofenceRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<GeofenceArea>, StoreError> {
        Ok(self.areas.read().await.clone())
    }

    #[instrument(skip_all)]
    async fn create(&self, draft: GeofenceDraft) -> Result<GeofenceArea, StoreError> {
        let area = GeofenceArea::new(Uuid::new_v4().to_string(), draft, Utc::now());
        self.areas.write().await.push(area.clone());

        info!(area_id = area.id(), "🟢 Created geofence '{}': {}", area.topic(), area.description());
        Ok(area)
    }

    #[instrument(skip(self, draft))]
    async fn replace(&self, id: &str, draft: GeofenceDraft) -> Result<Option<GeofenceArea>, StoreError> {
        let mut write_guard = self.areas.write().await;

        let Some(existing) = write_guard.iter_mut().find(|area| area.id() == id) else {
            debug!("No geofence with id '{}' to replace", id);
            return Ok(None);
        };

        *existing = existing.replace(draft, Utc::now());
        info!(area_id = id, "🟢 Replaced geofence '{}'", existing.topic());
        Ok(Some(existing.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut write_guard = self.areas.write().await;
        let count = write_guard.len();
        write_guard.retain(|area| area.id() != id);

        let deleted = write_guard.len() < count;
        if deleted {
            info!(area_id = id, "🔴 Deleted geofence");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<ClientLocationRecord>, StoreError> {
        Ok(self.locations.read().await.clone())
    }

    #[instrument(skip_all, fields(client_id = report.client_id()))]
    async fn upsert(&self, report: LocationReport) -> Result<ClientLocationRecord, StoreError> {
        let record = report.into_record(Utc::now());
        let mut write_guard = self.locations.write().await;

        match write_guard.iter_mut().find(|existing| existing.client_id == record.client_id) {
            Some(existing) => *existing = record.clone(),
            None => write_guard.push(record.clone()),
        }

        debug!("📍 Stored location ({}, {}) for client '{}'", record.lat, record.lng, record.client_id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLng, ValidationError};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn draft(topic: &str) -> Result<GeofenceDraft, ValidationError> {
        GeofenceDraft::new(topic, "description", vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 0.0)])
    }

    #[test(tokio::test)]
    async fn lists_areas_in_creation_order() -> Result<(), Box<dyn std::error::Error>> {
        let store = InMemoryStore::new();
        let first = store.create(draft("first")?).await?;
        let second = store.create(draft("second")?).await?;

        let areas = GeofenceRepository::list(&store).await?;

        assert_eq!(areas, vec![first, second]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn replace_updates_an_existing_area() -> Result<(), Box<dyn std::error::Error>> {
        let store = InMemoryStore::new();
        let area = store.create(draft("before")?).await?;

        let replaced = store.replace(area.id(), draft("after")?).await?.expect("area should exist");

        assert_eq!(replaced.id(), area.id());
        assert_eq!(replaced.topic(), "after");
        assert_eq!(GeofenceRepository::list(&store).await?, vec![replaced]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn replace_returns_none_for_an_unknown_area() -> Result<(), Box<dyn std::error::Error>> {
        let store = InMemoryStore::new();

        assert_eq!(store.replace("missing", draft("after")?).await?, None);
        Ok(())
    }

    #[test(tokio::test)]
    async fn delete_removes_the_area() -> Result<(), Box<dyn std::error::Error>> {
        let store = InMemoryStore::new();
        let kept = store.create(draft("kept")?).await?;
        let deleted = store.create(draft("deleted")?).await?;

        assert!(store.delete(deleted.id()).await?);
        assert!(!store.delete(deleted.id()).await?);
        assert_eq!(GeofenceRepository::list(&store).await?, vec![kept]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn upsert_keeps_one_record_per_client_with_the_latest_position() -> Result<(), Box<dyn std::error::Error>> {
        let store = InMemoryStore::new();

        store.upsert(LocationReport::new("phone-1", LatLng::new(1.0, 1.0), None)?).await?;
        store.upsert(LocationReport::new("phone-2", LatLng::new(5.0, 5.0), None)?).await?;
        store.upsert(LocationReport::new("phone-1", LatLng::new(2.0, 3.0), Some("in".to_string()))?).await?;

        let records = LocationRepository::list(&store).await?;
        let phone_1 = records.iter().filter(|r| r.client_id == "phone-1").collect::<Vec<_>>();

        assert_eq!(records.len(), 2);
        assert_eq!(phone_1.len(), 1);
        assert_eq!(phone_1[0].position(), LatLng::new(2.0, 3.0));
        assert_eq!(phone_1[0].punch_status, "in");
        Ok(())
    }
}
