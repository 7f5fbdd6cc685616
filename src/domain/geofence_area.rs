use crate::domain::{LatLng, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_VERTICES: usize = 3;

/// A named polygon. The vertex list is only ever replaced as a whole, see [`GeofenceArea::replace`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceArea {
    id: String,
    topic: String,
    description: String,
    coordinates: Vec<LatLng>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GeofenceArea {
    pub fn new(id: impl Into<String>, draft: GeofenceDraft, now: DateTime<Utc>) -> Self {
        GeofenceArea {
            id: id.into(),
            topic: draft.topic,
            description: draft.description,
            coordinates: draft.coordinates,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn coordinates(&self) -> &[LatLng] {
        &self.coordinates
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Builds the successor of this area, keeping its identity and creation time.
    pub fn replace(&self, draft: GeofenceDraft, now: DateTime<Utc>) -> Self {
        GeofenceArea {
            id: self.id.clone(),
            topic: draft.topic,
            description: draft.description,
            coordinates: draft.coordinates,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// The validated content of a create or update request.
#[derive(Clone, PartialEq, Debug)]
pub struct GeofenceDraft {
    topic: String,
    description: String,
    coordinates: Vec<LatLng>,
}

impl GeofenceDraft {
    pub fn new(topic: impl Into<String>, description: impl Into<String>, coordinates: Vec<LatLng>) -> Result<Self, ValidationError> {
        let topic = topic.into();
        let description = description.into();

        if topic.trim().is_empty() {
            return Err(ValidationError::BlankField("topic"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::BlankField("description"));
        }
        if coordinates.len() < MIN_VERTICES {
            return Err(ValidationError::TooFewCoordinates(coordinates.len()));
        }

        Ok(GeofenceDraft {
            topic,
            description,
            coordinates,
        })
    }
}
