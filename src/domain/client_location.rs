use crate::domain::{LatLng, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The latest reported position of a single client. `client_id` is opaque and caller supplied.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLocationRecord {
    pub client_id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub punch_status: String,
    pub timestamp: DateTime<Utc>,
}

impl ClientLocationRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// A validated location report, not yet stamped with a time.
#[derive(Clone, PartialEq, Debug)]
pub struct LocationReport {
    client_id: String,
    position: LatLng,
    punch_status: String,
}

impl LocationReport {
    pub fn new(client_id: impl Into<String>, position: LatLng, punch_status: Option<String>) -> Result<Self, ValidationError> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(ValidationError::BlankField("clientId"));
        }

        Ok(LocationReport {
            client_id,
            position,
            punch_status: punch_status.unwrap_or_default(),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn into_record(self, timestamp: DateTime<Utc>) -> ClientLocationRecord {
        ClientLocationRecord {
            client_id: self.client_id,
            lat: self.position.lat,
            lng: self.position.lng,
            punch_status: self.punch_status,
            timestamp,
        }
    }
}
