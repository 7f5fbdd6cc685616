use crate::domain::LatLng;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            lat: f64,
            lng: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validate(inner.lat, inner.lng).map_err(Error::custom)?;

        Ok(LatLng::new(inner.lat, inner.lng))
    }
}

/// Checks that a coordinate pair lies on the globe.
pub fn validate(lat: f64, lng: f64) -> Result<(), String> {
    if !(lat >= -90.0 && lat <= 90.0) {
        return Err(format!("invalid latitude: {}, must be between -90 and 90", lat));
    }

    if !(lng >= -180.0 && lng <= 180.0) {
        return Err(format!("invalid longitude: {}, must be between -180 and 180", lng));
    }

    Ok(())
}
