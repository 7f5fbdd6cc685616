mod client_location;
mod geofence_area;
mod lat_lng;
mod validation_error;

pub use client_location::{ClientLocationRecord, LocationReport};
pub use geofence_area::{GeofenceArea, GeofenceDraft, MIN_VERTICES};
pub use lat_lng::LatLng;
pub use validation_error::ValidationError;
