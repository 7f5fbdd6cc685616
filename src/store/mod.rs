mod in_memory;
mod repository;

pub use in_memory::InMemoryStore;
pub use repository::{GeofenceRepository, LocationRepository, StoreError};
