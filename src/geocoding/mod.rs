mod client;
mod domain;
mod search;

pub use client::new_client;
pub use search::{GeocodingError, Place, search};
