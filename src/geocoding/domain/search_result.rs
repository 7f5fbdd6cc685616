use serde::Deserialize;

// API: https://nominatim.org/release-docs/latest/api/Search/#json
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}
