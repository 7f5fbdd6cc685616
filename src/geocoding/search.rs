use crate::app_config::AppConfig;
use crate::geocoding::domain::SearchResult;
use crate::lat_lng_deserializer;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

/// Looks up a free-text query and returns the best match. Failures are not retried.
#[instrument(skip(client, config))]
pub async fn search(client: &Client, config: &AppConfig, query: &str) -> Result<Place, GeocodingError> {
    info!("🔎 Searching for '{}'...", query);

    let response = client
        .get(format!("{}/search", config.geocoding().url().trim_end_matches('/')))
        .query(&[("format", "json"), ("limit", "1"), ("q", query)])
        .send()
        .await?
        .error_for_status()?;

    let results = response.json::<Vec<SearchResult>>().await?;
    let Some(first) = results.into_iter().next() else {
        info!("🔎 Searching for '{}'... nothing found", query);
        return Err(GeocodingError::NotFound(query.to_string()));
    };

    let place = to_place(first)?;
    info!("🔎 Searching for '{}'... OK, found '{}'", query, place.display_name);
    Ok(place)
}

fn to_place(result: SearchResult) -> Result<Place, GeocodingError> {
    let lat = result
        .lat
        .parse::<f64>()
        .map_err(|_| GeocodingError::InvalidResponse(format!("latitude '{}' is not a number", result.lat)))?;
    let lng = result
        .lon
        .parse::<f64>()
        .map_err(|_| GeocodingError::InvalidResponse(format!("longitude '{}' is not a number", result.lon)))?;
    lat_lng_deserializer::validate(lat, lng).map_err(GeocodingError::InvalidResponse)?;

    Ok(Place {
        lat,
        lng,
        display_name: result.display_name,
    })
}

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("location not found: '{0}'")]
    NotFound(String),
    #[error("geocoding service unreachable: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoding service returned an invalid result: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn search_returns_the_first_result() -> Result<(), GeocodingError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("q".into(), "Colombo Fort".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/nominatim_search_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geocoding_url(server.url()).build();
        let place = search(&Client::new(), &config, "Colombo Fort").await?;

        mock.assert_async().await;
        assert_eq!(
            place,
            Place {
                lat: 6.9349969,
                lng: 79.8538463,
                display_name: "Colombo, Colombo District, Western Province, 00100, Sri Lanka".to_string(),
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn search_reports_not_found_for_an_empty_result() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geocoding_url(server.url()).build();
        let result = search(&Client::new(), &config, "Atlantis").await;

        assert!(matches!(result, Err(GeocodingError::NotFound(query)) if query == "Atlantis"));
    }

    #[test(tokio::test)]
    async fn search_reports_an_upstream_failure() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/search").match_query(Matcher::Any).with_status(503).create_async().await;

        let config = AppConfigBuilder::new().geocoding_url(server.url()).build();
        let result = search(&Client::new(), &config, "Colombo").await;

        assert!(matches!(result, Err(GeocodingError::Request(_))));
    }

    #[test]
    fn to_place_rejects_non_numeric_coordinates() {
        let result = to_place(SearchResult {
            lat: "north".to_string(),
            lon: "79.8".to_string(),
            display_name: "Somewhere".to_string(),
        });

        assert!(matches!(result, Err(GeocodingError::InvalidResponse(_))));
    }
}
