use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, GeocodingClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.geocoding().user_agent())?);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).timeout(config.geocoding().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum GeocodingClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("geocoding client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_user_agent_header() -> Result<(), GeocodingClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", "geofence-test")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().geocoding_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        mock.assert_async().await;

        Ok(())
    }
}
