use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    refresher: Refresher,
    geocoding: Geocoding,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOFENCE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn refresher(&self) -> &Refresher {
        &self.refresher
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    address: String,
    port: u16,
}

impl Server {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Refresher {
    #[serde(with = "humantime_serde")]
    location_interval: Duration,
    #[serde(default, with = "humantime_serde")]
    area_interval: Option<Duration>,
    #[serde(default)]
    remote_url: Option<String>,
}

impl Refresher {
    pub fn location_interval(&self) -> Duration {
        self.location_interval
    }

    pub fn area_interval(&self) -> Option<Duration> {
        self.area_interval
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Geocoding {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    address: "127.0.0.1".to_string(),
                    port: 0,
                },
                refresher: Refresher {
                    location_interval: Duration::from_millis(10),
                    area_interval: None,
                    remote_url: None,
                },
                geocoding: Geocoding {
                    url: "https://nominatim.url".to_string(),
                    user_agent: "geofence-test".to_string(),
                    timeout: Duration::from_secs(5),
                },
            },
        }
    }

    pub fn geocoding_url(mut self, url: String) -> Self {
        self.config.geocoding.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
