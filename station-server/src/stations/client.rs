//! Station inventory API client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use super::error::StationError;

/// Wrapper for the stations response.
#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// Wire shape of one station record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub zone: String,
    pub bikes: u32,
    pub docks: u32,
    pub status: String,
    pub usage: u32,
    /// Minutes
    pub average_duration: u32,
    pub lat: f64,
    pub lng: f64,
}

/// Configuration for the inventory API client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Optional API key sent as the x-apikey header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: 30,
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Client for the station inventory service.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new inventory API client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let api_key_header = HeaderValue::from_str(key).map_err(|_| StationError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-apikey"), api_key_header);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The stations endpoint.
    pub fn stations_url(&self) -> String {
        format!("{}/stations", self.base_url)
    }

    /// Fetch the current snapshot of every station.
    pub async fn fetch_stations(&self) -> Result<Vec<StationDto>, StationError> {
        let response = self.http.get(self.stations_url()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StationError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_stations(&body)
    }
}

/// Parse a `{"stations": [...]}` body.
pub fn parse_stations(body: &str) -> Result<Vec<StationDto>, StationError> {
    let response: StationsResponse =
        serde_json::from_str(body).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;
    Ok(response.stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StationClientConfig::new("http://inventory.local");
        assert_eq!(config.base_url, "http://inventory.local");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_api_key() {
        let config = StationClientConfig::new("http://inventory.local").with_api_key("secret");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn stations_url_strips_trailing_slash() {
        let client = StationClient::new(StationClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.stations_url(), "http://localhost:8080/stations");
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let config = StationClientConfig::new("http://localhost").with_api_key("bad\nkey");
        assert!(matches!(
            StationClient::new(config),
            Err(StationError::Api { status: 0, .. })
        ));
    }

    #[test]
    fn parse_camel_case_body() {
        let body = r#"{
            "stations": [{
                "id": 1,
                "name": "Station 1",
                "address": "12 Oak Ave",
                "zone": "North",
                "bikes": 4,
                "docks": 12,
                "status": "active",
                "usage": 640,
                "averageDuration": 18,
                "lat": 40.74,
                "lng": -73.95
            }]
        }"#;

        let stations = parse_stations(body).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].average_duration, 18);
        assert_eq!(stations[0].zone, "North");
    }

    #[test]
    fn parse_rejects_malformed_body() {
        assert!(matches!(
            parse_stations(r#"{"stations": [{"id": "x"}]}"#),
            Err(StationError::Json { .. })
        ));
    }
}
