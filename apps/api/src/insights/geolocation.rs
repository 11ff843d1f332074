//! Reverse geocoding: coordinates in, city name out. Used only to enrich the
//! local-insights prompt, so every failure degrades to display text.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LocationUnavailable {
    #[error("Geolocation not supported")]
    NotSupported,

    #[error("Location coordinates were not provided")]
    MissingCoordinates,

    #[error("City not found")]
    CityNotFound,

    #[error("Failed to fetch location")]
    FetchFailed(#[source] reqwest::Error),
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    components: Option<AddressComponents>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressComponents {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state_district: Option<String>,
    county: Option<String>,
    state: Option<String>,
}

impl AddressComponents {
    /// Most specific place name available, from city down to state.
    fn place_name(&self) -> Option<&str> {
        [
            &self.city,
            &self.town,
            &self.village,
            &self.state_district,
            &self.county,
            &self.state,
        ]
        .into_iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|c| !c.is_empty())
    }
}

#[derive(Clone)]
pub struct Geocoder {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl Geocoder {
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            endpoint: format!("{}/geocode/v1/json", base_url.trim_end_matches('/')),
        })
    }

    /// One GET per call. No retry.
    pub async fn city_for(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, LocationUnavailable> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LocationUnavailable::NotSupported)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", format!("{latitude},{longitude}")),
                ("key", api_key.to_string()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Geocoding request failed: {e}");
                LocationUnavailable::FetchFailed(e)
            })?;

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            warn!("Geocoding response could not be decoded: {e}");
            LocationUnavailable::FetchFailed(e)
        })?;

        body.results
            .first()
            .and_then(|r| r.components.as_ref())
            .and_then(AddressComponents::place_name)
            .map(str::to_string)
            .ok_or(LocationUnavailable::CityNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_place_name_prefers_city_then_falls_back() {
        let components = AddressComponents {
            town: Some("Ooty".to_string()),
            state: Some("Tamil Nadu".to_string()),
            ..Default::default()
        };
        assert_eq!(components.place_name(), Some("Ooty"));

        let components = AddressComponents {
            city: Some("  ".to_string()),
            county: Some("Nilgiris".to_string()),
            ..Default::default()
        };
        assert_eq!(components.place_name(), Some("Nilgiris"));

        assert_eq!(AddressComponents::default().place_name(), None);
    }

    #[tokio::test]
    async fn test_city_for_reads_first_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode/v1/json")
                    .query_param("q", "12.97,77.59")
                    .query_param("key", "geo-key");
                then.status(200).json_body(json!({
                    "results": [{ "components": { "city": "Bengaluru", "state": "Karnataka" } }]
                }));
            })
            .await;

        let geocoder = Geocoder::new(Some("geo-key".to_string()), &server.base_url()).unwrap();
        let city = geocoder.city_for(12.97, 77.59).await.unwrap();

        mock.assert_async().await;
        assert_eq!(city, "Bengaluru");
    }

    #[tokio::test]
    async fn test_empty_results_is_city_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({ "results": [] }));
            })
            .await;

        let geocoder = Geocoder::new(Some("geo-key".to_string()), &server.base_url()).unwrap();
        let err = geocoder.city_for(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, LocationUnavailable::CityNotFound));
        assert_eq!(err.to_string(), "City not found");
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(401).body("invalid key");
            })
            .await;

        let geocoder = Geocoder::new(Some("bad".to_string()), &server.base_url()).unwrap();
        let err = geocoder.city_for(1.0, 2.0).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch location");
    }

    #[tokio::test]
    async fn test_missing_key_is_not_supported() {
        let geocoder = Geocoder::new(None, "http://127.0.0.1:1").unwrap();
        let err = geocoder.city_for(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, LocationUnavailable::NotSupported));
    }
}
