use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeoapifyConfig;
use crate::core::error::{AppError, Result};

use super::model::PlaceKind;

const RESULT_LIMIT: u32 = 10;

/// A place as reported by the provider, before distances are computed
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlace {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Looks up places of a kind around a coordinate
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, lat: f64, lon: f64, kind: PlaceKind) -> Result<Vec<RawPlace>>;
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[lon, lat]`
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    name: Option<String>,
    address_line1: Option<String>,
}

impl PlacesResponse {
    fn into_places(self) -> Vec<RawPlace> {
        self.features
            .into_iter()
            .filter_map(|f| match f.geometry.coordinates.as_slice() {
                [lon, lat, ..] => Some(RawPlace {
                    name: f.properties.name,
                    address: f.properties.address_line1,
                    latitude: *lat,
                    longitude: *lon,
                }),
                _ => None,
            })
            .collect()
    }
}

/// Geoapify Places API client
pub struct GeoapifyClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    radius_meters: u32,
}

impl GeoapifyClient {
    pub fn new(config: &GeoapifyConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            radius_meters: config.radius_meters,
        }
    }

    fn places_url(&self, api_key: &str, lat: f64, lon: f64, kind: PlaceKind) -> String {
        format!(
            "{}/v2/places?categories={}&filter=circle:{},{},{}&limit={}&apiKey={}",
            self.base_url,
            kind.category(),
            lon,
            lat,
            self.radius_meters,
            RESULT_LIMIT,
            urlencoding::encode(api_key)
        )
    }
}

#[async_trait]
impl PlaceSearch for GeoapifyClient {
    async fn search(&self, lat: f64, lon: f64, kind: PlaceKind) -> Result<Vec<RawPlace>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::ExternalServiceError("Place search is not configured".to_string())
        })?;

        tracing::debug!("Searching {} places near {},{}", kind.category(), lat, lon);

        let response = self
            .http_client
            .get(self.places_url(api_key, lat, lon, kind))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Geoapify request failed: {}", e);
                AppError::ExternalServiceError("Failed to fetch nearby places".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Geoapify API error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Failed to fetch nearby places: HTTP {}",
                status
            )));
        }

        let body: PlacesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Geoapify response: {}", e);
            AppError::ExternalServiceError("Failed to parse nearby places".to_string())
        })?;

        Ok(body.into_places())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(api_key: Option<&str>) -> GeoapifyClient {
        GeoapifyClient::new(&GeoapifyConfig {
            api_key: api_key.map(str::to_string),
            base_url: "https://api.geoapify.com/".to_string(),
            radius_meters: 5000,
        })
    }

    #[test]
    fn test_places_url_puts_longitude_first() {
        let url = client(Some("k")).places_url("k", 11.5, 78.25, PlaceKind::Pharmacy);
        assert_eq!(
            url,
            "https://api.geoapify.com/v2/places?categories=healthcare.pharmacy&filter=circle:78.25,11.5,5000&limit=10&apiKey=k"
        );
    }

    #[test]
    fn test_parse_features() {
        let body: PlacesResponse = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"geometry": {"coordinates": [78.1, 11.2]},
                 "properties": {"name": "GH", "address_line1": "Main Road"}},
                {"geometry": {"coordinates": [78.2, 11.3]}, "properties": {}},
                {"geometry": {"coordinates": []}, "properties": {"name": "Broken"}}
            ]
        }))
        .unwrap();

        let places = body.into_places();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name.as_deref(), Some("GH"));
        assert_eq!(places[0].latitude, 11.2);
        assert_eq!(places[1].address, None);
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let err = client(None)
            .search(11.0, 78.0, PlaceKind::Hospital)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
