use std::sync::Arc;

use crate::core::error::Result;
use crate::shared::constants::{AMBULANCE_HELPLINE, EMERGENCY_NUMBER, SOS_HELPLINE};

use super::client::{PlaceSearch, RawPlace};
use super::dto::{PlaceDto, SosDto};
use super::model::{format_distance, haversine_km, PlaceKind};

const UNKNOWN_NAME: &str = "Unknown Place";
const UNKNOWN_ADDRESS: &str = "Address not available";

pub struct EmergencyService {
    places: Arc<dyn PlaceSearch>,
}

fn maps_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", lat, lon)
}

fn directions_url(from: (f64, f64), to: (f64, f64)) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}&travelmode=driving",
        from.0, from.1, to.0, to.1
    )
}

impl EmergencyService {
    pub fn new(places: Arc<dyn PlaceSearch>) -> Self {
        Self { places }
    }

    fn to_dto(origin: (f64, f64), place: RawPlace) -> PlaceDto {
        let km = haversine_km(origin.0, origin.1, place.latitude, place.longitude);
        PlaceDto {
            name: place
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            address: place
                .address
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
            latitude: place.latitude,
            longitude: place.longitude,
            distance: format_distance(km),
            directions_url: directions_url(origin, (place.latitude, place.longitude)),
        }
    }

    /// Places in the provider's order
    pub async fn nearby(&self, lat: f64, lon: f64, kind: PlaceKind) -> Result<Vec<PlaceDto>> {
        let places = self.places.search(lat, lon, kind).await?;
        Ok(places
            .into_iter()
            .map(|p| Self::to_dto((lat, lon), p))
            .collect())
    }

    pub fn sos(&self, lat: f64, lon: f64) -> SosDto {
        let maps_url = maps_url(lat, lon);
        let message = format!("Emergency! I need help. My location: {}", maps_url);
        let sms_uri = format!(
            "sms:{}?body={}",
            EMERGENCY_NUMBER,
            urlencoding::encode(&message)
        );

        SosDto {
            emergency_number: EMERGENCY_NUMBER.to_string(),
            sos_helpline: SOS_HELPLINE.to_string(),
            ambulance_helpline: AMBULANCE_HELPLINE.to_string(),
            message,
            maps_url,
            sms_uri,
        }
    }
}
