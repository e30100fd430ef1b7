use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    #[default]
    Hospital,
    Pharmacy,
}

impl PlaceKind {
    /// Geoapify place category
    pub fn category(self) -> &'static str {
        match self {
            PlaceKind::Hospital => "healthcare.hospital",
            PlaceKind::Pharmacy => "healthcare.pharmacy",
        }
    }
}

/// Great-circle distance between two coordinates in kilometres
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}
