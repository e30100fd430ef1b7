use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::shared::validation::validate_finite;

use super::model::PlaceKind;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct NearbyQuery {
    #[validate(
        range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"),
        custom(function = "validate_finite")
    )]
    pub lat: f64,
    #[validate(
        range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180"),
        custom(function = "validate_finite")
    )]
    pub lon: f64,
    #[serde(default)]
    pub kind: PlaceKind,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct SosQuery {
    #[validate(
        range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"),
        custom(function = "validate_finite")
    )]
    pub lat: f64,
    #[validate(
        range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180"),
        custom(function = "validate_finite")
    )]
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceDto {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Straight-line distance, e.g. `"1.25 km"`
    pub distance: String,
    pub directions_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SosDto {
    pub emergency_number: String,
    pub sos_helpline: String,
    pub ambulance_helpline: String,
    pub message: String,
    pub maps_url: String,
    /// Opens the SMS app with the message prefilled
    pub sms_uri: String,
}
