//! Saved prayer locations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location validation errors
#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    /// Name is blank
    #[error("Location name is empty")]
    EmptyName,

    /// Latitude outside -90..=90
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),
}

/// A location the user picked for prayer times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    /// City or place name
    pub name: String,
    /// Country name
    pub country: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// IANA time zone (e.g. "Europe/Istanbul")
    pub time_zone: String,
}

impl SavedLocation {
    /// Create a validated location
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
        time_zone: impl Into<String>,
    ) -> Result<Self, LocationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidLongitude(longitude));
        }
        Ok(Self {
            name,
            country: country.into(),
            latitude,
            longitude,
            time_zone: time_zone.into(),
        })
    }

    /// "Name, Country", or just the name when the country is blank
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// Case-insensitive match on name or country
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.country.to_lowercase().contains(&query)
    }
}
