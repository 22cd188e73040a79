//! Venue types.

use serde::{Deserialize, Serialize};

/// Where an event takes place. Embedded 1:1 in its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Venue identifier.
    pub id: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    pub venue_name: String,
    /// Street address.
    pub address1: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal or ZIP code.
    pub postal_zip: String,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: f64,
    /// Gallery image URLs.
    #[serde(default)]
    pub image_gallery_urls: Vec<String>,
}

impl Venue {
    /// Formats the postal address on one line.
    ///
    /// Layout: `address1, city, state postalZip, country`.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address1, self.city, self.state, self.postal_zip, self.country
        )
    }
}
