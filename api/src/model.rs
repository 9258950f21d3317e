//! Wire model shared between the slot-lookup client and the UI.
//!
//! Field names follow the booking provider's camelCase JSON.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A vaccination site as known to the booking provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Provider-side key for the site. Opaque to us.
    pub ext_id: String,
    pub name: String,
    pub display_address: String,
    pub location: Coords,
}

/// One bookable start time at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWithAvailability {
    /// Time of day in `HH:mm:ss`, local to the site.
    pub local_start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

impl SlotWithAvailability {
    pub fn at<T: Into<String>>(local_start_time: T) -> Self {
        Self {
            local_start_time: local_start_time.into(),
            available: Some(true),
            duration_seconds: None,
        }
    }
}

/// A location paired with whatever slots the upstream listing last knew about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSlotsPair {
    pub location: Location,
    #[serde(default)]
    pub slots: Option<Vec<SlotWithAvailability>>,
}

impl LocationSlotsPair {
    /// Supplied slots, empty when the listing carried none.
    pub fn known_slots(&self) -> &[SlotWithAvailability] {
        self.slots.as_deref().unwrap_or_default()
    }
}

/// A calendar day (`yyyy-MM-dd`) and the locations offering slots on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateLocationsPair {
    pub date_str: String,
    #[serde(default)]
    pub locations: Vec<LocationSlotsPair>,
}

/// Fixed request body expected by the slot-lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLookupRequest {
    pub vaccine_data: String,
    pub group_size: u32,
    pub url: String,
    pub time_zone: String,
}

/// Response from the slot-lookup endpoint. Every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLookupResponse {
    #[serde(default)]
    pub slots_with_availability: Option<Vec<SlotWithAvailability>>,
}
