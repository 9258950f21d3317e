//! Booking-provider endpoints and the fixed values sent with every slot lookup.
//!
//! Defaults target the production provider. Builds can override individual
//! values through `SLOTFINDER_*` environment variables, read at compile time
//! so the values end up baked into wasm bundles as well.

use serde::{Deserialize, Serialize};

use crate::model::{Coords, SlotLookupRequest};

pub const DEFAULT_SLOTS_BASE_URL: &str = "https://moh2.weston.sh";
pub const DEFAULT_VACCINE_DATA: &str = "WyJhMVQ0YTAwMDAwMEhJS0NFQTQiXQ==";
pub const DEFAULT_APPOINTMENT_URL: &str =
    "https://app.bookmyvaccine.covid19.health.nz/appointment-select";
pub const DEFAULT_TIME_ZONE: &str = "Pacific/Auckland";
pub const DEFAULT_BOOKING_SITE_URL: &str = "https://bookmyvaccine.covid19.health.nz";
pub const DEFAULT_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Scheme and host of the slot-lookup service, without a trailing slash.
    pub slots_base_url: String,
    pub vaccine_data: String,
    pub group_size: u32,
    /// Downstream page the provider hands the user to after slot selection.
    pub appointment_url: String,
    pub time_zone: String,
    pub booking_site_url: String,
    pub directions_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            slots_base_url: DEFAULT_SLOTS_BASE_URL.to_string(),
            vaccine_data: DEFAULT_VACCINE_DATA.to_string(),
            group_size: 1,
            appointment_url: DEFAULT_APPOINTMENT_URL.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            booking_site_url: DEFAULT_BOOKING_SITE_URL.to_string(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Defaults overlaid with any `SLOTFINDER_*` values present at build time.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            slots_base_url: option_env!("SLOTFINDER_SLOTS_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.slots_base_url),
            booking_site_url: option_env!("SLOTFINDER_BOOKING_SITE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.booking_site_url),
            directions_url: option_env!("SLOTFINDER_DIRECTIONS_URL")
                .map(str::to_string)
                .unwrap_or(defaults.directions_url),
            time_zone: option_env!("SLOTFINDER_TIME_ZONE")
                .map(str::to_string)
                .unwrap_or(defaults.time_zone),
            request_timeout_secs: option_env!("SLOTFINDER_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            ..defaults
        }
    }

    pub fn slots_url(&self, ext_id: &str, date_str: &str) -> String {
        format!(
            "{}/public/locationsz/{ext_id}/date/{date_str}/slots",
            self.slots_base_url
        )
    }

    pub fn lookup_request(&self) -> SlotLookupRequest {
        SlotLookupRequest {
            vaccine_data: self.vaccine_data.clone(),
            group_size: self.group_size,
            url: self.appointment_url.clone(),
            time_zone: self.time_zone.clone(),
        }
    }

    /// Maps deep link routing the user to `destination`.
    pub fn directions_link(&self, destination: Coords) -> String {
        format!(
            "{}&destination={},{}",
            self.directions_url, destination.lat, destination.lng
        )
    }
}
