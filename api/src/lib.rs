//! Booking-provider access for Slotfinder: wire model, provider configuration
//! and the slot-lookup client.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::SlotClient;
pub use config::ProviderConfig;
pub use error::SlotLookupError;
pub use model::{
    Coords, DateLocationsPair, Location, LocationSlotsPair, SlotLookupRequest,
    SlotLookupResponse, SlotWithAvailability,
};
