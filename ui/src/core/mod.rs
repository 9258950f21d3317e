//! Platform-agnostic helpers behind the booking card: distances, clock and
//! calendar formatting, analytics events and the slot fetch state machine.

pub mod analytics;
pub mod calendar;
pub mod format;
pub mod geo;
pub mod platform;
pub mod slot_gate;
