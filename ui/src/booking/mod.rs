//! The location card and the pieces it is assembled from.

mod card;
pub use card::{CardContext, LocationCardView, SlotTime};

mod list;
pub use list::BookingDay;

mod location;
pub use location::BookingLocation;

mod services;
pub use services::{BookingServices, CardSettings, HttpSlotSource, SlotSource};

mod visibility;
pub use visibility::{use_seen, SeenProbe};
