use dioxus::prelude::*;

use api::{Coords, DateLocationsPair};

use super::location::BookingLocation;

const BOOKING_CSS: Asset = asset!("/assets/styling/booking.css");

/// Every location with slots on one day, nearest data first as supplied.
#[component]
pub fn BookingDay(day: DateLocationsPair, coords: Coords, radius_km: u32) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOOKING_CSS }

        div { class: "booking-day",
            for pair in day.locations.iter() {
                BookingLocation {
                    key: "{pair.location.ext_id}-{day.date_str}",
                    location_slots_pair: pair.clone(),
                    coords,
                    active_date: day.clone(),
                    radius_km,
                }
            }
        }
    }
}
