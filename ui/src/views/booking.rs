use dioxus::prelude::*;
use tracing::error;

use api::{Coords, DateLocationsPair, ProviderConfig};

use crate::booking::{BookingDay, BookingServices};

/// Where the preview assumes the user is standing (Auckland CBD).
const PREVIEW_COORDS: Coords = Coords::new(-36.8509, 174.7645);
const PREVIEW_RADIUS_KM: u32 = 10;

const SAMPLE_DAY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/sample/day.json"
));

pub(crate) fn sample_day() -> Result<DateLocationsPair, String> {
    serde_json::from_str(SAMPLE_DAY).map_err(|err| format!("Sample listing is unreadable: {err}"))
}

#[component]
pub fn Booking() -> Element {
    let services = use_hook(|| {
        BookingServices::production(ProviderConfig::from_env())
            .map_err(|err| format!("Couldn't start the slot lookup client: {err}"))
    });
    let day = use_hook(sample_day);

    match (services, day) {
        (Ok(services), Ok(day)) => rsx! {
            BookingPage { services, day }
        },
        (Err(message), _) | (_, Err(message)) => {
            error!("{message}");
            rsx! {
                section { class: "page page-booking",
                    div { class: "page__error", "⚠️ {message}" }
                }
            }
        }
    }
}

#[component]
fn BookingPage(services: BookingServices, day: DateLocationsPair) -> Element {
    use_context_provider(|| services.clone());

    let date = day.date_str.clone();
    let intro = crate::t!("booking-page-intro", radius = PREVIEW_RADIUS_KM, date = date);

    rsx! {
        section { class: "page page-booking",
            h1 { {crate::t!("booking-page-title")} }
            p { "{intro}" }

            if day.locations.is_empty() {
                p { class: "page-booking__empty", {crate::t!("booking-page-empty")} }
            } else {
                BookingDay { day, coords: PREVIEW_COORDS, radius_km: PREVIEW_RADIUS_KM }
            }
        }
    }
}
