//! Everything a location card shows, computed from its inputs in one place.

use api::{Coords, LocationSlotsPair, ProviderConfig, SlotWithAvailability};
use time::PrimitiveDateTime;
use tracing::warn;

use crate::core::analytics::{AnalyticsEvent, BookingClicked, DirectionsClicked};
use crate::core::{calendar, format, geo};

/// Inputs shared by every card on a results page.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContext<'a> {
    pub user: Coords,
    pub radius_km: u32,
    pub date_str: &'a str,
    pub now: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotTime {
    /// Raw provider time, unique per location and day.
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationCardView {
    pub name: String,
    pub display_address: String,
    pub distance_km: u64,
    pub directions_href: String,
    pub booking_href: String,
    pub slot_times: Vec<SlotTime>,
    directions: DirectionsClicked,
    booking: BookingClicked,
}

impl LocationCardView {
    /// `displayed` is the list the card is about to render, live or supplied.
    pub fn build(
        pair: &LocationSlotsPair,
        displayed: &[SlotWithAvailability],
        ctx: &CardContext<'_>,
        provider: &ProviderConfig,
    ) -> Self {
        let location = &pair.location;
        let booking_date_in_days = match calendar::days_until(ctx.date_str, ctx.now) {
            Ok(days) => Some(days),
            Err(err) => {
                warn!(date = ctx.date_str, "unreadable booking date: {err}");
                None
            }
        };

        Self {
            name: location.name.clone(),
            display_address: location.display_address.clone(),
            distance_km: geo::whole_km(ctx.user, location.location),
            directions_href: provider.directions_link(location.location),
            booking_href: provider.booking_site_url.clone(),
            slot_times: displayed.iter().map(slot_time).collect(),
            directions: DirectionsClicked {
                radius_km: ctx.radius_km,
                spots_available: pair.known_slots().len(),
                booking_date_in_days,
            },
            booking: BookingClicked {
                location_name: location.name.clone(),
                radius_km: ctx.radius_km,
                spots_available: displayed.len(),
                booking_date_in_days,
            },
        }
    }

    pub fn directions_clicked(&self) -> AnalyticsEvent {
        self.directions.clone().into()
    }

    pub fn booking_clicked(&self) -> AnalyticsEvent {
        self.booking.clone().into()
    }
}

fn slot_time(slot: &SlotWithAvailability) -> SlotTime {
    let raw = slot.local_start_time.as_str();
    let label = format::format_slot_time(raw).unwrap_or_else(|err| {
        warn!(time = raw, "unreadable slot time: {err}");
        raw.to_string()
    });
    SlotTime {
        key: raw.to_string(),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Location;
    use serde_json::{json, Value};
    use time::macros::datetime;

    fn pair(slots: Option<Vec<SlotWithAvailability>>) -> LocationSlotsPair {
        LocationSlotsPair {
            location: Location {
                ext_id: "a1A4a000000HJKC".into(),
                name: "Auckland CBD".into(),
                display_address: "1 Queen Street, Auckland".into(),
                location: Coords::new(-36.8485, 174.7633),
            },
            slots,
        }
    }

    fn ctx(date_str: &str) -> CardContext<'_> {
        CardContext {
            user: Coords::new(-36.8509, 174.7645),
            radius_km: 10,
            date_str,
            now: datetime!(2021-08-30 10:00),
        }
    }

    #[test]
    fn renders_location_details() {
        let supplied = vec![SlotWithAvailability::at("09:30:00")];
        let pair = pair(Some(supplied.clone()));
        let view = LocationCardView::build(&pair, &supplied, &ctx("2021-09-01"), &ProviderConfig::default());

        assert_eq!(view.name, "Auckland CBD");
        assert_eq!(view.display_address, "1 Queen Street, Auckland");
        assert_eq!(view.distance_km, 0);
        assert_eq!(
            view.directions_href,
            "https://www.google.com/maps/dir/?api=1&destination=-36.8485,174.7633"
        );
        assert_eq!(view.booking_href, "https://bookmyvaccine.covid19.health.nz");
        assert_eq!(
            view.slot_times,
            vec![SlotTime {
                key: "09:30:00".into(),
                label: "09:30 am".into()
            }]
        );
    }

    #[test]
    fn directions_counts_supplied_slots() {
        let supplied = vec![SlotWithAvailability::at("09:30:00")];
        let live = vec![
            SlotWithAvailability::at("10:00:00"),
            SlotWithAvailability::at("10:15:00"),
            SlotWithAvailability::at("10:30:00"),
        ];
        let pair = pair(Some(supplied));
        let view = LocationCardView::build(&pair, &live, &ctx("2021-09-01"), &ProviderConfig::default());

        let event = view.directions_clicked();
        assert_eq!(event.name, "Get Directions clicked");
        assert_eq!(
            Value::Object(event.properties),
            json!({ "radiusKm": 10, "spotsAvailable": 1, "bookingDateInDays": 1 })
        );
    }

    #[test]
    fn booking_counts_displayed_slots() {
        let live = vec![
            SlotWithAvailability::at("10:00:00"),
            SlotWithAvailability::at("10:15:00"),
        ];
        let pair = pair(None);
        let view = LocationCardView::build(&pair, &live, &ctx("2021-09-01"), &ProviderConfig::default());

        let event = view.booking_clicked();
        assert_eq!(event.name, "Make a Booking clicked");
        assert_eq!(
            Value::Object(event.properties),
            json!({
                "locationName": "Auckland CBD",
                "radiusKm": 10,
                "spotsAvailable": 2,
                "bookingDateInDays": 1
            })
        );
    }

    #[test]
    fn missing_supplied_slots_count_as_zero() {
        let pair = pair(None);
        let view = LocationCardView::build(&pair, &[], &ctx("2021-09-01"), &ProviderConfig::default());
        assert_eq!(view.directions_clicked().properties["spotsAvailable"], json!(0));
        assert!(view.slot_times.is_empty());
    }

    #[test]
    fn unreadable_inputs_degrade_per_field() {
        let supplied = vec![SlotWithAvailability::at("half past nine")];
        let pair = pair(Some(supplied.clone()));
        let view = LocationCardView::build(&pair, &supplied, &ctx("someday"), &ProviderConfig::default());

        assert_eq!(view.slot_times[0].label, "half past nine");
        assert_eq!(view.booking_clicked().properties["bookingDateInDays"], Value::Null);
    }
}
