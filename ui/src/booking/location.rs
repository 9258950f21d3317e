use dioxus::prelude::*;
use fluent::FluentValue;

use api::{Coords, DateLocationsPair, LocationSlotsPair};

use crate::core::platform;
use crate::core::slot_gate::{SlotGate, SlotKey};
use crate::i18n::keys;

use super::card::{CardContext, LocationCardView};
use super::services::BookingServices;
use super::visibility::use_seen;

/// A single vaccination site: details, outbound links and its slots for the
/// active day. Live slots are looked up once the card has been seen and
/// replace the supplied ones when the lookup returns any.
#[component]
pub fn BookingLocation(
    location_slots_pair: LocationSlotsPair,
    coords: Coords,
    active_date: DateLocationsPair,
    radius_km: u32,
) -> Element {
    let services = use_context::<BookingServices>();
    let probe = use_seen(&services.settings.seen_margin);

    let ext_id = location_slots_pair.location.ext_id.clone();
    let date_str = active_date.date_str.clone();

    let mut gate = use_signal({
        let key = SlotKey::new(ext_id.clone(), date_str.clone());
        move || SlotGate::new(key)
    });

    let source = services.slots.clone();
    use_effect(use_reactive(
        (&ext_id, &date_str),
        move |(ext_id, date_str)| {
            let visible = probe.get();
            let request = gate.with_mut(|g| g.sync(SlotKey::new(ext_id, date_str), visible));
            if let Some(key) = request {
                let source = source.clone();
                // Scoped to this card: unmounting cancels the lookup.
                spawn(async move {
                    let fetched = source.fetch_slots(&key).await;
                    gate.with_mut(|g| g.resolve(&key, fetched));
                });
            }
        },
    ));

    let card = {
        let state = gate.read();
        let displayed = state.display(location_slots_pair.known_slots());
        LocationCardView::build(
            &location_slots_pair,
            displayed,
            &CardContext {
                user: coords,
                radius_km,
                date_str: &active_date.date_str,
                now: platform::local_now(),
            },
            &services.provider,
        )
    };

    let translator = services.translator.clone();
    let km_away = translator.text_with(
        keys::KM_AWAY,
        &[("distance", FluentValue::from(card.distance_km))],
    );
    let directions_label = translator.text(keys::GET_DIRECTIONS);
    let booking_label = translator.text(keys::MAKE_A_BOOKING);
    let slots_label = translator.text(keys::AVAILABLE_SLOTS);

    let on_directions = {
        let analytics = services.analytics.clone();
        let event = card.directions_clicked();
        move |_: MouseEvent| analytics.enqueue(event.clone())
    };
    let on_booking = {
        let analytics = services.analytics.clone();
        let event = card.booking_clicked();
        move |_: MouseEvent| analytics.enqueue(event.clone())
    };

    rsx! {
        article {
            class: "booking-location",
            onmounted: move |evt| probe.attach(evt),

            h3 { class: "booking-location__name", "{card.name}" }
            p { class: "booking-location__address",
                "{card.display_address} ({km_away})"
            }
            p {
                a {
                    class: "booking-location__directions",
                    href: "{card.directions_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: on_directions,
                    "{directions_label}"
                }
            }
            a {
                class: "booking-location__book button button--primary",
                href: "{card.booking_href}",
                target: "_blank",
                "referrerpolicy": "origin",
                rel: "noreferrer",
                onclick: on_booking,
                "{booking_label}"
            }
            p { class: "booking-location__slots-label", "{slots_label}" }
            section { class: "booking-location__slots",
                for slot in card.slot_times.iter() {
                    p { key: "{slot.key}", class: "booking-location__slot", "{slot.label}" }
                }
            }
        }
    }
}
