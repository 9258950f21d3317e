//! Click analytics for the booking card.
//!
//! Events are fire-and-forget: components hand them to an [`AnalyticsSink`]
//! and never wait on, or react to, what the sink does with them.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

pub const GET_DIRECTIONS_CLICKED: &str = "Get Directions clicked";
pub const MAKE_A_BOOKING_CLICKED: &str = "Make a Booking clicked";

/// A named analytics event and its property map.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsClicked {
    pub radius_km: u32,
    /// Slots the upstream listing supplied, not the live ones.
    pub spots_available: usize,
    pub booking_date_in_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingClicked {
    pub location_name: String,
    pub radius_km: u32,
    /// Slots currently on screen.
    pub spots_available: usize,
    pub booking_date_in_days: Option<i64>,
}

impl From<DirectionsClicked> for AnalyticsEvent {
    fn from(props: DirectionsClicked) -> Self {
        Self {
            name: GET_DIRECTIONS_CLICKED,
            properties: to_properties(&props),
        }
    }
}

impl From<BookingClicked> for AnalyticsEvent {
    fn from(props: BookingClicked) -> Self {
        Self {
            name: MAKE_A_BOOKING_CLICKED,
            properties: to_properties(&props),
        }
    }
}

fn to_properties<T: Serialize>(props: &T) -> Map<String, Value> {
    match serde_json::to_value(props) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

pub trait AnalyticsSink {
    fn enqueue(&self, event: AnalyticsEvent);
}

/// Production sink: each event is written to the log and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAnalytics;

impl AnalyticsSink for LoggingAnalytics {
    fn enqueue(&self, event: AnalyticsEvent) {
        info!(
            event = event.name,
            properties = %serde_json::Value::Object(event.properties),
            "analytics event"
        );
    }
}

/// Keeps events in arrival order until drained. Used where the emitted
/// events need inspecting.
#[derive(Debug, Default)]
pub struct QueuedAnalytics {
    queue: RefCell<VecDeque<AnalyticsEvent>>,
}

impl QueuedAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn drain(&self) -> Vec<AnalyticsEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl AnalyticsSink for QueuedAnalytics {
    fn enqueue(&self, event: AnalyticsEvent) {
        self.queue.borrow_mut().push_back(event);
    }
}
