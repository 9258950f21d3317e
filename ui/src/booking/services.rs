//! Collaborators the booking card consumes, provided once through context.

use std::rc::Rc;

use api::{ProviderConfig, SlotClient, SlotLookupError, SlotWithAvailability};
use futures::future::{FutureExt, LocalBoxFuture};
use tracing::{debug, warn};

use crate::core::analytics::{AnalyticsSink, LoggingAnalytics};
use crate::core::slot_gate::SlotKey;
use crate::i18n::{FluentTranslator, Translator};

/// Where live slots come from. `None` means "nothing usable"; the card then
/// keeps showing the slots it was given.
pub trait SlotSource {
    fn fetch_slots(&self, key: &SlotKey) -> LocalBoxFuture<'static, Option<Vec<SlotWithAvailability>>>;
}

/// [`SlotSource`] backed by the provider's slot-lookup endpoint.
#[derive(Debug, Clone)]
pub struct HttpSlotSource {
    client: SlotClient,
}

impl HttpSlotSource {
    pub fn new(client: SlotClient) -> Self {
        Self { client }
    }
}

impl SlotSource for HttpSlotSource {
    fn fetch_slots(&self, key: &SlotKey) -> LocalBoxFuture<'static, Option<Vec<SlotWithAvailability>>> {
        let client = self.client.clone();
        let key = key.clone();
        async move {
            let outcome = client.fetch_slots(&key.ext_id, &key.date_str).await;
            settle(&key, outcome)
        }
        .boxed_local()
    }
}

/// Collapse a lookup outcome into what the card needs, logging failures.
pub(crate) fn settle(
    key: &SlotKey,
    outcome: Result<Option<Vec<SlotWithAvailability>>, SlotLookupError>,
) -> Option<Vec<SlotWithAvailability>> {
    match outcome {
        Ok(Some(slots)) => {
            debug!(ext_id = %key.ext_id, date = %key.date_str, count = slots.len(), "live slots received");
            Some(slots)
        }
        Ok(None) => {
            debug!(ext_id = %key.ext_id, date = %key.date_str, "slot lookup carried no slot list");
            None
        }
        Err(err) => {
            warn!(ext_id = %key.ext_id, date = %key.date_str, "couldn't retrieve slots: {err}");
            None
        }
    }
}

/// Card-level settings that are not provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSettings {
    /// Root margin applied when deciding a card has been seen.
    pub seen_margin: String,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            seen_margin: "20px".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct BookingServices {
    pub provider: Rc<ProviderConfig>,
    pub slots: Rc<dyn SlotSource>,
    pub analytics: Rc<dyn AnalyticsSink>,
    pub translator: Rc<dyn Translator>,
    pub settings: CardSettings,
}

impl BookingServices {
    /// Live provider, logged analytics and the embedded Fluent bundles.
    pub fn production(provider: ProviderConfig) -> Result<Self, SlotLookupError> {
        let client = SlotClient::new(provider.clone())?;
        Ok(Self {
            provider: Rc::new(provider),
            slots: Rc::new(HttpSlotSource::new(client)),
            analytics: Rc::new(LoggingAnalytics),
            translator: Rc::new(FluentTranslator::new()),
            settings: CardSettings::default(),
        })
    }
}

// Props equality: same collaborator instances, same settings.
impl PartialEq for BookingServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider)
            && Rc::ptr_eq(&self.slots, &other.slots)
            && Rc::ptr_eq(&self.analytics, &other.analytics)
            && Rc::ptr_eq(&self.translator, &other.translator)
            && self.settings == other.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SlotKey {
        SlotKey::new("a1A4a000000HJKC", "2021-09-01")
    }

    #[test]
    fn settle_keeps_slot_lists() {
        let slots = vec![SlotWithAvailability::at("09:00:00")];
        assert_eq!(settle(&key(), Ok(Some(slots.clone()))), Some(slots));
        assert_eq!(settle(&key(), Ok(Some(Vec::new()))), Some(Vec::new()));
    }

    #[test]
    fn settle_swallows_failures() {
        assert_eq!(settle(&key(), Ok(None)), None);
        assert_eq!(settle(&key(), Err(SlotLookupError::Status(502))), None);
        let decode = api::client::parse_slots_body("not json").unwrap_err();
        assert_eq!(settle(&key(), Err(decode)), None);
    }

    #[test]
    fn default_margin_matches_card_trigger() {
        assert_eq!(CardSettings::default().seen_margin, "20px");
    }
}
