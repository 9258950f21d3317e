//! Slot-lookup HTTP client.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::SlotLookupError;
use crate::model::{SlotLookupResponse, SlotWithAvailability};

#[derive(Debug, Clone)]
pub struct SlotClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl SlotClient {
    pub fn new(config: ProviderConfig) -> Result<Self, SlotLookupError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(format!("slotfinder/{}", env!("CARGO_PKG_VERSION")));
        let http = builder.build().map_err(SlotLookupError::HttpClient)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Look up live slots for one location on one day.
    ///
    /// `Ok(None)` means the provider answered with JSON that carried no slot
    /// list.
    pub async fn fetch_slots(
        &self,
        ext_id: &str,
        date_str: &str,
    ) -> Result<Option<Vec<SlotWithAvailability>>, SlotLookupError> {
        let url = self.config.slots_url(ext_id, date_str);
        debug!(%url, "requesting live slots");

        let response = self
            .http
            .post(&url)
            .json(&self.config.lookup_request())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlotLookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_slots_body(&body)
    }
}

/// Decode a slot-lookup body. The body must be JSON; the slot field is optional.
pub fn parse_slots_body(body: &str) -> Result<Option<Vec<SlotWithAvailability>>, SlotLookupError> {
    let parsed: SlotLookupResponse = serde_json::from_str(body)?;
    Ok(parsed.slots_with_availability)
}
