use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotLookupError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("slot lookup returned HTTP {0}")]
    Status(u16),
    #[error("slot lookup body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
