//! Internationalization (i18n) support for `slotfinder-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/slotfinder-ui.ftl   (fallback/reference)
//!   es-ES/slotfinder-ui.ftl
//!   fr-FR/slotfinder-ui.ftl
//! ```
//!
//! Shell views use the `t!` macro directly. Components that should stay
//! testable without the global loader take a [`Translator`] from context
//! instead and look messages up by the ids in [`keys`].
use std::collections::HashMap;
use std::sync::Once;

use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("app-title")
///     t!("booking-km-away", distance = 3)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "slotfinder-ui";

/// Message ids looked up at runtime through a [`Translator`].
pub mod keys {
    pub const KM_AWAY: &str = "booking-km-away";
    pub const GET_DIRECTIONS: &str = "booking-get-directions";
    pub const MAKE_A_BOOKING: &str = "booking-make-a-booking";
    pub const AVAILABLE_SLOTS: &str = "booking-available-slots";

    pub const ALL: &[&str] = &[KM_AWAY, GET_DIRECTIONS, MAKE_A_BOOKING, AVAILABLE_SLOTS];
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Message lookup by id.
pub trait Translator {
    fn text(&self, key: &str) -> String;
    fn text_with(&self, key: &str, args: &[(&str, FluentValue<'static>)]) -> String;
}

/// [`Translator`] backed by the global [`LOADER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentTranslator;

impl FluentTranslator {
    pub fn new() -> Self {
        init();
        Self
    }
}

impl Translator for FluentTranslator {
    fn text(&self, key: &str) -> String {
        LOADER.get(key)
    }

    fn text_with(&self, key: &str, args: &[(&str, FluentValue<'static>)]) -> String {
        let args: HashMap<&str, FluentValue<'static>> = args.iter().cloned().collect();
        LOADER.get_args(key, args)
    }
}
