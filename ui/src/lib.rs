//! Shared UI crate for Slotfinder. Components, hooks and the domain helpers
//! behind them live here; platform crates only launch.

pub mod booking;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand header + language picker (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
