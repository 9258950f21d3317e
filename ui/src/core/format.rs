//! Formatting helpers for presenting slots.

use time::{macros::format_description, Time};

/// Render a provider `HH:mm:ss` start time on a 12-hour clock the way the
/// `en-NZ` locale does, e.g. `13:05:00` becomes `01:05 pm`.
pub fn format_slot_time(local_start_time: &str) -> Result<String, time::error::Error> {
    let parsed = Time::parse(local_start_time, format_description!("[hour]:[minute]:[second]"))?;
    let shown = parsed.format(format_description!(
        "[hour repr:12]:[minute] [period case:lower]"
    ))?;
    Ok(shown)
}
