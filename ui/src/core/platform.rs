//! Platform helpers.

use once_cell::sync::OnceCell;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::warn;

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Resolve the user's UTC offset and keep it for [`local_now`].
///
/// On Unix the offset can only be read while the process is single-threaded,
/// so native launchers call this before starting the renderer.
pub fn capture_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| {
        UtcOffset::current_local_offset().unwrap_or_else(|err| {
            warn!("local UTC offset unavailable ({err}); using UTC");
            UtcOffset::UTC
        })
    })
}

/// Wall-clock time in the user's zone.
pub fn local_now() -> PrimitiveDateTime {
    let offset = match LOCAL_OFFSET.get() {
        Some(offset) => *offset,
        None => capture_local_offset(),
    };
    wall_clock(OffsetDateTime::now_utc(), offset)
}

/// `instant` as read off a clock at `offset`.
pub fn wall_clock(instant: OffsetDateTime, offset: UtcOffset) -> PrimitiveDateTime {
    let local = instant.to_offset(offset);
    PrimitiveDateTime::new(local.date(), local.time())
}
