mod booking;
pub use booking::Booking;
