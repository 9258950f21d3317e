//! Calendar arithmetic for the active booking date.

use time::{macros::format_description, Date, PrimitiveDateTime, Time};

/// Parse a listing date in `yyyy-MM-dd` form.
pub fn parse_booking_date(date_str: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date_str, format_description!("[year]-[month]-[day]"))
}

/// Signed number of whole days from `now` until local midnight of `date_str`,
/// truncated toward zero. Later today and tomorrow-before-now both read as `0`.
pub fn days_until(date_str: &str, now: PrimitiveDateTime) -> Result<i64, time::error::Parse> {
    let midnight = PrimitiveDateTime::new(parse_booking_date(date_str)?, Time::MIDNIGHT);
    Ok((midnight - now).whole_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_until("2021-09-01", datetime!(2021-09-01 14:00)).unwrap(), 0);
    }

    #[test]
    fn partial_day_ahead_truncates() {
        assert_eq!(days_until("2021-09-02", datetime!(2021-09-01 14:00)).unwrap(), 0);
        assert_eq!(days_until("2021-09-03", datetime!(2021-09-01 14:00)).unwrap(), 1);
    }

    #[test]
    fn midnight_counts_exact_days() {
        assert_eq!(days_until("2021-09-08", datetime!(2021-09-01 00:00)).unwrap(), 7);
    }

    #[test]
    fn past_dates_are_negative() {
        assert_eq!(days_until("2021-08-29", datetime!(2021-09-01 09:00)).unwrap(), -3);
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_booking_date("01/09/2021").is_err());
    }
}
