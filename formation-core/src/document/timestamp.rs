//! The "Filed on" stamp and the clock it reads.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use tracing::debug;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Renders the "Filed on" stamp as `MM/DD/YYYY hh:mm:ss AM|PM`.
///
/// Month and day come from `now`; the year is always `year`, whatever the
/// real date. Hours above 12 have 12 subtracted and every hour is printed
/// zero-padded, so midnight shows as `00` (not `12`) and noon as `12 PM`.
pub fn format_filing_timestamp(
    now: &NaiveDateTime,
    year: i32,
) -> String {
    let hour = now.hour();
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };

    if hour == 0 {
        debug!("midnight hour renders as 00 AM");
    }

    format!(
        "{:02}/{:02}/{year:04} {:02}:{:02}:{:02} {meridiem}",
        now.month(),
        now.day(),
        display_hour,
        now.minute(),
        now.second(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2031, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn afternoon_hour_converted_to_twelve_hour_clock() {
        assert_eq!(
            format_filing_timestamp(&at(3, 7, 13, 5, 9), 2025),
            "03/07/2025 01:05:09 PM"
        );
    }

    #[test]
    fn year_is_fixed_regardless_of_date() {
        let stamp = format_filing_timestamp(&at(12, 31, 9, 0, 0), 2025);

        assert_eq!(stamp, "12/31/2025 09:00:00 AM");
    }

    #[test]
    fn midnight_renders_as_double_zero() {
        assert_eq!(
            format_filing_timestamp(&at(1, 1, 0, 30, 0), 2025),
            "01/01/2025 00:30:00 AM"
        );
    }

    #[test]
    fn noon_renders_as_twelve_pm() {
        assert_eq!(
            format_filing_timestamp(&at(6, 15, 12, 0, 1), 2025),
            "06/15/2025 12:00:01 PM"
        );
    }

    #[test]
    fn last_hour_of_day() {
        assert_eq!(
            format_filing_timestamp(&at(6, 15, 23, 59, 59), 2025),
            "06/15/2025 11:59:59 PM"
        );
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = at(4, 2, 8, 8, 8);

        assert_eq!(FixedClock(instant).now(), instant);
    }
}
