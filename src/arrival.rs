//! Arrival time and parking duration arithmetic.
//!
//! Pure functions over `NaiveDateTime`; the kiosk runs in local wall-clock
//! time and never leaves it.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Minute granularity of the arrival time picker
pub const MINUTE_STEP: u32 = 15;

/// Hours the default arrival proposal lies in the past
const DEFAULT_OFFSET_HOURS: i64 = 3;

/// Elapsed parking time, split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkedDuration {
    pub hours: u32,
    pub minutes: u32,
}

/// Proposed arrival time: three hours before `now`, minutes truncated down
/// to the nearest quarter hour, seconds dropped.
pub fn default_arrival(now: NaiveDateTime) -> NaiveDateTime {
    let t = now - Duration::hours(DEFAULT_OFFSET_HOURS);
    t.with_minute(t.minute() - t.minute() % MINUTE_STEP)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .expect("truncated time components are in range")
}

/// Whole hours and remaining minutes between arrival and now. An arrival in
/// the future clamps to zero rather than going negative.
pub fn parked_duration(arrival: NaiveDateTime, now: NaiveDateTime) -> ParkedDuration {
    let minutes = (now - arrival).num_minutes().max(0);
    ParkedDuration {
        hours: (minutes / 60) as u32,
        minutes: (minutes % 60) as u32,
    }
}

/// Selection bound for the arrival picker: increments are allowed only while
/// the candidate stays at or before `now`.
pub fn fits_before(candidate: NaiveDateTime, now: NaiveDateTime) -> bool {
    candidate <= now
}

/// Parking fee in cents: every started hour is billed, a stay that has not
/// reached a full minute still counts as one started hour, and the daily cap
/// bounds the total.
pub fn cost_cents(duration: ParkedDuration, rate_cents_per_hour: u32, daily_cap_cents: u32) -> u32 {
    let mut started_hours = duration.hours;
    if duration.minutes > 0 || duration.hours == 0 {
        started_hours += 1;
    }
    (started_hours * rate_cents_per_hour).min(daily_cap_cents)
}

/// Euros-and-cents formatting for tariff display
pub fn format_cents(cents: u32) -> String {
    format!("{},{:02} €", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_default_arrival_floors_to_quarter_hour() {
        assert_eq!(default_arrival(dt(1, 10, 7)), dt(1, 7, 0));
        assert_eq!(default_arrival(dt(1, 10, 29)), dt(1, 7, 15));
        assert_eq!(default_arrival(dt(1, 10, 45)), dt(1, 7, 45));
    }

    #[test]
    fn test_default_arrival_drops_seconds() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 7, 42)
            .unwrap();
        assert_eq!(default_arrival(now), dt(1, 7, 0));
    }

    #[test]
    fn test_default_arrival_crosses_midnight() {
        assert_eq!(default_arrival(dt(2, 1, 20)), dt(1, 22, 15));
    }

    #[test]
    fn test_parked_duration_splits_hours_and_minutes() {
        let d = parked_duration(dt(1, 7, 0), dt(1, 9, 35));
        assert_eq!(d, ParkedDuration { hours: 2, minutes: 35 });
    }

    #[test]
    fn test_parked_duration_clamps_future_arrival() {
        let d = parked_duration(dt(1, 11, 0), dt(1, 10, 0));
        assert_eq!(d, ParkedDuration { hours: 0, minutes: 0 });
    }

    #[test]
    fn test_fits_before_bounds_selection() {
        let now = dt(1, 10, 0);
        assert!(fits_before(dt(1, 10, 0), now));
        assert!(fits_before(dt(1, 9, 45), now));
        assert!(!fits_before(dt(1, 10, 15), now));
        assert!(!fits_before(dt(2, 9, 0), now));
    }

    #[test]
    fn test_cost_bills_started_hours() {
        let rate = 150;
        let cap = 1200;
        assert_eq!(cost_cents(ParkedDuration { hours: 2, minutes: 35 }, rate, cap), 450);
        assert_eq!(cost_cents(ParkedDuration { hours: 2, minutes: 0 }, rate, cap), 300);
        // Even a zero-length stay bills one hour
        assert_eq!(cost_cents(ParkedDuration { hours: 0, minutes: 0 }, rate, cap), 150);
    }

    #[test]
    fn test_cost_respects_daily_cap() {
        assert_eq!(cost_cents(ParkedDuration { hours: 30, minutes: 1 }, 150, 1200), 1200);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(450), "4,50 €");
        assert_eq!(format_cents(1200), "12,00 €");
        assert_eq!(format_cents(5), "0,05 €");
    }
}
