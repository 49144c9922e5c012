//! Booking-window validation against an operating-hours policy.
//!
//! The last gate before a booking request leaves the device: checks run in
//! a fixed order (day, 24×7 bypass, hour bounds, duration fit) and stop at
//! the first failure. Failures are values with a message the caller shows
//! verbatim; nothing here panics or throws for a merely-bad booking.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::Result;
use crate::policy::{
    check_duration, fmt_hm, is_open_on_day, minutes_from_midnight, DayToken,
    OperatingHoursPolicy,
};

/// The outcome of checking a requested booking window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid; otherwise a user-facing explanation.
    pub error_message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    fn fail(message: String) -> Self {
        Self {
            is_valid: false,
            error_message: message,
        }
    }
}

/// Check whether a requested booking window is legal under a policy.
///
/// Checks short-circuit in order:
///
/// 1. the vendor must operate on the date's weekday;
/// 2. a 24×7 vendor accepts any window from here on;
/// 3. the start must lie inside `[open, close)` — both violations share the
///    message `"Selected time is outside operating hours (HH:MM - HH:MM)"`;
/// 4. the window must end at or before closing time; overruns report the
///    maximum whole hours still bookable from the chosen start.
///
/// All arithmetic is same-day wall-clock; inputs are assumed already
/// normalized to the vendor's local time.
///
/// # Errors
///
/// Returns [`crate::EngineError::InvalidDuration`] when `duration_hours`
/// is not positive, or [`crate::EngineError::InvalidPolicy`] when the
/// policy's opening time is not strictly before its closing time. Business
/// failures (closed day, bad start, overrun) are `Ok` carrying an invalid
/// [`ValidationResult`].
pub fn validate(
    date: NaiveDate,
    start_time: NaiveTime,
    duration_hours: i64,
    policy: &OperatingHoursPolicy,
) -> Result<ValidationResult> {
    check_duration(duration_hours)?;
    policy.validate()?;

    if !is_open_on_day(date, policy) {
        let day = DayToken::from(date.weekday());
        return Ok(ValidationResult::fail(format!(
            "Vendor is closed on {day}. Open days: {}",
            policy.open_days_joined()
        )));
    }

    // Round-the-clock vendors accept any window on any day.
    if policy.is_24x7 {
        return Ok(ValidationResult::ok());
    }

    let open = policy.resolved_open();
    let close = policy.resolved_close();

    // One bound check covers both starting too early and at/after close.
    if start_time < open || start_time >= close {
        return Ok(ValidationResult::fail(format!(
            "Selected time is outside operating hours ({} - {})",
            fmt_hm(open),
            fmt_hm(close),
        )));
    }

    // The window may end exactly at close, never after. Minutes arithmetic
    // keeps an overrun past midnight from wrapping back into range.
    let start_minutes = minutes_from_midnight(start_time);
    let close_minutes = minutes_from_midnight(close);
    if start_minutes + duration_hours * 60 > close_minutes {
        let max_hours = (close_minutes - start_minutes) / 60;
        return Ok(ValidationResult::fail(format!(
            "Booking duration exceeds closing time. Maximum {} hours available from {}",
            max_hours,
            fmt_hm(start_time),
        )));
    }

    Ok(ValidationResult::ok())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn weekday_policy() -> OperatingHoursPolicy {
        OperatingHoursPolicy::with_hours(
            hm(9, 0),
            hm(20, 0),
            vec![
                DayToken::Mon,
                DayToken::Tue,
                DayToken::Wed,
                DayToken::Thu,
                DayToken::Fri,
            ],
        )
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn closed_day_names_the_day_and_lists_open_days() {
        let saturday = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let result = validate(saturday, hm(10, 0), 2, &weekday_policy()).unwrap();
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message,
            "Vendor is closed on Sat. Open days: Mon, Tue, Wed, Thu, Fri"
        );
    }

    #[test]
    fn closed_day_wins_over_any_time_or_duration() {
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        // Start before open and an absurd duration: the day check fires first.
        let result = validate(sunday, hm(3, 0), 99, &weekday_policy()).unwrap();
        assert!(result.error_message.starts_with("Vendor is closed on Sun"));
    }

    #[test]
    fn start_before_open_is_outside_hours() {
        let result = validate(monday(), hm(8, 0), 1, &weekday_policy()).unwrap();
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message,
            "Selected time is outside operating hours (09:00 - 20:00)"
        );
    }

    #[test]
    fn start_at_close_is_outside_hours() {
        let result = validate(monday(), hm(20, 0), 1, &weekday_policy()).unwrap();
        assert_eq!(
            result.error_message,
            "Selected time is outside operating hours (09:00 - 20:00)"
        );
    }

    #[test]
    fn overrun_reports_truncated_hours_from_start() {
        // 18:30 + 2h = 20:30, past a 20:00 close; 1h30m remain, reported as 1.
        let result = validate(monday(), hm(18, 30), 2, &weekday_policy()).unwrap();
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message,
            "Booking duration exceeds closing time. Maximum 1 hours available from 18:30"
        );
    }

    #[test]
    fn window_ending_exactly_at_close_is_valid() {
        let result = validate(monday(), hm(18, 0), 2, &weekday_policy()).unwrap();
        assert!(result.is_valid);
        assert!(result.error_message.is_empty());
    }

    #[test]
    fn window_one_minute_past_close_is_invalid() {
        let policy = OperatingHoursPolicy::with_hours(hm(9, 0), hm(19, 59), vec![DayToken::Mon]);
        let result = validate(monday(), hm(18, 0), 2, &policy).unwrap();
        assert!(!result.is_valid);
    }

    #[test]
    fn always_open_vendor_accepts_everything() {
        let policy = OperatingHoursPolicy::always_open();
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let result = validate(sunday, hm(23, 0), 12, &policy).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn opening_slot_accepts_the_full_day() {
        let result = validate(monday(), hm(9, 0), 11, &weekday_policy()).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn contract_violations_are_errors_not_verdicts() {
        assert!(validate(monday(), hm(10, 0), 0, &weekday_policy()).is_err());
        let inverted =
            OperatingHoursPolicy::with_hours(hm(20, 0), hm(9, 0), vec![DayToken::Mon]);
        assert!(validate(monday(), hm(10, 0), 1, &inverted).is_err());
    }
}
