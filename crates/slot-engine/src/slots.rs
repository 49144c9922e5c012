//! Hourly time-slot enumeration for a vendor's day.
//!
//! Produces the list a booking screen renders: one candidate start time per
//! whole hour of the operating window, each with a verdict for the requested
//! duration. Slots that exist but cannot fit the duration stay in the list,
//! marked unavailable with the maximum bookable hours from that start.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::Result;
use crate::policy::{
    check_duration, is_open_on_day, minutes_from_midnight, time_from_minutes,
    OperatingHoursPolicy,
};

/// A candidate booking start time with its availability verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlot {
    /// Candidate start time.
    pub time: NaiveTime,
    /// Whether a booking of the requested duration can start here without
    /// running past closing time.
    pub is_available: bool,
    /// Empty when available; otherwise a user-facing explanation.
    pub reason: String,
}

impl TimeSlot {
    fn available(time: NaiveTime) -> Self {
        Self {
            time,
            is_available: true,
            reason: String::new(),
        }
    }

    fn unavailable(time: NaiveTime, reason: String) -> Self {
        Self {
            time,
            is_available: false,
            reason,
        }
    }
}

/// Enumerate the start-time slots for a day.
///
/// # Arguments
///
/// * `policy` — The vendor's operating-hours policy
/// * `date` — The booking date; when given and the vendor is closed that
///   day, the result is an empty list (closed is an answer, not an error).
///   When `None`, slots are enumerated from the hours alone.
/// * `duration_hours` — The requested booking duration in whole hours
///
/// # Behavior
///
/// For a 24×7 vendor the result is exactly 24 slots (00:00 through 23:00),
/// all available regardless of duration. Otherwise candidates start at the
/// resolved opening time and step forward one hour while strictly before
/// closing; a candidate is available iff the window would end at or before
/// closing time (ending exactly at close is allowed). Unavailable slots
/// carry the reason `"Max {N}h from this time"` where `N` is the whole
/// hours remaining to close.
///
/// The result is ordered by ascending start time and is a pure function of
/// the arguments.
///
/// # Errors
///
/// Returns [`crate::EngineError::InvalidDuration`] when `duration_hours`
/// is not positive, or [`crate::EngineError::InvalidPolicy`] when the
/// policy's opening time is not strictly before its closing time.
pub fn generate_slots(
    policy: &OperatingHoursPolicy,
    date: Option<NaiveDate>,
    duration_hours: i64,
) -> Result<Vec<TimeSlot>> {
    check_duration(duration_hours)?;
    policy.validate()?;

    if let Some(date) = date {
        if !is_open_on_day(date, policy) {
            return Ok(Vec::new());
        }
    }

    if policy.is_24x7 {
        // Round-the-clock vendors accept any duration from any whole hour.
        return Ok((0..24)
            .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
            .map(TimeSlot::available)
            .collect());
    }

    let open = minutes_from_midnight(policy.resolved_open());
    let close = minutes_from_midnight(policy.resolved_close());
    let duration_minutes = duration_hours * 60;

    let mut slots = Vec::new();
    let mut candidate = open;
    while candidate < close {
        let time = time_from_minutes(candidate);
        if candidate + duration_minutes <= close {
            slots.push(TimeSlot::available(time));
        } else {
            let max_hours = (close - candidate) / 60;
            slots.push(TimeSlot::unavailable(
                time,
                format!("Max {max_hours}h from this time"),
            ));
        }
        candidate += 60;
    }

    Ok(slots)
}

// ── Tests ───────────────────────────────────────────────────────────────────
