//! Operating-hours policy for a storage vendor.
//!
//! An [`OperatingHoursPolicy`] is an immutable description of when a vendor
//! accepts bookings: either round-the-clock (`is_24x7`), or a same-day
//! open/close window on a set of weekdays. Policies arrive from a remote
//! vendor record, so the type deserializes from the record's JSON shape and
//! missing hours fall back to documented defaults (09:00–20:00) rather than
//! being handled implicitly at each call site.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Opening time applied when a non-24×7 policy omits `open_time` (09:00).
pub fn default_open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Closing time applied when a non-24×7 policy omits `close_time` (20:00).
pub fn default_close_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).unwrap_or(NaiveTime::MIN)
}

// ── Day tokens ──────────────────────────────────────────────────────────────

/// Fixed, locale-independent weekday token ("Mon".."Sun").
///
/// Vendor records store open days as these three-letter abbreviations; the
/// same tokens appear verbatim in user-facing closed-day messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayToken {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayToken {
    /// The three-letter abbreviation for this token.
    pub fn as_str(self) -> &'static str {
        match self {
            DayToken::Mon => "Mon",
            DayToken::Tue => "Tue",
            DayToken::Wed => "Wed",
            DayToken::Thu => "Thu",
            DayToken::Fri => "Fri",
            DayToken::Sat => "Sat",
            DayToken::Sun => "Sun",
        }
    }
}

impl std::fmt::Display for DayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Weekday> for DayToken {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayToken::Mon,
            Weekday::Tue => DayToken::Tue,
            Weekday::Wed => DayToken::Wed,
            Weekday::Thu => DayToken::Thu,
            Weekday::Fri => DayToken::Fri,
            Weekday::Sat => DayToken::Sat,
            Weekday::Sun => DayToken::Sun,
        }
    }
}

// ── Policy ──────────────────────────────────────────────────────────────────

/// When a vendor accepts bookings.
///
/// `open_days` preserves the order the vendor record stored the days in;
/// closed-day messages list them comma-joined in exactly that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHoursPolicy {
    /// No hour or day restriction at all.
    #[serde(default)]
    pub is_24x7: bool,
    /// Wall-clock opening time; 09:00 when absent (ignored when 24×7).
    #[serde(default)]
    pub open_time: Option<NaiveTime>,
    /// Wall-clock closing time; 20:00 when absent (ignored when 24×7).
    #[serde(default)]
    pub close_time: Option<NaiveTime>,
    /// Weekdays the vendor operates (ignored when 24×7).
    #[serde(default)]
    pub open_days: Vec<DayToken>,
}

impl OperatingHoursPolicy {
    /// Round-the-clock policy with no day or hour restriction.
    pub fn always_open() -> Self {
        Self {
            is_24x7: true,
            open_time: None,
            close_time: None,
            open_days: Vec::new(),
        }
    }

    /// Same-day window on the given days, with explicit open/close hours.
    pub fn with_hours(open: NaiveTime, close: NaiveTime, open_days: Vec<DayToken>) -> Self {
        Self {
            is_24x7: false,
            open_time: Some(open),
            close_time: Some(close),
            open_days,
        }
    }

    /// The effective opening time, with the default applied.
    pub fn resolved_open(&self) -> NaiveTime {
        self.open_time.unwrap_or_else(default_open_time)
    }

    /// The effective closing time, with the default applied.
    pub fn resolved_close(&self) -> NaiveTime {
        self.close_time.unwrap_or_else(default_close_time)
    }

    /// Check the policy invariant: a non-24×7 window must open strictly
    /// before it closes. Overnight windows (e.g. 22:00–06:00) are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when the resolved opening time
    /// is at or after the resolved closing time.
    pub fn validate(&self) -> Result<()> {
        if self.is_24x7 {
            return Ok(());
        }
        let open = self.resolved_open();
        let close = self.resolved_close();
        if open >= close {
            return Err(EngineError::InvalidPolicy(format!(
                "open time {} must be before close time {}",
                fmt_hm(open),
                fmt_hm(close),
            )));
        }
        Ok(())
    }

    /// The open days comma-joined in stored order, for user-facing messages.
    pub(crate) fn open_days_joined(&self) -> String {
        self.open_days
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Whether the vendor operates at all on `date`.
///
/// A 24×7 vendor is open on every date; otherwise the date's weekday token
/// must be a member of the policy's `open_days`. Total over all valid dates.
pub fn is_open_on_day(date: NaiveDate, policy: &OperatingHoursPolicy) -> bool {
    if policy.is_24x7 {
        return true;
    }
    policy.open_days.contains(&DayToken::from(date.weekday()))
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Whole minutes since midnight for a wall-clock time.
///
/// Slot and validation arithmetic works in this space so that adding a
/// duration can exceed 24:00 without the wraparound `NaiveTime` addition has.
pub(crate) fn minutes_from_midnight(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight()) / 60
}

/// Wall-clock time for a minutes-from-midnight value in `0..1440`.
pub(crate) fn time_from_minutes(minutes: i64) -> NaiveTime {
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Format a time as `HH:MM` for user-facing messages.
pub(crate) fn fmt_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Reject non-positive booking durations before any slot arithmetic runs.
pub(crate) fn check_duration(duration_hours: i64) -> Result<()> {
    if duration_hours <= 0 {
        return Err(EngineError::InvalidDuration(format!(
            "duration must be at least 1 hour, got {duration_hours}"
        )));
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
