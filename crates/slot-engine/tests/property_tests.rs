//! Property tests for the availability engine's invariants.

use chrono::{NaiveDate, NaiveTime, Timelike};
use proptest::prelude::*;
use slot_engine::{generate_slots, is_open_on_day, validate, DayToken, OperatingHoursPolicy};

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

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Day capped at 28 so every (year, month) pair is a real date.
    (2024i32..2032, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| hm(h, m))
}

proptest! {
    /// A 24×7 vendor accepts every window, whatever the date and time.
    #[test]
    fn round_the_clock_vendor_never_rejects(
        date in arb_date(),
        start in arb_time(),
        duration in 1i64..=48,
    ) {
        let policy = OperatingHoursPolicy::always_open();
        let verdict = validate(date, start, duration, &policy).unwrap();
        prop_assert!(verdict.is_valid);
    }

    /// On a closed day the rejection is always the closed-day message,
    /// regardless of the requested time or duration.
    #[test]
    fn closed_day_rejection_ignores_time_and_duration(
        date in arb_date(),
        start in arb_time(),
        duration in 1i64..=48,
    ) {
        let policy = weekday_policy();
        prop_assume!(!is_open_on_day(date, &policy));

        let verdict = validate(date, start, duration, &policy).unwrap();
        prop_assert!(!verdict.is_valid);
        prop_assert!(
            verdict.error_message.starts_with("Vendor is closed on"),
            "unexpected message: {}",
            verdict.error_message
        );
    }

    /// Availability is monotone: once a candidate cannot fit the duration,
    /// no later candidate can either (closing time is a fixed upper bound).
    #[test]
    fn availability_is_monotone_within_the_day(duration in 1i64..=24) {
        let slots = generate_slots(&weekday_policy(), None, duration).unwrap();

        let mut seen_capped = false;
        for slot in &slots {
            if seen_capped {
                prop_assert!(!slot.is_available, "availability resumed at {}", slot.time);
            }
            seen_capped |= !slot.is_available;
        }
    }

    /// A slot is available exactly when the window ends at or before close:
    /// ending at 20:00 sharp is allowed, one hour later is not.
    #[test]
    fn boundary_slot_ends_exactly_at_close(duration in 1i64..=11) {
        let slots = generate_slots(&weekday_policy(), None, duration).unwrap();

        for slot in &slots {
            let fits = i64::from(slot.time.hour()) + duration <= 20;
            prop_assert_eq!(
                slot.is_available,
                fits,
                "slot {} with {}h",
                slot.time,
                duration
            );
        }
    }

    /// Enumeration and validation agree: an available slot validates, a
    /// capped slot is rejected for the same duration.
    #[test]
    fn slot_verdicts_match_validation(duration in 1i64..=12) {
        let policy = weekday_policy();
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let slots = generate_slots(&policy, Some(monday), duration).unwrap();

        for slot in &slots {
            let verdict = validate(monday, slot.time, duration, &policy).unwrap();
            prop_assert_eq!(verdict.is_valid, slot.is_available);
        }
    }
}
