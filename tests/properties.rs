//! Property-based tests for the calculation engine.
//!
//! These properties hold for any pasted input, not just the curated
//! fixtures in the unit tests:
//! - Summaries are deterministic for a fixed input
//! - Every summary field is non-negative
//! - Absent days contribute nothing to any bucket
//! - Regular and Sunday overtime partition the valid entries

use proptest::prelude::*;
use rust_decimal::Decimal;

use attendance_engine::calculation::{
    calculate_regular_overtime, calculate_summary, calculate_total_sunday_overtime,
};
use attendance_engine::models::{Holidays, TimeEntry};

/// A clock time rendered in the 12-hour paste format.
fn arb_clock_time() -> impl Strategy<Value = String> {
    (1u32..=12, 0u32..60, prop::bool::ANY).prop_map(|(hour, minute, pm)| {
        format!("{}:{:02} {}", hour, minute, if pm { "PM" } else { "AM" })
    })
}

/// A single day's entry: worked, absent, or garbled.
fn arb_entry(date: &'static str) -> impl Strategy<Value = TimeEntry> {
    prop_oneof![
        4 => (arb_clock_time(), arb_clock_time()).prop_map(move |(time_in, time_out)| TimeEntry {
            date: date.to_string(),
            time_in,
            time_out,
        }),
        1 => Just(TimeEntry {
            date: date.to_string(),
            time_in: "-".to_string(),
            time_out: "-".to_string(),
        }),
        1 => Just(TimeEntry {
            date: date.to_string(),
            time_in: "not a time".to_string(),
            time_out: "also not".to_string(),
        }),
    ]
}

/// A week of entries, Monday 03/04/2024 through Sunday 03/10/2024.
fn arb_week() -> impl Strategy<Value = Vec<TimeEntry>> {
    (
        arb_entry("03/04/2024"),
        arb_entry("03/05/2024"),
        arb_entry("03/06/2024"),
        arb_entry("03/07/2024"),
        arb_entry("03/08/2024"),
        arb_entry("03/09/2024"),
        arb_entry("03/10/2024"),
    )
        .prop_map(|(a, b, c, d, e, f, g)| vec![a, b, c, d, e, f, g])
}

/// A holiday classification drawn from the same week's dates.
fn arb_holidays() -> impl Strategy<Value = Holidays> {
    static DATES: [&str; 7] = [
        "03/04/2024",
        "03/05/2024",
        "03/06/2024",
        "03/07/2024",
        "03/08/2024",
        "03/09/2024",
        "03/10/2024",
    ];
    prop::collection::vec((prop::sample::select(&DATES[..]), 0usize..3), 0..4).prop_map(
        |picks| {
            let mut holidays = Holidays::default();
            for (date, category) in picks {
                // Later picks of the same date overwrite earlier ones, so the
                // categories stay disjoint like a validated calendar.
                holidays.regular.remove(date);
                holidays.special_non_working.remove(date);
                holidays.special_working.remove(date);
                match category {
                    0 => holidays.regular.insert(date.to_string()),
                    1 => holidays.special_non_working.insert(date.to_string()),
                    _ => holidays.special_working.insert(date.to_string()),
                };
            }
            holidays
        },
    )
}

proptest! {
    /// The same entries and holidays always produce the same summary.
    #[test]
    fn summary_is_deterministic(entries in arb_week(), holidays in arb_holidays()) {
        let first = calculate_summary(&entries, &holidays).unwrap();
        let second = calculate_summary(&entries, &holidays).unwrap();
        prop_assert_eq!(first, second);
    }

    /// No summary field ever goes negative, whatever the input.
    #[test]
    fn summary_fields_are_non_negative(entries in arb_week(), holidays in arb_holidays()) {
        let summary = calculate_summary(&entries, &holidays).unwrap();
        prop_assert!(summary.total_regular_work_days >= Decimal::ZERO);
        prop_assert!(summary.total_sunday_days >= Decimal::ZERO);
        prop_assert!(summary.total_sunday_overtime >= Decimal::ZERO);
        prop_assert!(summary.total_regular_overtime >= Decimal::ZERO);
        prop_assert!(summary.total_regular_holiday_overtime >= Decimal::ZERO);
    }

    /// Day counts only ever move in half-day steps.
    #[test]
    fn day_counts_are_half_day_multiples(entries in arb_week(), holidays in arb_holidays()) {
        let summary = calculate_summary(&entries, &holidays).unwrap();
        let half = Decimal::new(5, 1);
        prop_assert_eq!(summary.total_regular_work_days % half, Decimal::ZERO);
        prop_assert_eq!(summary.total_sunday_days % half, Decimal::ZERO);
    }

    /// A week of pure absences yields the all-zero summary, regardless of
    /// how the holidays are classified.
    #[test]
    fn absences_contribute_nothing(holidays in arb_holidays()) {
        let entries: Vec<TimeEntry> = (4..=10)
            .map(|day| TimeEntry {
                date: format!("03/{:02}/2024", day),
                time_in: "-".to_string(),
                time_out: "-".to_string(),
            })
            .collect();

        let summary = calculate_summary(&entries, &holidays).unwrap();
        prop_assert_eq!(summary.total_regular_work_days, Decimal::ZERO);
        prop_assert_eq!(summary.total_sunday_days, Decimal::ZERO);
        prop_assert_eq!(summary.total_sunday_overtime, Decimal::ZERO);
        prop_assert_eq!(summary.total_regular_overtime, Decimal::ZERO);
        prop_assert_eq!(summary.total_regular_holiday_overtime, Decimal::ZERO);
        prop_assert_eq!(summary.total_special_non_working_holiday, 0);
        prop_assert_eq!(summary.total_special_working_holiday, 0);
    }

    /// Regular and Sunday overtime split the entries without overlap: their
    /// sum equals the overtime computed over all entries at once.
    #[test]
    fn overtime_buckets_partition_the_week(entries in arb_week()) {
        let regular = calculate_regular_overtime(&entries).unwrap();
        let sunday = calculate_total_sunday_overtime(&entries).unwrap();

        let sundays: Vec<TimeEntry> = entries
            .iter()
            .filter(|entry| entry.date == "03/10/2024")
            .cloned()
            .collect();
        let weekdays: Vec<TimeEntry> = entries
            .iter()
            .filter(|entry| entry.date != "03/10/2024")
            .cloned()
            .collect();

        prop_assert_eq!(regular, calculate_regular_overtime(&weekdays).unwrap());
        prop_assert_eq!(sunday, calculate_total_sunday_overtime(&sundays).unwrap());
    }

    /// Holiday unit counts are bounded by what the week can produce: at most
    /// two pay units per regular holiday and one per special holiday.
    #[test]
    fn holiday_units_are_bounded(entries in arb_week(), holidays in arb_holidays()) {
        let summary = calculate_summary(&entries, &holidays).unwrap();
        prop_assert!(summary.total_regular_holiday <= 2 * holidays.regular.len() as u32);
        prop_assert!(
            summary.total_special_non_working_holiday
                <= holidays.special_non_working.len() as u32
        );
        prop_assert!(
            summary.total_special_working_holiday <= holidays.special_working.len() as u32
        );
    }
}
