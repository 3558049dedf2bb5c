//! Net work-duration calculation.
//!
//! This module turns one raw clock-in/clock-out pair into net worked hours,
//! applying the overnight rollover, the identical-time 24-hour special case,
//! and the conditional lunch-break deduction.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::error::EngineResult;
use crate::models::is_valid_time_entry;

use super::clock_time::parse_clock_time;
use super::dates::parse_entry_date;

/// Hours credited for a shift whose clock-out equals its clock-in wall-clock time.
pub const FULL_SHIFT_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Minutes deducted when a shift overlaps the fixed lunch window.
pub const LUNCH_BREAK_MINUTES: i64 = 60;

const MINUTES_IN_HOUR: i64 = 60;

/// Calculates net worked hours for one time entry.
///
/// Returns `0` immediately when either field is empty or the absence
/// sentinel `"-"`. Otherwise the clock-in is parsed against the entry date
/// and the clock-out against the clock-in instant, so an out-time at or
/// before the in-time rolls into the next calendar day.
///
/// A clock-out landing exactly 24 hours after the clock-in (the identical
/// wall-clock time the next day) is treated as a full 24-hour shift with no
/// deductions.
///
/// The fixed 60-minute lunch break is subtracted only when the shift
/// overlaps the 12:00 PM–1:00 PM window on the entry date, i.e. when the
/// clock-in is before 1:00 PM and the clock-out after 12:00 PM. A shift
/// ending exactly at 12:00 PM does not overlap the window, which is why an
/// 8:00 AM–12:00 PM half day keeps its full 4 hours.
///
/// Any parse failure is logged as a warning and degrades to `0` hours for
/// this entry only; one bad row never aborts a batch.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_work_hours;
/// use rust_decimal::Decimal;
///
/// // 9 raw hours minus the lunch break
/// let hours = calculate_work_hours("8:00 AM", "5:00 PM", "03/05/2024");
/// assert_eq!(hours, Decimal::from(8));
///
/// // Absent day
/// assert_eq!(calculate_work_hours("-", "-", "03/05/2024"), Decimal::ZERO);
/// ```
pub fn calculate_work_hours(time_in: &str, time_out: &str, date: &str) -> Decimal {
    if !is_valid_time_entry(time_in, time_out) {
        return Decimal::ZERO;
    }

    match compute_work_hours(time_in, time_out, date) {
        Ok(hours) => hours,
        Err(error) => {
            warn!(%error, date, time_in, time_out, "Treating unparseable time entry as zero hours");
            Decimal::ZERO
        }
    }
}

fn compute_work_hours(time_in: &str, time_out: &str, date: &str) -> EngineResult<Decimal> {
    let anchor = parse_entry_date(date)?;
    let clock_in = parse_clock_time(time_in, anchor, None)?;
    let clock_out = parse_clock_time(time_out, anchor, Some(clock_in))?;

    let total_minutes = (clock_out - clock_in).num_minutes();

    // Identical wall-clock in/out rolled over a full day: a 24-hour shift.
    if total_minutes == 24 * MINUTES_IN_HOUR {
        return Ok(FULL_SHIFT_HOURS);
    }

    let lunch_start = anchor.and_time(NaiveTime::from_hms_opt(12, 0, 0).expect("valid noon time"));
    let lunch_end = anchor.and_time(NaiveTime::from_hms_opt(13, 0, 0).expect("valid 1 PM time"));

    let mut net_minutes = total_minutes;
    if clock_in < lunch_end && clock_out > lunch_start {
        net_minutes -= LUNCH_BREAK_MINUTES;
    }

    let hours = Decimal::new(net_minutes.max(0), 0) / Decimal::new(MINUTES_IN_HOUR, 0);
    Ok(hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // WH-001: standard day shift with lunch deduction
    // ==========================================================================
    #[test]
    fn test_wh_001_standard_day_shift() {
        // 9 raw hours spanning the lunch window
        let hours = calculate_work_hours("8:00 AM", "5:00 PM", "03/05/2024");
        assert_eq!(hours, dec("8"));
    }

    // ==========================================================================
    // WH-002: half day ending exactly at the lunch window start
    // ==========================================================================
    #[test]
    fn test_wh_002_half_day_keeps_full_hours() {
        let hours = calculate_work_hours("8:00 AM", "12:00 PM", "03/05/2024");
        assert_eq!(hours, dec("4"));
    }

    // ==========================================================================
    // WH-003: early shift overlapping the lunch window
    // ==========================================================================
    #[test]
    fn test_wh_003_early_shift_overlapping_lunch() {
        let hours = calculate_work_hours("6:00 AM", "3:00 PM", "03/05/2024");
        assert_eq!(hours, dec("8"));
    }

    // ==========================================================================
    // WH-004: overnight shift, no lunch overlap
    // ==========================================================================
    #[test]
    fn test_wh_004_overnight_shift() {
        let hours = calculate_work_hours("10:00 PM", "6:00 AM", "03/05/2024");
        assert_eq!(hours, dec("8"));
    }

    // ==========================================================================
    // WH-005: identical in/out is a 24-hour shift
    // ==========================================================================
    #[test]
    fn test_wh_005_identical_times_full_shift() {
        let hours = calculate_work_hours("5:00 AM", "5:00 AM", "03/05/2024");
        assert_eq!(hours, dec("24"));
    }

    // ==========================================================================
    // WH-006: absence sentinel and empty fields
    // ==========================================================================
    #[test]
    fn test_wh_006_absent_entries_are_zero() {
        assert_eq!(calculate_work_hours("-", "-", "03/05/2024"), Decimal::ZERO);
        assert_eq!(
            calculate_work_hours("8:00 AM", "-", "03/05/2024"),
            Decimal::ZERO
        );
        assert_eq!(calculate_work_hours("", "", "03/05/2024"), Decimal::ZERO);
    }

    // ==========================================================================
    // WH-007: malformed input degrades to zero
    // ==========================================================================
    #[test]
    fn test_wh_007_malformed_input_degrades_to_zero() {
        assert_eq!(
            calculate_work_hours("eight", "5:00 PM", "03/05/2024"),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_work_hours("8:00 AM", "5:00 PM", "garbage"),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_early_shift_to_midnight_deducts_lunch() {
        // 5:00 AM to midnight (rolled over): 19 raw hours, lunch overlapped
        let hours = calculate_work_hours("5:00 AM", "12:00 MN", "03/05/2024");
        assert_eq!(hours, dec("18"));
    }

    #[test]
    fn test_afternoon_shift_no_lunch_overlap() {
        // Starts exactly at the window end
        let hours = calculate_work_hours("1:00 PM", "6:00 PM", "03/05/2024");
        assert_eq!(hours, dec("5"));
    }

    #[test]
    fn test_shift_inside_lunch_window_is_floored_at_zero() {
        // 30 raw minutes entirely inside the window, deduction exceeds span
        let hours = calculate_work_hours("12:15 PM", "12:45 PM", "03/05/2024");
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_partial_hours_round_to_two_decimals() {
        // 8:00 AM to 4:10 PM = 490 minutes - 60 lunch = 430 minutes
        let hours = calculate_work_hours("8:00 AM", "4:10 PM", "03/05/2024");
        assert_eq!(hours, dec("7.17"));
    }

    #[test]
    fn test_noon_alias_matches_plain_noon() {
        let plain = calculate_work_hours("8:00 AM", "12:00 PM", "03/05/2024");
        let alias = calculate_work_hours("8:00 AM", "12:00 NN", "03/05/2024");
        assert_eq!(plain, alias);
    }

    #[test]
    fn test_result_is_never_negative() {
        let hours = calculate_work_hours("12:00 PM", "12:30 PM", "03/05/2024");
        assert!(hours >= Decimal::ZERO);
    }
}
