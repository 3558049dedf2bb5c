//! Holiday classification model.
//!
//! This module defines the [`Holidays`] structure holding the three
//! mutually-exclusive holiday categories, the membership predicates used by
//! the aggregators, and the pure reclassification transition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The three holiday pay categories.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HolidayKind;
///
/// let kind = HolidayKind::Regular;
/// assert_eq!(format!("{:?}", kind), "Regular");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Regular holiday: 200% pay when worked, 100% when attendance is
    /// maintained on the surrounding workdays.
    Regular,
    /// Special non-working holiday: paid only if worked, at a premium rate.
    SpecialNonWorking,
    /// Special working holiday: paid only if worked, at the regular rate.
    SpecialWorking,
}

/// The holiday classification for a payroll period.
///
/// Holds three disjoint sets of `MM/dd/yyyy` date strings. A date appearing
/// in none of the sets is simply not a holiday. Disjointness is maintained
/// by [`Holidays::with_classification`] and validated on configuration load;
/// the membership predicates themselves tolerate any input.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{HolidayKind, Holidays};
///
/// let holidays = Holidays::default().with_classification("12/25/2024", HolidayKind::Regular);
/// assert!(holidays.is_regular_holiday("12/25/2024"));
/// assert!(!holidays.is_holiday_day("12/26/2024"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holidays {
    /// Dates classified as regular holidays.
    #[serde(default)]
    pub regular: BTreeSet<String>,
    /// Dates classified as special non-working holidays.
    #[serde(default)]
    pub special_non_working: BTreeSet<String>,
    /// Dates classified as special working holidays.
    #[serde(default)]
    pub special_working: BTreeSet<String>,
}

impl Holidays {
    /// Returns `true` if the date is classified as a regular holiday.
    pub fn is_regular_holiday(&self, date: &str) -> bool {
        self.regular.contains(date)
    }

    /// Returns `true` if the date is classified as a special non-working holiday.
    pub fn is_special_non_working_holiday(&self, date: &str) -> bool {
        self.special_non_working.contains(date)
    }

    /// Returns `true` if the date is classified as a special working holiday.
    pub fn is_special_working_holiday(&self, date: &str) -> bool {
        self.special_working.contains(date)
    }

    /// Returns `true` if the date belongs to any of the three categories.
    pub fn is_holiday_day(&self, date: &str) -> bool {
        self.is_regular_holiday(date)
            || self.is_special_non_working_holiday(date)
            || self.is_special_working_holiday(date)
    }

    /// Returns the classification of a date, if any.
    pub fn classification(&self, date: &str) -> Option<HolidayKind> {
        if self.is_regular_holiday(date) {
            Some(HolidayKind::Regular)
        } else if self.is_special_non_working_holiday(date) {
            Some(HolidayKind::SpecialNonWorking)
        } else if self.is_special_working_holiday(date) {
            Some(HolidayKind::SpecialWorking)
        } else {
            None
        }
    }

    /// Toggles the classification of a date, returning a new structure.
    ///
    /// If the date is already in the requested category it is removed
    /// (the date becomes a plain workday); otherwise it is moved into the
    /// requested category and removed from the other two. The receiver is
    /// never mutated, which keeps the three sets free of aliasing bugs when
    /// the caller holds snapshots.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{HolidayKind, Holidays};
    ///
    /// let first = Holidays::default().with_classification("12/25/2024", HolidayKind::Regular);
    /// let moved = first.with_classification("12/25/2024", HolidayKind::SpecialWorking);
    ///
    /// assert!(first.is_regular_holiday("12/25/2024"));
    /// assert!(moved.is_special_working_holiday("12/25/2024"));
    /// assert!(!moved.is_regular_holiday("12/25/2024"));
    ///
    /// // Toggling the same category off again clears the date entirely.
    /// let cleared = moved.with_classification("12/25/2024", HolidayKind::SpecialWorking);
    /// assert!(!cleared.is_holiday_day("12/25/2024"));
    /// ```
    #[must_use]
    pub fn with_classification(&self, date: &str, kind: HolidayKind) -> Holidays {
        let mut next = self.clone();
        let already_classified = match kind {
            HolidayKind::Regular => next.regular.contains(date),
            HolidayKind::SpecialNonWorking => next.special_non_working.contains(date),
            HolidayKind::SpecialWorking => next.special_working.contains(date),
        };

        next.regular.remove(date);
        next.special_non_working.remove(date);
        next.special_working.remove(date);

        if !already_classified {
            let target = match kind {
                HolidayKind::Regular => &mut next.regular,
                HolidayKind::SpecialNonWorking => &mut next.special_non_working,
                HolidayKind::SpecialWorking => &mut next.special_working,
            };
            target.insert(date.to_string());
        }

        next
    }
}
