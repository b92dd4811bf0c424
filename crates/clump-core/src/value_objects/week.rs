//! Week value object - the Sunday-based week the calendar view scrolls by

use chrono::{Datelike, Days, NaiveDate};

/// A calendar week running Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        let days_since_sunday = u64::from(date.weekday().num_days_from_sunday());
        Self {
            // Subtracting at most 6 days from a valid date cannot underflow
            // except at NaiveDate::MIN, which no calendar will ever show.
            start: date
                .checked_sub_days(Days::new(days_since_sunday))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// First day of the week (Sunday)
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the week (Saturday)
    pub fn end(&self) -> NaiveDate {
        self.start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
    }

    /// The week before this one
    pub fn previous(&self) -> Self {
        Self {
            start: self
                .start
                .checked_sub_days(Days::new(7))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// The week after this one
    pub fn next(&self) -> Self {
        Self {
            start: self.start.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Check if a date falls within this week
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_a_wednesday() {
        // 2025-03-12 is a Wednesday; the week starts Sunday 2025-03-09
        let week = Week::containing(date(2025, 3, 12));
        assert_eq!(week.start(), date(2025, 3, 9));
        assert_eq!(week.end(), date(2025, 3, 15));
    }

    #[test]
    fn test_week_of_a_sunday_is_itself() {
        let week = Week::containing(date(2025, 3, 9));
        assert_eq!(week.start(), date(2025, 3, 9));
    }

    #[test]
    fn test_week_contains() {
        let week = Week::containing(date(2025, 3, 12));
        assert!(week.contains(date(2025, 3, 9)));
        assert!(week.contains(date(2025, 3, 15)));
        assert!(!week.contains(date(2025, 3, 16)));
        assert!(!week.contains(date(2025, 3, 8)));
    }

    #[test]
    fn test_week_navigation() {
        let week = Week::containing(date(2025, 3, 12));
        assert_eq!(week.previous().start(), date(2025, 3, 2));
        assert_eq!(week.next().start(), date(2025, 3, 16));
        assert_eq!(week.previous().next(), week);
    }

    #[test]
    fn test_week_spanning_month_boundary() {
        // 2025-04-01 is a Tuesday; its week starts Sunday 2025-03-30
        let week = Week::containing(date(2025, 4, 1));
        assert_eq!(week.start(), date(2025, 3, 30));
        assert_eq!(week.end(), date(2025, 4, 5));
    }
}
