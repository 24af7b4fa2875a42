/// Utilities for the DD/MM/YYYY date strings carried by records
///
/// Record dates are free text. They are parsed by splitting on '/' into a
/// (year, month, day) triple with no range checks, so "20/20/2025" parses to month 20
/// and never matches a real calendar month.
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Indonesian month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];

/// Short weekday headers of the calendar picker, Sunday first
pub const WEEKDAY_SHORT: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// A (year, month, day) triple as found in a record date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDay {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse "DD/MM/YYYY". Anything that does not split into exactly three
    /// integers yields `None`.
    pub fn parse_dmy(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('/');
        let day = parts.next()?.trim().parse().ok()?;
        let month = parts.next()?.trim().parse().ok()?;
        let year = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Same calendar month and year
    pub fn same_month(&self, other: &CalendarDay) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Format as "DD/MM/YYYY"
    pub fn format_dmy(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }

    /// Indonesian month name, or the raw number for out-of-range months
    pub fn month_name(&self) -> String {
        month_name(self.month)
    }

    /// Indonesian weekday name; `None` for impossible dates
    pub fn weekday_name(&self) -> Option<&'static str> {
        let date = self.to_naive()?;
        Some(WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize])
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Last day of the month (28..=31); `None` for invalid year/month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_month.signed_duration_since(first).num_days() as u32)
}

/// Cells of a month grid for a Sunday-first calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days: days_in_month(year, month)?,
        })
    }

    pub fn previous(&self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// "Mei 2024"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dmy() {
        assert_eq!(
            CalendarDay::parse_dmy("25/07/2024"),
            Some(CalendarDay::new(2024, 7, 25))
        );
        assert_eq!(
            CalendarDay::parse_dmy("1/7/2024"),
            Some(CalendarDay::new(2024, 7, 1))
        );
    }

    #[test]
    fn test_parse_dmy_keeps_impossible_dates() {
        let day = CalendarDay::parse_dmy("20/20/2025").unwrap();
        assert_eq!(day.month, 20);
        assert!(day.to_naive().is_none());
        assert_eq!(day.weekday_name(), None);
    }

    #[test]
    fn test_parse_dmy_rejects_garbage() {
        assert_eq!(CalendarDay::parse_dmy(""), None);
        assert_eq!(CalendarDay::parse_dmy("2024-07-25"), None);
        assert_eq!(CalendarDay::parse_dmy("25/07"), None);
        assert_eq!(CalendarDay::parse_dmy("25/07/2024/1"), None);
        assert_eq!(CalendarDay::parse_dmy("aa/07/2024"), None);
    }

    #[test]
    fn test_names() {
        let day = CalendarDay::new(2024, 7, 25);
        assert_eq!(day.month_name(), "Juli");
        assert_eq!(day.weekday_name(), Some("Kamis"));
        assert_eq!(day.format_dmy(), "25/07/2024");
        assert_eq!(month_name(13), "13");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_month_grid_navigation() {
        // 1 May 2024 is a Wednesday
        let may = MonthGrid::new(2024, 5).unwrap();
        assert_eq!(may.leading_blanks, 3);
        assert_eq!(may.days, 31);
        assert_eq!(may.title(), "Mei 2024");

        let january = MonthGrid::new(2024, 1).unwrap();
        assert_eq!(january.previous().unwrap().title(), "Desember 2023");
        assert_eq!(may.next().unwrap().month, 6);
    }
}
