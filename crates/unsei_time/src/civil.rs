//! Proleptic Gregorian civil dates and Julian Day Numbers.
//!
//! A `CivilDate` is validated on construction, so every downstream
//! calculation (pillars, Kin, leap-day counts) is total.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;

/// First supported civil year.
pub const MIN_YEAR: i32 = 1;
/// Last supported civil year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Count of Gregorian leap years in `1..=year` (0 for `year <= 0`).
const fn leap_years_through(year: i32) -> i64 {
    if year <= 0 {
        return 0;
    }
    let y = year as i64;
    y / 4 - y / 100 + y / 400
}

/// A naive civil date (no timezone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Validate and build a date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange(month));
        }
        Self::checked(year, month, day).ok_or(TimeError::DayOutOfRange { year, month, day })
    }

    /// `const` form of [`CivilDate::new`] without error detail.
    pub const fn checked(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < MIN_YEAR || year > MAX_YEAR || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number (Fliegel-Van Flandern integer form).
    ///
    /// All intermediate terms are non-negative for supported years, so
    /// truncating division matches floor division.
    pub const fn jdn(self) -> i64 {
        let month = self.month as i64;
        let a = (14 - month) / 12;
        let y = self.year as i64 + 4800 - a;
        let m = month + 12 * a - 3;
        self.day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(self, earlier: CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// Number of February 29 dates on or before `self`.
    pub const fn leap_days_through(self) -> i64 {
        let own = if is_leap_year(self.year) && (self.month > 2 || (self.month == 2 && self.day == 29))
        {
            1
        } else {
            0
        };
        leap_years_through(self.year - 1) + own
    }

    /// Number of February 29 dates strictly before `self`.
    pub const fn leap_days_before(self) -> i64 {
        let own = if is_leap_year(self.year) && self.month > 2 { 1 } else { 0 };
        leap_years_through(self.year - 1) + own
    }
}

/// Count February 29 dates in the inclusive range between two dates,
/// regardless of argument order.
pub fn leap_days_between(a: CivilDate, b: CivilDate) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    hi.leap_days_through() - lo.leap_days_before()
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse an unsigned decimal field, rejecting signs and empty text.
pub(crate) fn parse_field(text: &str, expected: &'static str, input: &str) -> Result<u32, TimeError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Malformed {
            expected,
            input: input.to_owned(),
        });
    }
    text.parse::<u32>().map_err(|_| TimeError::Malformed {
        expected,
        input: input.to_owned(),
    })
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "YYYY-MM-DD";
        let s = s.trim();
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::Malformed {
                expected: EXPECTED,
                input: s.to_owned(),
            });
        };
        let year = parse_field(y, EXPECTED, s)?;
        let month = parse_field(m, EXPECTED, s)?;
        let day = parse_field(d, EXPECTED, s)?;
        let year = i32::try_from(year).map_err(|_| TimeError::YearOutOfRange(i32::MAX))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
    }

    #[test]
    fn rejects_feb_29_in_common_year() {
        assert_eq!(
            CivilDate::new(2019, 2, 29),
            Err(TimeError::DayOutOfRange {
                year: 2019,
                month: 2,
                day: 29
            })
        );
        assert!(CivilDate::new(2020, 2, 29).is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(CivilDate::new(0, 1, 1), Err(TimeError::YearOutOfRange(0)));
        assert_eq!(CivilDate::new(2020, 13, 1), Err(TimeError::MonthOutOfRange(13)));
        assert!(CivilDate::new(2020, 4, 31).is_err());
        assert!(CivilDate::new(2020, 4, 0).is_err());
    }

    #[test]
    fn jdn_j2000() {
        assert_eq!(date(2000, 1, 1).jdn(), 2_451_545);
    }

    #[test]
    fn jdn_dreamspell_epoch() {
        assert_eq!(date(1987, 7, 26).jdn(), 2_447_003);
    }

    #[test]
    fn days_since_spans_leap_day() {
        assert_eq!(date(2020, 3, 1).days_since(date(2020, 2, 28)), 2);
        assert_eq!(date(2019, 3, 1).days_since(date(2019, 2, 28)), 1);
        assert_eq!(date(1987, 7, 25).days_since(date(1987, 7, 26)), -1);
    }

    #[test]
    fn leap_days_between_is_inclusive() {
        let feb29 = date(2020, 2, 29);
        assert_eq!(leap_days_between(feb29, feb29), 1);
        assert_eq!(leap_days_between(date(2020, 3, 1), date(2023, 12, 31)), 0);
        assert_eq!(leap_days_between(date(1987, 7, 26), date(2012, 12, 21)), 7);
        assert_eq!(leap_days_between(date(2012, 12, 21), date(1987, 7, 26)), 7);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2020-02-05".parse().unwrap();
        assert_eq!(d, date(2020, 2, 5));
        assert_eq!(d.to_string(), "2020-02-05");
        let loose: CivilDate = "1988-7-10".parse().unwrap();
        assert_eq!(loose, date(1988, 7, 10));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "2020/02/05".parse::<CivilDate>(),
            Err(TimeError::Malformed { .. })
        ));
        assert!("2020-02".parse::<CivilDate>().is_err());
        assert!("2020-02-05-01".parse::<CivilDate>().is_err());
        assert!("2020-+2-05".parse::<CivilDate>().is_err());
        assert!("2021-02-29".parse::<CivilDate>().is_err());
    }
}
