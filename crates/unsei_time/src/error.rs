//! Error types for civil date/time construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection of a malformed or out-of-range date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported `1..=9999` range.
    YearOutOfRange(i32),
    /// Month outside `1..=12`.
    MonthOutOfRange(u32),
    /// Day outside the length of the given month.
    DayOutOfRange { year: i32, month: u32, day: u32 },
    /// Hour outside `0..=23`.
    HourOutOfRange(u32),
    /// Minute outside `0..=59`.
    MinuteOutOfRange(u32),
    /// Text did not match the expected layout.
    Malformed { expected: &'static str, input: String },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} outside 1..=9999"),
            Self::MonthOutOfRange(m) => write!(f, "month {m} outside 1..=12"),
            Self::DayOutOfRange { year, month, day } => {
                write!(f, "day {day} does not exist in {year:04}-{month:02}")
            }
            Self::HourOutOfRange(h) => write!(f, "hour {h} outside 0..=23"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} outside 0..=59"),
            Self::Malformed { expected, input } => {
                write!(f, "malformed input '{input}', expected {expected}")
            }
        }
    }
}

impl Error for TimeError {}
