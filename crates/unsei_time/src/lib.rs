//! Naive civil time for birth-chart calculations.
//!
//! This crate provides:
//! - `CivilDate`, `ClockTime` and `BirthMoment`, validated on construction
//! - Julian Day Number conversion and day differences
//! - Gregorian leap-day counting
//!
//! There is no timezone or leap-second handling: dates and times are taken
//! as naive civil values.

pub mod civil;
pub mod error;
pub mod moment;

pub use civil::{
    CivilDate, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year, leap_days_between,
};
pub use error::TimeError;
pub use moment::{BirthMoment, ClockTime};
