//! Local clock time and the combined birth moment.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::civil::{CivilDate, parse_field};
use crate::error::TimeError;

/// Hour and minute of a naive local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// 12:00, used when a birth time is not supplied.
    pub const MIDDAY: ClockTime = ClockTime {
        hour: 12,
        minute: 0,
    };

    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::MIDDAY
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "HH:MM";
        let s = s.trim();
        let Some((h, m)) = s.split_once(':') else {
            return Err(TimeError::Malformed {
                expected: EXPECTED,
                input: s.to_owned(),
            });
        };
        let hour = parse_field(h, EXPECTED, s)?;
        let minute = parse_field(m, EXPECTED, s)?;
        Self::new(hour, minute)
    }
}

/// Civil date plus local time of birth. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BirthMoment {
    date: CivilDate,
    time: ClockTime,
}

impl BirthMoment {
    /// Validate every field and build the moment.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            time: ClockTime::new(hour, minute)?,
        })
    }

    pub const fn from_parts(date: CivilDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    /// Parse separate date and optional time text; a missing time means midday.
    pub fn parse(date: &str, time: Option<&str>) -> Result<Self, TimeError> {
        let date = date.parse::<CivilDate>()?;
        let time = match time {
            Some(t) => t.parse::<ClockTime>()?,
            None => ClockTime::MIDDAY,
        };
        Ok(Self { date, time })
    }

    pub const fn date(self) -> CivilDate {
        self.date
    }

    pub const fn time(self) -> ClockTime {
        self.time
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for BirthMoment {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(['T', ' ']) {
            Some((date, time)) => Self::parse(date, Some(time)),
            None => Err(TimeError::Malformed {
                expected: "YYYY-MM-DD HH:MM",
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_bounds() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(ClockTime::new(24, 0), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(ClockTime::new(0, 60), Err(TimeError::MinuteOutOfRange(60)));
    }

    #[test]
    fn missing_time_defaults_to_midday() {
        let m = BirthMoment::parse("2020-02-05", None).unwrap();
        assert_eq!(m.time(), ClockTime::MIDDAY);
        assert_eq!(m.to_string(), "2020-02-05 12:00");
    }

    #[test]
    fn parse_both_separators() {
        let a: BirthMoment = "1988-07-10 15:00".parse().unwrap();
        let b: BirthMoment = "1988-07-10T15:00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.time().hour(), 15);
    }

    #[test]
    fn parse_rejects_bad_time() {
        assert!(BirthMoment::parse("2020-02-05", Some("25:00")).is_err());
        assert!(BirthMoment::parse("2020-02-05", Some("noon")).is_err());
        assert!("2020-02-05".parse::<BirthMoment>().is_err());
    }
}
