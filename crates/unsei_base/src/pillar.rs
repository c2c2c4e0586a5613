//! Year, month, day and hour pillars of a four-pillar chart.
//!
//! Solar-term timing is approximated with fixed civil days: the year turns
//! on February 4, and a month's branch turns on its 6th day (February on
//! the 4th). These cut-offs are deliberate and must not be replaced with
//! astronomical solar terms.

use serde::Serialize;
use tracing::trace;
use unsei_time::{BirthMoment, CivilDate, ClockTime};

use crate::knowledge::KnowledgeBase;
use crate::symbols::{Branch, Stem};

/// Year whose pillar sits at index 0 of both cyclic orders (甲子).
pub const SEXAGENARY_ANCHOR_YEAR: i32 = 1984;

/// Approximate day of Spring Begins (立春) in February.
pub const SPRING_BEGINS_DAY: u32 = 4;

/// Approximate day on which each month's solar term starts.
pub const SOLAR_TERM_DAY: u32 = 6;

/// One (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    /// Pillars in Year, Month, Day, Hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Whether `date` is on or after the approximate Spring Begins day.
pub fn is_after_spring_begins(date: CivilDate) -> bool {
    match date.month() {
        1 => false,
        2 => date.day() >= SPRING_BEGINS_DAY,
        _ => true,
    }
}

/// Year pillar. Dates before February 4 belong to the previous year.
pub fn year_pillar(kb: &KnowledgeBase, date: CivilDate) -> Pillar {
    let mut year = date.year();
    if !is_after_spring_begins(date) {
        year -= 1;
    }
    let offset = year - SEXAGENARY_ANCHOR_YEAR;
    Pillar::new(
        kb.stem_at(offset.rem_euclid(10) as usize),
        kb.branch_at(offset.rem_euclid(12) as usize),
    )
}

/// Month-branch index (0 = Tiger month .. 11 = Ox month) from the
/// fixed-day solar-term approximation.
pub fn month_branch_index(date: CivilDate) -> usize {
    let (mut month, day) = (date.month(), date.day());
    if month == 2 && day < SPRING_BEGINS_DAY {
        return 11;
    }
    if day < SOLAR_TERM_DAY {
        month = if month == 1 { 12 } else { month - 1 };
    }
    if month >= 2 {
        (month - 2) as usize
    } else {
        11
    }
}

/// Month pillar: five-tiger-dun stem for `year_stem`, advanced to the month.
pub fn month_pillar(kb: &KnowledgeBase, date: CivilDate, year_stem: Stem) -> Pillar {
    let index = month_branch_index(date);
    let stem = kb.advance_stem(kb.tiger_month_stem(year_stem), index);
    Pillar::new(stem, kb.month_branch(index))
}

/// Sexagenary index (0..60) of the day from the closed-form day formula.
pub fn day_cycle_index(kb: &KnowledgeBase, date: CivilDate) -> usize {
    let year = date.year();
    let century_constant = kb.century_constant((year / 100) * 100);
    let s = year % 100 - 1;
    let u = s.rem_euclid(4);
    let month_base = kb.month_base(date.month());
    let r = s * 24 + 5 * (s * 4 * 3 + u) + month_base + date.day() as i32 + century_constant;
    r.rem_euclid(60) as usize
}

/// Day pillar read from the 60-entry cycle at [`day_cycle_index`].
pub fn day_pillar(kb: &KnowledgeBase, date: CivilDate) -> Pillar {
    let index = day_cycle_index(kb, date);
    Pillar::new(kb.stem_at(index % 10), kb.branch_at(index % 12))
}

/// Hour-branch index (0 = Rat hour, 23:00-00:59 .. 11 = Pig hour).
pub fn hour_branch_index(time: ClockTime) -> usize {
    match time.hour() {
        23 => 0,
        h => ((h + 1) / 2) as usize,
    }
}

/// Hour pillar: five-rat-dun stem for `day_stem`, advanced to the hour.
///
/// The minute does not affect the result. An hour of 23 maps to the Rat
/// hour of the same civil day.
pub fn hour_pillar(kb: &KnowledgeBase, time: ClockTime, day_stem: Stem) -> Pillar {
    let index = hour_branch_index(time);
    let stem = kb.advance_stem(kb.rat_hour_stem(day_stem), index);
    Pillar::new(stem, kb.hour_branch(index))
}

/// Build the full four-pillar chart for a birth moment.
pub fn build_chart(kb: &KnowledgeBase, moment: &BirthMoment) -> Chart {
    let date = moment.date();
    let year = year_pillar(kb, date);
    let month = month_pillar(kb, date, year.stem);
    let day = day_pillar(kb, date);
    let hour = hour_pillar(kb, moment.time(), day.stem);
    trace!(%moment, %year, %month, %day, %hour, "chart built");
    Chart {
        year,
        month,
        day,
        hour,
    }
}
