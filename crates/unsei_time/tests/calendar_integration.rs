//! Integration tests for civil-date arithmetic.

use unsei_time::{BirthMoment, CivilDate, days_in_month, is_leap_year, leap_days_between};

#[test]
fn jdn_is_contiguous_across_years() {
    for year in [1899, 1900, 1999, 2000, 2019, 2020] {
        let mut prev = CivilDate::new(year, 1, 1).unwrap().jdn() - 1;
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                let jdn = CivilDate::new(year, month, day).unwrap().jdn();
                assert_eq!(jdn, prev + 1, "{year}-{month}-{day}");
                prev = jdn;
            }
        }
    }
}

#[test]
fn year_lengths() {
    for year in 1890..2030 {
        let total: u32 = (1..=12).map(|m| days_in_month(year, m)).sum();
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn leap_day_count_matches_brute_force() {
    let a = CivilDate::new(1895, 6, 1).unwrap();
    let b = CivilDate::new(2030, 2, 28).unwrap();
    let brute = (a.year()..=b.year())
        .filter(|&y| is_leap_year(y))
        .filter_map(|y| CivilDate::new(y, 2, 29).ok())
        .filter(|d| *d >= a && *d <= b)
        .count() as i64;
    assert_eq!(leap_days_between(a, b), brute);
}

#[test]
fn moment_fields_round_trip_through_display() {
    let m = BirthMoment::new(2001, 12, 30, 22, 5).unwrap();
    let text = m.to_string();
    assert_eq!(text, "2001-12-30 22:05");
    assert_eq!(text.parse::<BirthMoment>().unwrap(), m);
}
