//! Golden vectors and cycle properties for Tzolkin Kin.

use unsei_base::{
    ALL_SEALS, DREAMSPELL_EPOCH, Kin, KinReading, KinVariant, Seal, TZOLKIN_DAYS, compute_kin,
    kin_reading,
};
use unsei_time::CivilDate;

const VARIANTS: [KinVariant; 3] = [
    KinVariant::Naive,
    KinVariant::Dreamspell,
    KinVariant::Classical,
];

fn date(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::new(y, m, d).unwrap()
}

/// Every valid date from `start` through `end`, inclusive.
fn dates_between(start: CivilDate, end: CivilDate) -> Vec<CivilDate> {
    let mut out = Vec::new();
    for year in start.year()..=end.year() {
        for month in 1..=12 {
            for day in 1..=31 {
                if let Some(d) = CivilDate::checked(year, month, day) {
                    if d >= start && d <= end {
                        out.push(d);
                    }
                }
            }
        }
    }
    out
}

#[test]
fn end_of_long_count_golden() {
    let d = date(2012, 12, 21);
    assert_eq!(compute_kin(d, KinVariant::Naive).number(), 181);
    assert_eq!(compute_kin(d, KinVariant::Classical).number(), 1);

    let r = kin_reading(d, KinVariant::Dreamspell);
    assert_eq!(r.kin.number(), 174);
    assert_eq!(r.seal, Seal::WhiteWizard);
    assert_eq!(r.tone, 5);
    assert_eq!(r.wavespell, Seal::WhiteWizard);
    assert_eq!(r.variant, KinVariant::Dreamspell);
}

#[test]
fn epoch_constant() {
    assert_eq!(DREAMSPELL_EPOCH, date(1987, 7, 26));
}

#[test]
fn ranges_hold_for_all_variants() {
    let dates = dates_between(date(1980, 1, 1), date(1992, 12, 31));
    for d in &dates {
        for v in VARIANTS {
            let r = kin_reading(*d, v);
            let n = r.kin.number();
            assert!((1..=260).contains(&n), "{d} {v:?}: kin {n}");
            assert!((1..=13).contains(&r.tone), "{d} {v:?}: tone {}", r.tone);
            assert!(ALL_SEALS.contains(&r.seal));
            assert!(ALL_SEALS.contains(&r.wavespell));
        }
    }
}

#[test]
fn naive_is_periodic_in_civil_days() {
    let dates = dates_between(date(1985, 1, 1), date(1995, 12, 31));
    for pair in dates.windows(TZOLKIN_DAYS as usize + 1) {
        let (first, last) = (pair[0], pair[TZOLKIN_DAYS as usize]);
        assert_eq!(
            compute_kin(first, KinVariant::Naive),
            compute_kin(last, KinVariant::Naive),
            "{first} vs {last}"
        );
    }
}

#[test]
fn dreamspell_periodic_after_leap_correction() {
    // Kin advances by one per day except across a post-epoch Feb 29.
    let dates = dates_between(date(1988, 1, 1), date(2000, 12, 31));
    for pair in dates.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let ka = compute_kin(a, KinVariant::Dreamspell).number();
        let kb = compute_kin(b, KinVariant::Dreamspell).number();
        let expected_step = if b.month() == 2 && b.day() == 29 { 0 } else { 1 };
        assert_eq!(
            Kin::from_day_count(i64::from(ka) - 1 + expected_step).number(),
            kb,
            "{a} -> {b}"
        );
    }
}

#[test]
fn classical_advances_one_per_day() {
    let dates = dates_between(date(2011, 12, 1), date(2013, 1, 31));
    for pair in dates.windows(2) {
        let ka = compute_kin(pair[0], KinVariant::Classical).number();
        let kb = compute_kin(pair[1], KinVariant::Classical).number();
        assert_eq!(kb, ka % 260 + 1);
    }
}

#[test]
fn derivation_is_idempotent() {
    for n in 1..=260u16 {
        let kin = Kin::new(n).unwrap();
        let a = KinReading::from_kin(kin, KinVariant::Naive);
        let b = KinReading::from_kin(kin, KinVariant::Naive);
        assert_eq!(a, b);
        assert_eq!(u16::from(a.tone), (n - 1) % 13 + 1);
        assert_eq!(a.seal.index(), ((n - 1) % 20) as u8);
    }
}

#[test]
fn wavespells_cover_every_seal_once() {
    let openers: Vec<Seal> = (0..20u16)
        .map(|w| Kin::new(w * 13 + 1).unwrap().wavespell())
        .collect();
    assert_eq!(openers, ALL_SEALS.to_vec());
}
