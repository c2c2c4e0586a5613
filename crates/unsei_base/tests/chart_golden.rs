//! Golden vectors for pillars, element scores and guardian selection.
//!
//! Pure table tests against the built-in knowledge base.

use unsei_base::{
    Branch, Chart, Element, FiveElementScore, KnowledgeBase, Pillar, Stem, build_chart, day_pillar,
    hour_pillar, month_pillar, score_elements, select_guardians, year_pillar,
};
use unsei_time::{BirthMoment, CivilDate, ClockTime};

fn kb() -> KnowledgeBase {
    KnowledgeBase::builtin().expect("builtin knowledge base")
}

fn date(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::new(y, m, d).unwrap()
}

fn pillar(stem: &str, branch: &str) -> Pillar {
    Pillar::new(
        Stem::from_symbol(stem).unwrap(),
        Branch::from_symbol(branch).unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Year pillar
// ---------------------------------------------------------------------------

#[test]
fn year_pillar_golden() {
    let kb = kb();
    let cases = [
        ((2020, 2, 5), ("庚", "子")),
        ((1988, 7, 10), ("戊", "辰")),
        ((2001, 12, 30), ("辛", "巳")),
        // before Spring Begins: previous year
        ((2020, 1, 20), ("己", "亥")),
    ];
    for ((y, m, d), (s, b)) in cases {
        assert_eq!(year_pillar(&kb, date(y, m, d)), pillar(s, b), "{y}-{m}-{d}");
    }
}

#[test]
fn year_turns_on_feb_4() {
    let kb = kb();
    assert_eq!(year_pillar(&kb, date(2020, 2, 3)), pillar("己", "亥"));
    assert_eq!(year_pillar(&kb, date(2020, 2, 4)), pillar("庚", "子"));
}

// ---------------------------------------------------------------------------
// Month pillar
// ---------------------------------------------------------------------------

#[test]
fn month_pillar_golden() {
    let kb = kb();
    assert_eq!(
        month_pillar(&kb, date(2020, 2, 5), Stem::Geng),
        pillar("己", "丑")
    );
    assert_eq!(
        month_pillar(&kb, date(1988, 7, 10), Stem::Wu),
        pillar("己", "未")
    );
}

#[test]
fn tiger_month_opens_with_five_tiger_stem() {
    // 甲 year: Tiger month stem is 丙
    let kb = kb();
    assert_eq!(
        month_pillar(&kb, date(1984, 2, 10), Stem::Jia),
        pillar("丙", "寅")
    );
}

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

#[test]
fn day_pillar_golden() {
    let kb = kb();
    assert_eq!(day_pillar(&kb, date(2020, 2, 5)), pillar("辛", "卯"));
    assert_eq!(day_pillar(&kb, date(1988, 7, 10)), pillar("癸", "巳"));
    assert_eq!(day_pillar(&kb, date(2000, 1, 1)), pillar("丙", "辰"));
}

// ---------------------------------------------------------------------------
// Hour pillar
// ---------------------------------------------------------------------------

#[test]
fn hour_pillar_golden() {
    let kb = kb();
    let t = |h, m| ClockTime::new(h, m).unwrap();
    assert_eq!(hour_pillar(&kb, t(0, 30), Stem::Jia), pillar("甲", "子"));
    assert_eq!(hour_pillar(&kb, t(9, 15), Stem::Yi), pillar("辛", "巳"));
}

#[test]
fn late_night_is_rat_hour() {
    let kb = kb();
    let t = |h, m| ClockTime::new(h, m).unwrap();
    let late = hour_pillar(&kb, t(23, 45), Stem::Jia);
    let early = hour_pillar(&kb, t(0, 0), Stem::Jia);
    assert_eq!(late.branch, Branch::Zi);
    assert_eq!(late, early);
}

#[test]
fn minutes_do_not_move_the_hour() {
    let kb = kb();
    let a = hour_pillar(&kb, ClockTime::new(9, 0).unwrap(), Stem::Yi);
    let b = hour_pillar(&kb, ClockTime::new(9, 59).unwrap(), Stem::Yi);
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Full chart
// ---------------------------------------------------------------------------

#[test]
fn full_chart_golden() {
    let kb = kb();
    let chart = build_chart(&kb, &BirthMoment::new(2020, 2, 5, 12, 0).unwrap());
    assert_eq!(chart.year, pillar("庚", "子"));
    assert_eq!(chart.month, pillar("己", "丑"));
    assert_eq!(chart.day, pillar("辛", "卯"));
    assert_eq!(chart.hour, pillar("甲", "午"));

    let score = score_elements(&kb, &chart);
    assert_eq!(score, FiveElementScore::new(136, 70, 126, 82, 130));
    assert_eq!(score.total(), 544);
}

#[test]
fn midday_default_matches_explicit_noon() {
    let kb = kb();
    let implicit = build_chart(&kb, &BirthMoment::parse("1988-07-10", None).unwrap());
    let explicit = build_chart(&kb, &BirthMoment::parse("1988-07-10", Some("12:00")).unwrap());
    assert_eq!(implicit, explicit);
}

// ---------------------------------------------------------------------------
// Element scoring and guardians
// ---------------------------------------------------------------------------

#[test]
fn element_score_golden() {
    let kb = kb();
    let chart = Chart {
        year: pillar("庚", "子"),
        month: pillar("戊", "卯"),
        day: pillar("丙", "辰"),
        hour: pillar("戊", "申"),
    };
    let score = score_elements(&kb, &chart);
    assert_eq!(score.get(Element::Wood), 130);
    assert_eq!(score.get(Element::Fire), 36);
    assert_eq!(score.get(Element::Earth), 142);
    assert_eq!(score.get(Element::Metal), 96);
    assert_eq!(score.get(Element::Water), 140);
    assert_eq!(score.total(), kb.chart_total());
}

#[test]
fn guardian_golden() {
    let score = FiveElementScore::new(180, 70, 210, 140, 90);
    let g = select_guardians(&kb(), &score);
    assert!(g.deficient.contains(&Element::Fire));
    assert!(g.excess.contains(&Element::Earth));
    assert!(g.guardian.contains(&Element::Fire));
    assert!(g.taboo.contains(&Element::Earth));
}
