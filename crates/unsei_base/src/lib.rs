//! Four-pillar charts, five-element balance, Tzolkin Kin and composite
//! life-category scores.
//!
//! This crate provides:
//! - Year, month, day and hour pillars from a naive birth moment
//! - Five-element scoring with hidden stems and guardian/taboo selection
//! - Kin number, seal, tone and wavespell under three counting variants
//! - Weighted composite scores blending both systems
//!
//! Symbol orders, hidden-stem ratios and relation cycles live in a
//! [`KnowledgeBase`] loaded from TOML; a built-in table ships with the crate.

pub mod composite;
pub mod elements;
pub mod error;
pub mod knowledge;
pub mod pillar;
pub mod symbols;
pub mod tzolkin;

pub use composite::{
    ALL_CATEGORIES, Category, CompositeScore, LinearTerms, NormalizedInputs, SCORE_DECIMALS,
    ScoreWeights, composite_score,
};
pub use elements::{FiveElementScore, GuardianResult, score_elements, select_guardians};
pub use error::KnowledgeError;
pub use knowledge::{BUILTIN_KNOWLEDGE, HIDDEN_RATIO_TOTAL, HiddenStem, KnowledgeBase, STEM_WEIGHT};
pub use pillar::{
    Chart, Pillar, SEXAGENARY_ANCHOR_YEAR, SOLAR_TERM_DAY, SPRING_BEGINS_DAY, build_chart,
    day_cycle_index, day_pillar, hour_branch_index, hour_pillar, is_after_spring_begins,
    month_branch_index, month_pillar, year_pillar,
};
pub use symbols::{ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Element, Stem};
pub use tzolkin::{
    ALL_SEALS, DREAMSPELL_EPOCH, GMT_CORRELATION_JDN, Kin, KinReading, KinVariant, Seal,
    TZOLKIN_DAYS, compute_kin, kin_reading, tone_name,
};
