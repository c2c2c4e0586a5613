//! Birth-reading facade over the unsei calculators.
//!
//! An [`Analyzer`] is built once from an [`AnalyzerConfig`] (knowledge
//! tables, default Kin variant, scoring weights) and then answers any
//! number of readings without further I/O.
//!
//! # Quick start
//!
//! ```rust
//! use unsei_rs::Analyzer;
//!
//! let analyzer = Analyzer::builtin().unwrap();
//! let reading = analyzer.analyze_str("2020-02-05", Some("12:00")).unwrap();
//! assert_eq!(reading.chart.year.to_string(), "庚子");
//! assert_eq!(reading.elements.total(), 544);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;

pub use analyzer::{AnalysisOptions, Analyzer, Reading};
pub use config::AnalyzerConfig;
pub use error::UnseiError;

// Re-export the value types so callers only need `unsei_rs`.
pub use unsei_base::{
    Branch, Category, Chart, CompositeScore, Element, FiveElementScore, GuardianResult, Kin,
    KinReading, KinVariant, KnowledgeBase, KnowledgeError, Pillar, ScoreWeights, Seal, Stem,
    kin_reading, tone_name,
};
pub use unsei_time::{BirthMoment, CivilDate, ClockTime, TimeError};
