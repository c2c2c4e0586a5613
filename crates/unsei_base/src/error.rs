//! Configuration errors for the knowledge base and scoring weights.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A missing or malformed knowledge table. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KnowledgeError {
    /// Reading the knowledge file failed.
    Io(String),
    /// The source text is not valid TOML for the expected layout.
    Parse(String),
    /// A required table is absent.
    MissingTable(&'static str),
    /// A table has the wrong number of entries.
    Cardinality {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    /// A symbol is not a known stem, branch or element.
    UnknownSymbol { table: &'static str, symbol: String },
    /// A symbol appears twice where a permutation is required.
    DuplicateSymbol { table: &'static str, symbol: String },
    /// A keyed table lacks an entry.
    MissingEntry { table: &'static str, key: String },
    /// A key cannot be interpreted (e.g. a non-numeric month).
    InvalidKey { table: &'static str, key: String },
    /// Hidden-stem ratios of a branch do not sum to 100.
    RatioSum { branch: String, sum: u64 },
    /// `stem_weight` differs from the fixed per-stem score of 36.
    StemWeight(u32),
    /// An element relation is not one-to-one.
    NotBijective(&'static str),
    /// Scoring weights are negative, non-finite or unbounded.
    InvalidWeights(String),
}

impl Display for KnowledgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "knowledge parse error: {msg}"),
            Self::MissingTable(t) => write!(f, "missing table `{t}`"),
            Self::Cardinality {
                table,
                expected,
                found,
            } => write!(f, "table `{table}` has {found} entries, expected {expected}"),
            Self::UnknownSymbol { table, symbol } => {
                write!(f, "unknown symbol '{symbol}' in `{table}`")
            }
            Self::DuplicateSymbol { table, symbol } => {
                write!(f, "duplicate symbol '{symbol}' in `{table}`")
            }
            Self::MissingEntry { table, key } => write!(f, "`{table}` has no entry for '{key}'"),
            Self::InvalidKey { table, key } => write!(f, "invalid key '{key}' in `{table}`"),
            Self::RatioSum { branch, sum } => {
                write!(f, "hidden-stem ratios of '{branch}' sum to {sum}, expected 100")
            }
            Self::StemWeight(w) => write!(f, "stem_weight is {w}, expected 36"),
            Self::NotBijective(t) => write!(f, "relation `{t}` is not one-to-one"),
            Self::InvalidWeights(msg) => write!(f, "invalid scoring weights: {msg}"),
        }
    }
}

impl Error for KnowledgeError {}

impl From<std::io::Error> for KnowledgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for KnowledgeError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
