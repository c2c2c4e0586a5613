//! Error type for the reading facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use unsei_base::KnowledgeError;
use unsei_time::TimeError;

/// Errors surfaced by [`crate::Analyzer`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum UnseiError {
    /// Malformed or out-of-range birth date/time.
    InvalidInput(TimeError),
    /// Knowledge base, analyzer config or weights rejected.
    Configuration(KnowledgeError),
}

impl Display for UnseiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
        }
    }
}

impl Error for UnseiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Configuration(e) => Some(e),
        }
    }
}

impl From<TimeError> for UnseiError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<KnowledgeError> for UnseiError {
    fn from(e: KnowledgeError) -> Self {
        Self::Configuration(e)
    }
}
