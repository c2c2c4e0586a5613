//! Analyzer configuration file.
//!
//! ```toml
//! knowledge = "tables/knowledge.toml"   # optional, builtin tables otherwise
//! kin_variant = "dreamspell"            # naive | dreamspell | classical
//!
//! [weights]
//! suanming = 0.7
//! maya = 0.3
//!
//! [weights.love]
//! fire = 0.6
//! kin = 0.4
//! ```
//!
//! Omitted keys and tables keep their defaults, except that a category
//! table given at all lists its full formula: coefficients it leaves out
//! are zero. A relative `knowledge` path is resolved against the directory
//! holding the config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;
use unsei_base::{KinVariant, KnowledgeError, ScoreWeights};

/// Startup configuration for [`crate::Analyzer`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// External knowledge file replacing the builtin tables.
    pub knowledge: Option<PathBuf>,
    /// Kin variant used when a call does not name one.
    pub kin_variant: KinVariant,
    pub weights: ScoreWeights,
}

impl AnalyzerConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        info!(path = %path.display(), "loading analyzer config");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(knowledge), Some(dir)) = (&config.knowledge, path.parent()) {
            if knowledge.is_relative() {
                config.knowledge = Some(dir.join(knowledge));
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_knowledge(mut self, path: PathBuf) -> Self {
        self.knowledge = Some(path);
        self
    }
}
