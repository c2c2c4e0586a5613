//! Full birth reading: chart, element balance, Kin and composite scores.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;
use unsei_base::{
    ALL_CATEGORIES, Category, Chart, CompositeScore, FiveElementScore, GuardianResult, KinReading,
    KinVariant, KnowledgeBase, ScoreWeights, build_chart, composite_score, kin_reading,
    score_elements, select_guardians,
};
use unsei_time::BirthMoment;

use crate::config::AnalyzerConfig;
use crate::error::UnseiError;

/// Per-call adjustments to an analysis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisOptions {
    /// Kin variant; the analyzer default when `None`.
    pub variant: Option<KinVariant>,
    /// `(suanming, maya)` blend of the overall score.
    pub blend: Option<(f64, f64)>,
    /// Categories to report; all when empty. The reading lists them in
    /// category order with duplicates collapsed.
    pub categories: Vec<Category>,
}

/// Result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    #[serde(serialize_with = "serialize_display")]
    pub moment: BirthMoment,
    pub chart: Chart,
    pub elements: FiveElementScore,
    pub guardians: GuardianResult,
    pub kin: KinReading,
    pub variant_label: &'static str,
    /// Requested category scores, keyed and ordered by category.
    pub scores: BTreeMap<Category, f64>,
}

fn serialize_display<S: Serializer, T: std::fmt::Display>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Once-initialized analysis context.
///
/// The knowledge base is behind an [`Arc`] and never mutated after
/// construction, so an `Analyzer` can be cloned cheaply or shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    knowledge: Arc<KnowledgeBase>,
    weights: ScoreWeights,
    variant: KinVariant,
}

impl Analyzer {
    /// Build from a config, loading the knowledge file it names.
    pub fn new(config: AnalyzerConfig) -> Result<Self, UnseiError> {
        let knowledge = match &config.knowledge {
            Some(path) => KnowledgeBase::load(path)?,
            None => KnowledgeBase::builtin()?,
        };
        Self::with_knowledge(Arc::new(knowledge), config.weights, config.kin_variant)
    }

    /// Builtin tables, default weights, naive Kin.
    pub fn builtin() -> Result<Self, UnseiError> {
        Self::new(AnalyzerConfig::default())
    }

    pub fn with_knowledge(
        knowledge: Arc<KnowledgeBase>,
        weights: ScoreWeights,
        variant: KinVariant,
    ) -> Result<Self, UnseiError> {
        weights.validate()?;
        Ok(Self {
            knowledge,
            weights,
            variant,
        })
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn default_variant(&self) -> KinVariant {
        self.variant
    }

    pub fn chart(&self, moment: &BirthMoment) -> Chart {
        build_chart(&self.knowledge, moment)
    }

    /// Analyze with the configured variant and weights, reporting every
    /// category. Cannot fail once the moment is valid.
    pub fn analyze(&self, moment: &BirthMoment) -> Reading {
        self.compose(moment, self.variant, &self.weights, &ALL_CATEGORIES)
    }

    /// Analyze with per-call overrides. Fails only on an invalid blend.
    pub fn analyze_with(
        &self,
        moment: &BirthMoment,
        options: &AnalysisOptions,
    ) -> Result<Reading, UnseiError> {
        let weights = match options.blend {
            Some((suanming, maya)) => self.weights.with_blend(suanming, maya)?,
            None => self.weights,
        };
        let variant = options.variant.unwrap_or(self.variant);
        let categories = if options.categories.is_empty() {
            &ALL_CATEGORIES[..]
        } else {
            &options.categories[..]
        };
        Ok(self.compose(moment, variant, &weights, categories))
    }

    /// Parse `YYYY-MM-DD` and optional `HH:MM` (midday when absent), then
    /// analyze.
    pub fn analyze_str(&self, date: &str, time: Option<&str>) -> Result<Reading, UnseiError> {
        let moment = BirthMoment::parse(date, time)?;
        Ok(self.analyze(&moment))
    }

    fn compose(
        &self,
        moment: &BirthMoment,
        variant: KinVariant,
        weights: &ScoreWeights,
        categories: &[Category],
    ) -> Reading {
        let chart = build_chart(&self.knowledge, moment);
        let elements = score_elements(&self.knowledge, &chart);
        let guardians = select_guardians(&self.knowledge, &elements);
        let kin = kin_reading(moment.date(), variant);
        let composite: CompositeScore = composite_score(&elements, kin.kin, weights);
        debug!(
            %moment,
            kin = kin.kin.number(),
            ?variant,
            overall = composite.get(Category::Overall),
            "analysis complete"
        );
        Reading {
            moment: *moment,
            chart,
            elements,
            guardians,
            kin,
            variant_label: variant.label(),
            scores: composite.select(categories).into_iter().collect(),
        }
    }
}
