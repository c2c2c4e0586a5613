//! Composite life-category scores blended from both calculators.
//!
//! Inputs are normalized first: element scores by their total, Kin by 260,
//! tone by 13. Every category is then a linear combination of those seven
//! values, with coefficients taken from [`ScoreWeights`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::elements::FiveElementScore;
use crate::error::KnowledgeError;
use crate::symbols::{ALL_ELEMENTS, Element};
use crate::tzolkin::Kin;

/// Decimal places kept in published scores.
pub const SCORE_DECIMALS: usize = 2;

/// Scored life categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Overall,
    Work,
    Love,
    Health,
    Growth,
}

pub const ALL_CATEGORIES: [Category; 5] = [
    Category::Overall,
    Category::Work,
    Category::Love,
    Category::Health,
    Category::Growth,
];

impl Category {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Work => "work",
            Self::Love => "love",
            Self::Health => "health",
            Self::Growth => "growth",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts English names and the Japanese category labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overall" | "総合" => Ok(Self::Overall),
            "work" | "仕事" => Ok(Self::Work),
            "love" | "恋愛" => Ok(Self::Love),
            "health" | "健康" => Ok(Self::Health),
            "growth" | "成長" => Ok(Self::Growth),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Normalized calculator outputs, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    /// Element shares in 木火土金水 order; they sum to 1.
    pub elements: [f64; 5],
    pub kin: f64,
    pub tone: f64,
}

impl NormalizedInputs {
    pub fn new(score: &FiveElementScore, kin: Kin) -> Self {
        // A chart always scores 4 stems and 4 branches, so the total is never 0.
        let total = f64::from(score.total().max(1));
        let elements = ALL_ELEMENTS.map(|e| f64::from(score.get(e)) / total);
        Self {
            elements,
            kin: f64::from(kin.number()) / 260.0,
            tone: f64::from(kin.tone()) / 13.0,
        }
    }

    pub fn element(&self, element: Element) -> f64 {
        self.elements[element.index() as usize]
    }
}

/// Coefficients of one linear category formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearTerms {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
    pub kin: f64,
    pub tone: f64,
}

impl LinearTerms {
    fn coefficients(&self) -> [f64; 7] {
        [
            self.wood, self.fire, self.earth, self.metal, self.water, self.kin, self.tone,
        ]
    }

    pub fn evaluate(&self, n: &NormalizedInputs) -> f64 {
        let [wood, fire, earth, metal, water] = n.elements;
        self.wood * wood
            + self.fire * fire
            + self.earth * earth
            + self.metal * metal
            + self.water * water
            + self.kin * n.kin
            + self.tone * n.tone
    }

    fn validate(&self, category: Category) -> Result<(), KnowledgeError> {
        let coefficients = self.coefficients();
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(KnowledgeError::InvalidWeights(format!(
                "{category}: coefficients must be finite and non-negative"
            )));
        }
        let sum: f64 = coefficients.iter().sum();
        if sum > 1.0 + 1e-9 {
            return Err(KnowledgeError::InvalidWeights(format!(
                "{category}: coefficients sum to {sum}, at most 1 allowed"
            )));
        }
        Ok(())
    }
}

/// Scoring configuration.
///
/// `overall` is the blend `suanming * mean(elements) + maya * mean(kin, tone)`;
/// the other categories are free linear formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the four-pillar side in `overall` (`w_suan`).
    pub suanming: f64,
    /// Weight of the Tzolkin side in `overall` (`w_maya`).
    pub maya: f64,
    pub work: LinearTerms,
    pub love: LinearTerms,
    pub health: LinearTerms,
    pub growth: LinearTerms,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            suanming: 0.6,
            maya: 0.4,
            work: LinearTerms {
                wood: 0.4,
                metal: 0.3,
                tone: 0.3,
                ..LinearTerms::default()
            },
            love: LinearTerms {
                fire: 0.5,
                kin: 0.5,
                ..LinearTerms::default()
            },
            health: LinearTerms {
                earth: 0.4,
                water: 0.3,
                tone: 0.3,
                ..LinearTerms::default()
            },
            growth: LinearTerms {
                wood: 0.3,
                fire: 0.3,
                kin: 0.4,
                ..LinearTerms::default()
            },
        }
    }
}

impl ScoreWeights {
    /// Replace the suanming/maya blend of `overall`.
    pub fn with_blend(self, suanming: f64, maya: f64) -> Result<Self, KnowledgeError> {
        let weights = Self {
            suanming,
            maya,
            ..self
        };
        weights.validate()?;
        Ok(weights)
    }

    /// The `overall` blend expressed as a linear formula.
    pub fn overall_terms(&self) -> LinearTerms {
        let per_element = self.suanming / 5.0;
        let per_cycle = self.maya / 2.0;
        LinearTerms {
            wood: per_element,
            fire: per_element,
            earth: per_element,
            metal: per_element,
            water: per_element,
            kin: per_cycle,
            tone: per_cycle,
        }
    }

    /// Raw (unrounded) score of one category.
    ///
    /// `overall` is evaluated as the blend of the two means rather than
    /// through [`Self::overall_terms`], so its floating-point result is the
    /// one the blend formula gives.
    pub fn evaluate(&self, category: Category, inputs: &NormalizedInputs) -> f64 {
        match category {
            Category::Overall => {
                let pillars = inputs.elements.iter().sum::<f64>() / 5.0;
                let tzolkin = (inputs.kin + inputs.tone) / 2.0;
                pillars * self.suanming + tzolkin * self.maya
            }
            _ => self.terms(category).evaluate(inputs),
        }
    }

    pub fn terms(&self, category: Category) -> LinearTerms {
        match category {
            Category::Overall => self.overall_terms(),
            Category::Work => self.work,
            Category::Love => self.love,
            Category::Health => self.health,
            Category::Growth => self.growth,
        }
    }

    /// Every coefficient finite and non-negative, and each category's
    /// coefficients summing to at most 1, so scores stay within `[0, 1]`.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        ALL_CATEGORIES
            .iter()
            .try_for_each(|&c| self.terms(c).validate(c))
    }
}

/// Category scores rounded to [`SCORE_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScore {
    values: [f64; 5],
}

impl CompositeScore {
    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        ALL_CATEGORIES.iter().map(|&c| (c, self.get(c)))
    }

    /// Scores of the requested categories, in request order. Duplicates are
    /// kept; callers that need one entry per category collect into a map.
    pub fn select(&self, categories: &[Category]) -> Vec<(Category, f64)> {
        categories.iter().map(|&c| (c, self.get(c))).collect()
    }
}

impl Serialize for CompositeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (c, v) in self.iter() {
            map.serialize_entry(c.name(), &v)?;
        }
        map.end()
    }
}

/// Round to [`SCORE_DECIMALS`] places. Decimal formatting is exact on the
/// binary value and breaks ties to even, so 0.125 becomes 0.12 and the
/// double nearest 0.175 (just below it) becomes 0.17.
fn round_score(value: f64) -> f64 {
    format!("{:.*}", SCORE_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}

/// Blend an element score and a Kin into category scores.
pub fn composite_score(
    score: &FiveElementScore,
    kin: Kin,
    weights: &ScoreWeights,
) -> CompositeScore {
    let inputs = NormalizedInputs::new(score, kin);
    CompositeScore {
        values: ALL_CATEGORIES.map(|c| round_score(weights.evaluate(c, &inputs))),
    }
}
