//! Five-element scoring and guardian/taboo element selection.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::knowledge::KnowledgeBase;
use crate::pillar::Chart;
use crate::symbols::{ALL_ELEMENTS, Element};

/// Score per element, indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FiveElementScore {
    values: [u32; 5],
}

impl FiveElementScore {
    /// Build from scores in 木火土金水 order.
    pub const fn new(wood: u32, fire: u32, earth: u32, metal: u32, water: u32) -> Self {
        Self {
            values: [wood, fire, earth, metal, water],
        }
    }

    pub const fn get(&self, element: Element) -> u32 {
        self.values[element.index() as usize]
    }

    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// (element, score) pairs in 木火土金水 order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    pub fn min(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    fn add(&mut self, element: Element, amount: u32) {
        self.values[element.index() as usize] += amount;
    }
}

impl Serialize for FiveElementScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, v) in self.iter() {
            map.serialize_entry(e.symbol(), &v)?;
        }
        map.end()
    }
}

/// Sum the stem weight of each pillar stem and the hidden-stem ratios of
/// each pillar branch into their elements.
pub fn score_elements(kb: &KnowledgeBase, chart: &Chart) -> FiveElementScore {
    let mut score = FiveElementScore::default();
    for pillar in chart.pillars() {
        score.add(kb.element_of(pillar.stem), kb.stem_weight());
    }
    for pillar in chart.pillars() {
        for hidden in kb.hidden_stems(pillar.branch) {
            score.add(kb.element_of(hidden.stem), hidden.ratio);
        }
    }
    score
}

/// Element sets derived from a score's imbalance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardianResult {
    /// Ordered, deduplicated guardian candidates.
    pub guardian: Vec<Element>,
    pub taboo: Vec<Element>,
    /// Elements at the minimum score.
    pub deficient: Vec<Element>,
    /// Elements at the maximum score.
    pub excess: Vec<Element>,
}

/// Select guardian and taboo elements.
///
/// Guardian order: every deficient element, then the controller of each
/// excess element, then the producer of each deficient element. An element
/// already listed is not repeated. Taboo elements are the excess ones.
pub fn select_guardians(kb: &KnowledgeBase, score: &FiveElementScore) -> GuardianResult {
    let (min, max) = (score.min(), score.max());
    let deficient: Vec<Element> = score.iter().filter(|&(_, v)| v == min).map(|(e, _)| e).collect();
    let excess: Vec<Element> = score.iter().filter(|&(_, v)| v == max).map(|(e, _)| e).collect();

    let mut guardian: Vec<Element> = Vec::with_capacity(5);
    let candidates = deficient
        .iter()
        .copied()
        .chain(excess.iter().map(|&e| kb.controller_of(e)))
        .chain(deficient.iter().map(|&e| kb.producer_of(e)));
    for e in candidates {
        if !guardian.contains(&e) {
            guardian.push(e);
        }
    }

    GuardianResult {
        guardian,
        taboo: excess.clone(),
        deficient,
        excess,
    }
}
