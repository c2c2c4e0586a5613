//! Immutable lookup tables for four-pillar calculations.
//!
//! The knowledge base is parsed from TOML, validated in full, and then
//! frozen: every table is a dense array keyed by the canonical ordinal of
//! its stem, branch, element or month, and fields are private with
//! read-only accessors.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::KnowledgeError;
use crate::symbols::{ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Element, Stem};

/// Knowledge tables shipped with the crate.
pub const BUILTIN_KNOWLEDGE: &str = include_str!("../data/knowledge.toml");

/// Hidden-stem ratios of every branch sum to this value.
pub const HIDDEN_RATIO_TOTAL: u32 = 100;

/// Score each pillar stem contributes to its element. A knowledge file
/// must declare exactly this value so every chart totals 544.
pub const STEM_WEIGHT: u32 = 36;

/// One weighted hidden stem of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub ratio: u32,
}

#[derive(Debug, Deserialize)]
struct HiddenStemSource {
    stem: String,
    ratio: u32,
}

/// Raw layout of the TOML source. Every table is optional here so that a
/// missing one is reported by name.
#[derive(Debug, Deserialize)]
struct KnowledgeSource {
    stem_weight: Option<u32>,
    stems: Option<Vec<String>>,
    branches: Option<Vec<String>>,
    month_branches: Option<Vec<String>>,
    hour_branches: Option<Vec<String>>,
    stem_elements: Option<BTreeMap<String, String>>,
    five_tiger: Option<BTreeMap<String, String>>,
    five_rat: Option<BTreeMap<String, String>>,
    hidden_stems: Option<BTreeMap<String, Vec<HiddenStemSource>>>,
    century_constants: Option<BTreeMap<String, i32>>,
    month_base: Option<BTreeMap<String, i32>>,
    generates: Option<BTreeMap<String, String>>,
    controls: Option<BTreeMap<String, String>>,
}

/// Validated, read-only knowledge tables.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    stem_order: [Stem; 10],
    stem_pos: [u8; 10],
    branch_order: [Branch; 12],
    month_branches: [Branch; 12],
    hour_branches: [Branch; 12],
    stem_weight: u32,
    stem_element: [Element; 10],
    five_tiger: [Stem; 10],
    five_rat: [Stem; 10],
    hidden_stems: [Vec<HiddenStem>; 12],
    century_constants: BTreeMap<i32, i32>,
    month_base: [i32; 12],
    generated_by: [Element; 5],
    controlled_by: [Element; 5],
}

impl KnowledgeBase {
    /// Parse the tables embedded in the crate.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_toml_str(BUILTIN_KNOWLEDGE)
    }

    /// Load and validate a knowledge file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        info!(path = %path.display(), "loading knowledge base");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate knowledge tables from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeError> {
        let source: KnowledgeSource = toml::from_str(content)?;
        let kb = Self::from_source(source)?;
        debug!(
            stem_weight = kb.stem_weight,
            centuries = kb.century_constants.len(),
            "knowledge base validated"
        );
        Ok(kb)
    }

    fn from_source(src: KnowledgeSource) -> Result<Self, KnowledgeError> {
        let stem_weight = required(src.stem_weight, "stem_weight")?;
        if stem_weight != STEM_WEIGHT {
            return Err(KnowledgeError::StemWeight(stem_weight));
        }

        let (stem_order, stem_pos) =
            permutation::<Stem, 10>("stems", &required(src.stems, "stems")?, Stem::from_symbol, |s| {
                s.index() as usize
            })?;
        let (branch_order, _) = permutation::<Branch, 12>(
            "branches",
            &required(src.branches, "branches")?,
            Branch::from_symbol,
            |b| b.index() as usize,
        )?;
        let (month_branches, _) = permutation::<Branch, 12>(
            "month_branches",
            &required(src.month_branches, "month_branches")?,
            Branch::from_symbol,
            |b| b.index() as usize,
        )?;
        let (hour_branches, _) = permutation::<Branch, 12>(
            "hour_branches",
            &required(src.hour_branches, "hour_branches")?,
            Branch::from_symbol,
            |b| b.index() as usize,
        )?;

        let stem_element = dense::<_, _, 10>(
            "stem_elements",
            required(src.stem_elements, "stem_elements")?,
            |k| stem_key("stem_elements", k),
            |v| element_value("stem_elements", v),
            |i| ALL_STEMS[i].symbol().to_owned(),
        )?;
        let five_tiger = dense::<_, _, 10>(
            "five_tiger",
            required(src.five_tiger, "five_tiger")?,
            |k| stem_key("five_tiger", k),
            |v| stem_value("five_tiger", v),
            |i| ALL_STEMS[i].symbol().to_owned(),
        )?;
        let five_rat = dense::<_, _, 10>(
            "five_rat",
            required(src.five_rat, "five_rat")?,
            |k| stem_key("five_rat", k),
            |v| stem_value("five_rat", v),
            |i| ALL_STEMS[i].symbol().to_owned(),
        )?;

        let hidden_stems = dense::<_, _, 12>(
            "hidden_stems",
            required(src.hidden_stems, "hidden_stems")?,
            |k| {
                Branch::from_symbol(k)
                    .map(|b| b.index() as usize)
                    .ok_or_else(|| unknown("hidden_stems", k))
            },
            |entries: Vec<HiddenStemSource>| {
                entries
                    .into_iter()
                    .map(|e| {
                        Ok(HiddenStem {
                            stem: stem_value("hidden_stems", e.stem)?,
                            ratio: e.ratio,
                        })
                    })
                    .collect::<Result<Vec<_>, KnowledgeError>>()
            },
            |i| ALL_BRANCHES[i].symbol().to_owned(),
        )?;
        for (branch, entries) in ALL_BRANCHES.iter().zip(&hidden_stems) {
            let sum: u64 = entries.iter().map(|h| u64::from(h.ratio)).sum();
            if sum != u64::from(HIDDEN_RATIO_TOTAL) {
                return Err(KnowledgeError::RatioSum {
                    branch: branch.symbol().to_owned(),
                    sum,
                });
            }
        }

        let mut century_constants = BTreeMap::new();
        for (key, value) in required(src.century_constants, "century_constants")? {
            let century = key
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|c| c % 100 == 0)
                .ok_or_else(|| KnowledgeError::InvalidKey {
                    table: "century_constants",
                    key: key.clone(),
                })?;
            century_constants.insert(century, value);
        }

        let month_base = dense::<_, _, 12>(
            "month_base",
            required(src.month_base, "month_base")?,
            |k| {
                k.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|m| (1..=12).contains(m))
                    .map(|m| m - 1)
                    .ok_or_else(|| KnowledgeError::InvalidKey {
                        table: "month_base",
                        key: k.to_owned(),
                    })
            },
            Ok,
            |i| (i + 1).to_string(),
        )?;

        let generates = relation("generates", required(src.generates, "generates")?)?;
        let controls = relation("controls", required(src.controls, "controls")?)?;
        let generated_by = invert("generates", &generates)?;
        let controlled_by = invert("controls", &controls)?;

        Ok(Self {
            stem_order,
            stem_pos,
            branch_order,
            month_branches,
            hour_branches,
            stem_weight,
            stem_element,
            five_tiger,
            five_rat,
            hidden_stems,
            century_constants,
            month_base,
            generated_by,
            controlled_by,
        })
    }

    /// Stem at a position of the cyclic stem order (taken mod 10).
    pub fn stem_at(&self, cycle_index: usize) -> Stem {
        self.stem_order[cycle_index % 10]
    }

    /// Branch at a position of the cyclic branch order (taken mod 12).
    pub fn branch_at(&self, cycle_index: usize) -> Branch {
        self.branch_order[cycle_index % 12]
    }

    /// Position of `stem` within the cyclic stem order.
    pub fn stem_position(&self, stem: Stem) -> usize {
        self.stem_pos[stem.index() as usize] as usize
    }

    /// Walk `steps` stems forward from `stem` along the cyclic order.
    pub fn advance_stem(&self, stem: Stem, steps: usize) -> Stem {
        self.stem_at(self.stem_position(stem) + steps)
    }

    /// Month branch for a 0-based month index (0 = Tiger month).
    pub fn month_branch(&self, month_index: usize) -> Branch {
        self.month_branches[month_index % 12]
    }

    /// Hour branch for a 0-based hour index (0 = Rat hour).
    pub fn hour_branch(&self, hour_index: usize) -> Branch {
        self.hour_branches[hour_index % 12]
    }

    /// Fixed score every pillar stem contributes to its element.
    pub fn stem_weight(&self) -> u32 {
        self.stem_weight
    }

    pub fn element_of(&self, stem: Stem) -> Element {
        self.stem_element[stem.index() as usize]
    }

    /// Five-tiger-dun: stem of the Tiger month for a year stem.
    pub fn tiger_month_stem(&self, year_stem: Stem) -> Stem {
        self.five_tiger[year_stem.index() as usize]
    }

    /// Five-rat-dun: stem of the Rat hour for a day stem.
    pub fn rat_hour_stem(&self, day_stem: Stem) -> Stem {
        self.five_rat[day_stem.index() as usize]
    }

    pub fn hidden_stems(&self, branch: Branch) -> &[HiddenStem] {
        &self.hidden_stems[branch.index() as usize]
    }

    /// Day-pillar century constant; 0 for centuries not in the table.
    pub fn century_constant(&self, century: i32) -> i32 {
        self.century_constants.get(&century).copied().unwrap_or(0)
    }

    /// Day-pillar month base for `month` in `1..=12`.
    pub fn month_base(&self, month: u32) -> i32 {
        self.month_base[(month as usize + 11) % 12]
    }

    /// Element that produces `element`.
    pub fn producer_of(&self, element: Element) -> Element {
        self.generated_by[element.index() as usize]
    }

    /// Element that controls `element`.
    pub fn controller_of(&self, element: Element) -> Element {
        self.controlled_by[element.index() as usize]
    }

    /// Element-score total of any chart: 4 stems plus 4 fully weighted branches.
    pub fn chart_total(&self) -> u32 {
        4 * self.stem_weight + 4 * HIDDEN_RATIO_TOTAL
    }
}

fn required<T>(value: Option<T>, table: &'static str) -> Result<T, KnowledgeError> {
    value.ok_or(KnowledgeError::MissingTable(table))
}

fn unknown(table: &'static str, symbol: &str) -> KnowledgeError {
    KnowledgeError::UnknownSymbol {
        table,
        symbol: symbol.to_owned(),
    }
}

fn stem_key(table: &'static str, key: &str) -> Result<usize, KnowledgeError> {
    Stem::from_symbol(key)
        .map(|s| s.index() as usize)
        .ok_or_else(|| unknown(table, key))
}

fn stem_value(table: &'static str, value: String) -> Result<Stem, KnowledgeError> {
    Stem::from_symbol(&value).ok_or(KnowledgeError::UnknownSymbol {
        table,
        symbol: value,
    })
}

fn element_value(table: &'static str, value: String) -> Result<Element, KnowledgeError> {
    Element::from_symbol(&value).ok_or(KnowledgeError::UnknownSymbol {
        table,
        symbol: value,
    })
}

/// Parse an ordered list that must contain each of the `N` symbols once.
/// Returns the order and the position of each symbol by canonical index.
fn permutation<T: Copy, const N: usize>(
    table: &'static str,
    symbols: &[String],
    parse: impl Fn(&str) -> Option<T>,
    index: impl Fn(T) -> usize,
) -> Result<([T; N], [u8; N]), KnowledgeError> {
    if symbols.len() != N {
        return Err(KnowledgeError::Cardinality {
            table,
            expected: N,
            found: symbols.len(),
        });
    }
    let mut order = Vec::with_capacity(N);
    let mut pos = [0u8; N];
    let mut seen = [false; N];
    for (i, sym) in symbols.iter().enumerate() {
        let value = parse(sym).ok_or_else(|| unknown(table, sym))?;
        let idx = index(value);
        if seen[idx] {
            return Err(KnowledgeError::DuplicateSymbol {
                table,
                symbol: sym.clone(),
            });
        }
        seen[idx] = true;
        pos[idx] = i as u8;
        order.push(value);
    }
    let order: [T; N] = order.try_into().map_err(|v: Vec<T>| KnowledgeError::Cardinality {
        table,
        expected: N,
        found: v.len(),
    })?;
    Ok((order, pos))
}

/// Turn a keyed table into a dense array covering all `N` keys.
fn dense<R, V, const N: usize>(
    table: &'static str,
    entries: BTreeMap<String, R>,
    key: impl Fn(&str) -> Result<usize, KnowledgeError>,
    value: impl Fn(R) -> Result<V, KnowledgeError>,
    key_name: impl Fn(usize) -> String,
) -> Result<[V; N], KnowledgeError> {
    let mut slots: [Option<V>; N] = std::array::from_fn(|_| None);
    for (k, raw) in entries {
        let idx = key(&k)?;
        slots[idx] = Some(value(raw)?);
    }
    let mut out = Vec::with_capacity(N);
    for (i, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(v) => out.push(v),
            None => {
                return Err(KnowledgeError::MissingEntry {
                    table,
                    key: key_name(i),
                });
            }
        }
    }
    out.try_into().map_err(|v: Vec<V>| KnowledgeError::Cardinality {
        table,
        expected: N,
        found: v.len(),
    })
}

fn relation(
    table: &'static str,
    entries: BTreeMap<String, String>,
) -> Result<[Element; 5], KnowledgeError> {
    dense::<_, _, 5>(
        table,
        entries,
        |k| {
            Element::from_symbol(k)
                .map(|e| e.index() as usize)
                .ok_or_else(|| unknown(table, k))
        },
        |v| element_value(table, v),
        |i| ALL_ELEMENTS[i].symbol().to_owned(),
    )
}

/// Reverse a one-to-one element relation.
fn invert(table: &'static str, forward: &[Element; 5]) -> Result<[Element; 5], KnowledgeError> {
    let mut reverse: [Option<Element>; 5] = [None; 5];
    for (source, target) in ALL_ELEMENTS.iter().zip(forward) {
        let slot = &mut reverse[target.index() as usize];
        if slot.is_some() {
            return Err(KnowledgeError::NotBijective(table));
        }
        *slot = Some(*source);
    }
    let mut out = [Element::Wood; 5];
    for (dst, src) in out.iter_mut().zip(reverse) {
        *dst = src.ok_or(KnowledgeError::NotBijective(table))?;
    }
    Ok(out)
}
