//! Heavenly stems, earthly branches and the five elements.
//!
//! Each enum carries its canonical ordinal (`index`) and symbol. The cyclic
//! order used in calculations comes from the knowledge base, which may only
//! permute these symbols, never add to them.

use serde::{Serialize, Serializer};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in canonical order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_SYMBOLS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based canonical index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// CJK symbol, e.g. "甲".
    pub const fn symbol(self) -> &'static str {
        STEM_SYMBOLS[self as usize]
    }

    /// Pinyin name, e.g. "Jia".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        STEM_SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .map(|i| ALL_STEMS[i])
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in canonical order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_SYMBOLS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// 0-based canonical index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// CJK symbol, e.g. "子".
    pub const fn symbol(self) -> &'static str {
        BRANCH_SYMBOLS[self as usize]
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        BRANCH_SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .map(|i| ALL_BRANCHES[i])
    }
}

/// The five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in scoring order (木火土金水).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

const ELEMENT_SYMBOLS: [&str; 5] = ["木", "火", "土", "金", "水"];

impl Element {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// CJK symbol, e.g. "木".
    pub const fn symbol(self) -> &'static str {
        ELEMENT_SYMBOLS[self as usize]
    }

    /// English name, e.g. "Wood".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        ELEMENT_SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .map(|i| ALL_ELEMENTS[i])
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
