//! Tzolkin (260-day cycle) Kin number, seal, tone and wavespell.
//!
//! Three interchangeable algorithms produce the Kin of a civil date:
//!
//! - `Naive`: elapsed civil days since the epoch, mod 260.
//! - `Dreamspell`: as `Naive`, but February 29 does not advance the count,
//!   so after the epoch a leap day shares the Kin of February 28 (before
//!   it, the Kin of March 1). The variant is not periodic in civil days.
//! - `Classical`: Julian Day Number minus the GMT correlation constant.
//!
//! Seal, tone and wavespell are pure functions of the Kin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unsei_time::{CivilDate, leap_days_between};

/// Length of the Tzolkin cycle.
pub const TZOLKIN_DAYS: i64 = 260;

/// Epoch of the naive and Dreamspell counts: 1987-07-26 is Kin 1.
pub const DREAMSPELL_EPOCH: CivilDate = match CivilDate::checked(1987, 7, 26) {
    Some(d) => d,
    None => panic!("invalid Tzolkin epoch"),
};

/// Julian Day Number of the GMT correlation (Long Count 13.0.0.0.0).
pub const GMT_CORRELATION_JDN: i64 = 584_283;

/// The 20 seals (day signs), shared by the sign and wavespell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seal {
    RedDragon,
    WhiteWind,
    BlueNight,
    YellowSeed,
    RedSerpent,
    WhiteWorldBridger,
    BlueHand,
    YellowStar,
    RedMoon,
    WhiteDog,
    BlueMonkey,
    YellowHuman,
    RedSkywalker,
    WhiteWizard,
    BlueEagle,
    YellowWarrior,
    RedEarth,
    WhiteMirror,
    BlueStorm,
    YellowSun,
}

/// All 20 seals in order (index 0 = Red Dragon).
pub const ALL_SEALS: [Seal; 20] = [
    Seal::RedDragon,
    Seal::WhiteWind,
    Seal::BlueNight,
    Seal::YellowSeed,
    Seal::RedSerpent,
    Seal::WhiteWorldBridger,
    Seal::BlueHand,
    Seal::YellowStar,
    Seal::RedMoon,
    Seal::WhiteDog,
    Seal::BlueMonkey,
    Seal::YellowHuman,
    Seal::RedSkywalker,
    Seal::WhiteWizard,
    Seal::BlueEagle,
    Seal::YellowWarrior,
    Seal::RedEarth,
    Seal::WhiteMirror,
    Seal::BlueStorm,
    Seal::YellowSun,
];

const SEAL_NAMES: [&str; 20] = [
    "Red Dragon",
    "White Wind",
    "Blue Night",
    "Yellow Seed",
    "Red Serpent",
    "White World-Bridger",
    "Blue Hand",
    "Yellow Star",
    "Red Moon",
    "White Dog",
    "Blue Monkey",
    "Yellow Human",
    "Red Skywalker",
    "White Wizard",
    "Blue Eagle",
    "Yellow Warrior",
    "Red Earth",
    "White Mirror",
    "Blue Storm",
    "Yellow Sun",
];

const SEAL_NAMES_JA: [&str; 20] = [
    "赤い竜",
    "白い風",
    "青い夜",
    "黄色い種",
    "赤い蛇",
    "白い世界の橋渡し",
    "青い手",
    "黄色い星",
    "赤い月",
    "白い犬",
    "青い猿",
    "黄色い人",
    "赤い空歩く人",
    "白い魔法使い",
    "青い鷲",
    "黄色い戦士",
    "赤い地球",
    "白い鏡",
    "青い嵐",
    "黄色い太陽",
];

const TONE_NAMES: [&str; 13] = [
    "Magnetic",
    "Lunar",
    "Electric",
    "Self-Existing",
    "Overtone",
    "Rhythmic",
    "Resonant",
    "Galactic",
    "Solar",
    "Planetary",
    "Spectral",
    "Crystal",
    "Cosmic",
];

impl Seal {
    /// 0-based index (Red Dragon=0 .. Yellow Sun=19).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        SEAL_NAMES[self as usize]
    }

    /// Japanese name, e.g. "赤い竜".
    pub const fn japanese_name(self) -> &'static str {
        SEAL_NAMES_JA[self as usize]
    }
}

impl Serialize for Seal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Name of a galactic tone in `1..=13`.
pub fn tone_name(tone: u8) -> Option<&'static str> {
    TONE_NAMES.get(usize::from(tone).checked_sub(1)?).copied()
}

/// A Kin number in `1..=260`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Kin(u16);

impl Kin {
    pub const fn new(n: u16) -> Option<Self> {
        if n >= 1 && n <= TZOLKIN_DAYS as u16 {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Kin for any signed day count, where count 0 is Kin 1.
    pub const fn from_day_count(days: i64) -> Self {
        Self(days.rem_euclid(TZOLKIN_DAYS) as u16 + 1)
    }

    pub const fn number(self) -> u16 {
        self.0
    }

    /// Day sign: `(kin - 1) mod 20`.
    pub const fn seal(self) -> Seal {
        ALL_SEALS[((self.0 - 1) % 20) as usize]
    }

    /// Galactic tone: `(kin - 1) mod 13 + 1`.
    pub const fn tone(self) -> u8 {
        ((self.0 - 1) % 13) as u8 + 1
    }

    /// Seal of the 13-day wavespell containing this Kin.
    pub const fn wavespell(self) -> Seal {
        ALL_SEALS[(((self.0 - 1) / 13) % 20) as usize]
    }
}

impl Display for Kin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kin {}", self.0)
    }
}

/// Kin calculation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KinVariant {
    #[default]
    Naive,
    Dreamspell,
    Classical,
}

impl KinVariant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dreamspell => "Dreamspell (13 Moon Calendar)",
            Self::Classical => "Classical Maya (GMT Correlation)",
        }
    }
}

impl FromStr for KinVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "dreamspell" => Ok(Self::Dreamspell),
            "classical" | "gmt" => Ok(Self::Classical),
            other => Err(format!(
                "unknown Kin variant '{other}' (naive, dreamspell, classical)"
            )),
        }
    }
}

/// Compute the Kin of `date` under `variant`.
pub fn compute_kin(date: CivilDate, variant: KinVariant) -> Kin {
    match variant {
        KinVariant::Naive => Kin::from_day_count(date.days_since(DREAMSPELL_EPOCH)),
        KinVariant::Dreamspell => {
            let epoch = DREAMSPELL_EPOCH;
            let days = date.days_since(epoch);
            let leap_days = if days >= 0 {
                leap_days_between(epoch, date)
            } else {
                -leap_days_between(date, epoch)
            };
            Kin::from_day_count(days - leap_days)
        }
        KinVariant::Classical => Kin::from_day_count(date.jdn() - GMT_CORRELATION_JDN),
    }
}

/// Kin together with its derived attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KinReading {
    pub kin: Kin,
    pub seal: Seal,
    pub tone: u8,
    pub wavespell: Seal,
    pub variant: KinVariant,
}

impl KinReading {
    pub const fn from_kin(kin: Kin, variant: KinVariant) -> Self {
        Self {
            kin,
            seal: kin.seal(),
            tone: kin.tone(),
            wavespell: kin.wavespell(),
            variant,
        }
    }
}

/// Compute the Kin of `date` and derive seal, tone and wavespell.
pub fn kin_reading(date: CivilDate, variant: KinVariant) -> KinReading {
    KinReading::from_kin(compute_kin(date, variant), variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn kin_bounds() {
        assert!(Kin::new(0).is_none());
        assert!(Kin::new(261).is_none());
        assert_eq!(Kin::new(260).map(Kin::number), Some(260));
    }

    #[test]
    fn day_count_normalization() {
        assert_eq!(Kin::from_day_count(0).number(), 1);
        assert_eq!(Kin::from_day_count(-1).number(), 260);
        assert_eq!(Kin::from_day_count(259).number(), 260);
        assert_eq!(Kin::from_day_count(260).number(), 1);
        assert_eq!(Kin::from_day_count(-260).number(), 1);
    }

    #[test]
    fn derivations_at_extremes() {
        let first = Kin::new(1).unwrap();
        assert_eq!(first.seal(), Seal::RedDragon);
        assert_eq!(first.tone(), 1);
        assert_eq!(first.wavespell(), Seal::RedDragon);

        let last = Kin::new(260).unwrap();
        assert_eq!(last.seal(), Seal::YellowSun);
        assert_eq!(last.tone(), 13);
        assert_eq!(last.wavespell(), Seal::YellowSun);

        // Kin 14 opens the second wavespell
        let k = Kin::new(14).unwrap();
        assert_eq!(k.wavespell(), Seal::WhiteWind);
        assert_eq!(k.tone(), 1);
        assert_eq!(k.seal(), Seal::WhiteWizard);
    }

    #[test]
    fn epoch_is_kin_one_for_calendar_variants() {
        let e = date(1987, 7, 26);
        assert_eq!(compute_kin(e, KinVariant::Naive).number(), 1);
        assert_eq!(compute_kin(e, KinVariant::Dreamspell).number(), 1);
        assert_eq!(compute_kin(date(1987, 7, 25), KinVariant::Naive).number(), 260);
    }

    #[test]
    fn dreamspell_leap_day_shares_kin() {
        let feb28 = compute_kin(date(1988, 2, 28), KinVariant::Dreamspell);
        let feb29 = compute_kin(date(1988, 2, 29), KinVariant::Dreamspell);
        let mar1 = compute_kin(date(1988, 3, 1), KinVariant::Dreamspell);
        assert_eq!(feb28.number(), 218);
        assert_eq!(feb29, feb28);
        assert_eq!(mar1.number(), 219);
        assert_eq!(compute_kin(date(1988, 2, 29), KinVariant::Naive).number(), 219);
    }

    #[test]
    fn dreamspell_before_epoch() {
        // Before the epoch the leap count is negated, so Feb 29 merges
        // with the following day instead of the preceding one.
        let feb28 = compute_kin(date(1984, 2, 28), KinVariant::Dreamspell);
        let feb29 = compute_kin(date(1984, 2, 29), KinVariant::Dreamspell);
        let mar1 = compute_kin(date(1984, 3, 1), KinVariant::Dreamspell);
        assert_eq!(feb29, mar1);
        assert_eq!(Kin::from_day_count(feb28.number() as i64), feb29);
    }

    #[test]
    fn classical_long_count_end() {
        // 2012-12-21 is 13.0.0.0.0; JDN 2456283 - 584283 = 7200 * 260
        assert_eq!(compute_kin(date(2012, 12, 21), KinVariant::Classical).number(), 1);
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("Dreamspell".parse::<KinVariant>(), Ok(KinVariant::Dreamspell));
        assert_eq!("gmt".parse::<KinVariant>(), Ok(KinVariant::Classical));
        assert!("haab".parse::<KinVariant>().is_err());
    }

    #[test]
    fn tone_names() {
        assert_eq!(tone_name(1), Some("Magnetic"));
        assert_eq!(tone_name(13), Some("Cosmic"));
        assert_eq!(tone_name(0), None);
        assert_eq!(tone_name(14), None);
    }

    #[test]
    fn reading_is_deterministic() {
        let a = kin_reading(date(2020, 2, 5), KinVariant::Dreamspell);
        let b = KinReading::from_kin(a.kin, KinVariant::Dreamspell);
        assert_eq!(a, b);
    }
}
