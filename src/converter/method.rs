use std::fmt;
use std::str::FromStr;

use super::ConvertError;

/// Romanization systems supported by [`to_romaji`](super::to_romaji).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RomanizationMethod {
    /// Modified Hepburn; long katakana vowels are doubled (`suupaa`).
    #[default]
    Hepburn,
    /// Hepburn with macrons on long katakana vowels (`sūpā`).
    HepburnMacron,
    /// Kunrei-shiki (`si`, `tya`, `hu`).
    Kunrei,
    /// Nihon-shiki; Kunrei plus `di`, `du`, `wo`.
    Nihon,
    /// Word-processor input style; long vowels as `-` (`su-pa-`).
    Wapuro,
}

impl RomanizationMethod {
    pub const COUNT: usize = 5;

    pub const ALL: [RomanizationMethod; Self::COUNT] = [
        RomanizationMethod::Hepburn,
        RomanizationMethod::HepburnMacron,
        RomanizationMethod::Kunrei,
        RomanizationMethod::Nihon,
        RomanizationMethod::Wapuro,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RomanizationMethod::Hepburn => "hepburn",
            RomanizationMethod::HepburnMacron => "hepburn-macron",
            RomanizationMethod::Kunrei => "kunrei",
            RomanizationMethod::Nihon => "nihon",
            RomanizationMethod::Wapuro => "wapuro",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RomanizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RomanizationMethod {
    type Err = ConvertError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "hepburn" => Ok(RomanizationMethod::Hepburn),
            "hepburn-macron" | "traditional-hepburn" => Ok(RomanizationMethod::HepburnMacron),
            "kunrei" | "kunrei-shiki" => Ok(RomanizationMethod::Kunrei),
            "nihon" | "nihon-shiki" | "nippon" | "nippon-shiki" => Ok(RomanizationMethod::Nihon),
            "wapuro" | "wapuro-romaji" => Ok(RomanizationMethod::Wapuro),
            _ => Err(ConvertError::UnsupportedMethod(s.to_string())),
        }
    }
}
