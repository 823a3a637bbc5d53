//! The eight trigrams (bagua) with their 3-bit codes and elements.
//!
//! A trigram's code packs its three lines as bits, top line most
//! significant, yang = 1. Code ↔ trigram is a bijection over 0..8, which
//! makes the 64-hexagram lookup a plain array index.

use crate::wuxing::Element;

/// The 8 trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All 8 trigrams ordered by 3-bit code (index 0 = Kun = 0b000).
pub const TRIGRAMS_BY_CODE: [Trigram; 8] = [
    Trigram::Kun,  // 0b000
    Trigram::Gen,  // 0b001
    Trigram::Kan,  // 0b010
    Trigram::Xun,  // 0b011
    Trigram::Zhen, // 0b100
    Trigram::Li,   // 0b101
    Trigram::Dui,  // 0b110
    Trigram::Qian, // 0b111
];

impl Trigram {
    /// 3-bit line code (top line = bit 2, yang = 1).
    pub const fn code(self) -> u8 {
        match self {
            Self::Kun => 0b000,
            Self::Gen => 0b001,
            Self::Kan => 0b010,
            Self::Xun => 0b011,
            Self::Zhen => 0b100,
            Self::Li => 0b101,
            Self::Dui => 0b110,
            Self::Qian => 0b111,
        }
    }

    /// Pinyin name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Fixed element of the trigram.
    pub const fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Trigram for a 3-bit code. Callers pack codes from polarities, so
    /// only the low 3 bits are meaningful.
    pub const fn from_code(code: u8) -> Trigram {
        TRIGRAMS_BY_CODE[(code & 0b111) as usize]
    }

    /// Parse a pinyin (ASCII case-insensitive) or hanzi trigram name.
    pub fn from_name(s: &str) -> Option<Trigram> {
        TRIGRAMS_BY_CODE
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.chinese() == s)
    }

    /// All 8 trigrams ordered by code.
    pub const fn all() -> &'static [Trigram; 8] {
        &TRIGRAMS_BY_CODE
    }
}
