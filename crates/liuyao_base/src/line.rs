//! Cast line values, polarities, and trigram-code packing.
//!
//! A casting supplies six raw values in {6, 7, 8, 9}, bottom to top.
//! Old (moving) lines are 6 and 9; yang lines are 7 and 9. The six
//! polarities pack into two 3-bit trigram codes, and moving lines flip
//! their polarity in the transformed figure.

use crate::error::LiuyaoError;
use crate::trigram::Trigram;

/// Yin/yang polarity of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    /// The opposite polarity.
    pub const fn flipped(self) -> Polarity {
        match self {
            Self::Yin => Polarity::Yang,
            Self::Yang => Polarity::Yin,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yin => "Yin",
            Self::Yang => "Yang",
        }
    }

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Yin => "陰",
            Self::Yang => "陽",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }
}

/// One raw cast line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineValue {
    /// 6 — old yin, moving.
    OldYin,
    /// 7 — young yang, static.
    YoungYang,
    /// 8 — young yin, static.
    YoungYin,
    /// 9 — old yang, moving.
    OldYang,
}

impl LineValue {
    /// The raw numeric value (6..9).
    pub const fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Parse a raw value; anything outside {6,7,8,9} is rejected. This is
    /// the validation boundary for line input.
    pub const fn from_value(value: u8) -> Result<LineValue, LiuyaoError> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(LiuyaoError::InvalidLineValue(other)),
        }
    }

    /// Old lines (6 and 9) move.
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Polarity in the primary figure (7 and 9 are yang).
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::YoungYang | Self::OldYang => Polarity::Yang,
            Self::YoungYin | Self::OldYin => Polarity::Yin,
        }
    }

    /// Polarity in the transformed figure: flipped for moving lines,
    /// unchanged otherwise.
    pub const fn transformed_polarity(self) -> Polarity {
        if self.is_moving() {
            self.polarity().flipped()
        } else {
            self.polarity()
        }
    }
}

/// Polarities of all six lines, bottom to top.
pub fn polarities(lines: &[LineValue; 6]) -> [Polarity; 6] {
    lines.map(LineValue::polarity)
}

/// Transformed polarities of all six lines, bottom to top.
pub fn transformed_polarities(lines: &[LineValue; 6]) -> [Polarity; 6] {
    lines.map(LineValue::transformed_polarity)
}

/// Positions (1..6, ascending) of the moving lines.
pub fn moving_positions(lines: &[LineValue; 6]) -> Vec<u8> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_moving())
        .map(|(i, _)| i as u8 + 1)
        .collect()
}

/// Pack six polarities (bottom to top) into (upper, lower) trigrams.
///
/// Lines 1..3 form the lower trigram, 4..6 the upper; within each, the
/// top line is the most significant bit.
pub fn trigram_pair(polarities: &[Polarity; 6]) -> (Trigram, Trigram) {
    let lower = polarities[2].bit() << 2 | polarities[1].bit() << 1 | polarities[0].bit();
    let upper = polarities[5].bit() << 2 | polarities[4].bit() << 1 | polarities[3].bit();
    (Trigram::from_code(upper), Trigram::from_code(lower))
}
