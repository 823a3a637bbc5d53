//! Liuqin: the 5-way kinship classification of a line against its palace.
//!
//! Exactly one case fires for every (line element, palace element) pair;
//! the five rules partition all 25 pairs because generation and overcoming
//! are total bijective cycles.

use crate::wuxing::Element;

/// The five kinship roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kinship {
    Parent,
    Sibling,
    Offspring,
    Wealth,
    Officer,
}

/// All 5 kinship roles (index 0 = Parent).
pub const ALL_KINSHIPS: [Kinship; 5] = [
    Kinship::Parent,
    Kinship::Sibling,
    Kinship::Offspring,
    Kinship::Wealth,
    Kinship::Officer,
];

impl Kinship {
    /// 0-based index (Parent=0 .. Officer=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Parent => 0,
            Self::Sibling => 1,
            Self::Offspring => 2,
            Self::Wealth => 3,
            Self::Officer => 4,
        }
    }

    /// English name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Offspring => "Offspring",
            Self::Wealth => "Wealth",
            Self::Officer => "Officer",
        }
    }

    /// Traditional hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Parent => "父母",
            Self::Sibling => "兄弟",
            Self::Offspring => "子孫",
            Self::Wealth => "妻財",
            Self::Officer => "官鬼",
        }
    }

    /// All 5 roles in order.
    pub const fn all() -> &'static [Kinship; 5] {
        &ALL_KINSHIPS
    }
}

/// Classify a line element against the palace element.
///
/// Same element → Sibling; line generates palace → Parent; palace
/// generates line → Offspring; line overcomes palace → Officer; palace
/// overcomes line → Wealth.
pub fn classify(line: Element, palace: Element) -> Kinship {
    if line == palace {
        Kinship::Sibling
    } else if line.generates() == palace {
        Kinship::Parent
    } else if palace.generates() == line {
        Kinship::Offspring
    } else if line.overcomes() == palace {
        Kinship::Officer
    } else {
        debug_assert_eq!(palace.overcomes(), line);
        Kinship::Wealth
    }
}
