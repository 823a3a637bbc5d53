//! Ganzhi primitives: the 10 heavenly stems and 12 earthly branches.
//!
//! Stems and branches are the calendrical inputs of a casting. The engine
//! never derives them from a date; the calendar collaborator resolves a
//! moment into stem/branch values and passes them in as plain enums.
//! Each branch carries a fixed element; stems matter only through their
//! canonical index (guardian offset, void-branch arithmetic).

use crate::wuxing::Element;

/// The 10 heavenly stems in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// All 10 stems in order (index 0 = Jia).
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

impl Stem {
    /// 0-based canonical index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Pinyin name of the stem.
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

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Stem at a canonical index (0..9), or None out of range.
    pub const fn from_index(index: u8) -> Option<Stem> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Parse a pinyin (ASCII case-insensitive) or hanzi stem name.
    pub fn from_name(s: &str) -> Option<Stem> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(s) || st.chinese() == s)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

/// The 12 earthly branches in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// All 12 branches in order (index 0 = Zi).
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

impl Branch {
    /// 0-based canonical index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Fixed element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Branch at a canonical index (0..11), or None out of range.
    pub const fn from_index(index: u8) -> Option<Branch> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch at a canonical index taken modulo 12.
    pub const fn from_index_cyclic(index: u8) -> Branch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Parse a pinyin (ASCII case-insensitive) or hanzi branch name.
    pub fn from_name(s: &str) -> Option<Branch> {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|br| br.name().eq_ignore_ascii_case(s) || br.chinese() == s)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}
