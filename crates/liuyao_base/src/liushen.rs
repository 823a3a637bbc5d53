//! Liushen: the six rotating guardians, keyed by the day stem.
//!
//! The guardians cycle in a fixed order. The day stem selects a starting
//! offset (two stems per bucket, with Ji alone so the 10 stems balance
//! over 6 offsets), and line i takes the guardian at (offset + i − 1) mod 6.

use crate::ganzhi::Stem;

/// The six guardians in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guardian {
    Qinglong,
    Zhuque,
    Gouchen,
    Tengshe,
    Baihu,
    Xuanwu,
}

/// All 6 guardians in cyclic order (index 0 = Qinglong).
pub const ALL_GUARDIANS: [Guardian; 6] = [
    Guardian::Qinglong,
    Guardian::Zhuque,
    Guardian::Gouchen,
    Guardian::Tengshe,
    Guardian::Baihu,
    Guardian::Xuanwu,
];

impl Guardian {
    /// 0-based index in cyclic order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Qinglong => 0,
            Self::Zhuque => 1,
            Self::Gouchen => 2,
            Self::Tengshe => 3,
            Self::Baihu => 4,
            Self::Xuanwu => 5,
        }
    }

    /// Pinyin name of the guardian.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qinglong => "Qinglong",
            Self::Zhuque => "Zhuque",
            Self::Gouchen => "Gouchen",
            Self::Tengshe => "Tengshe",
            Self::Baihu => "Baihu",
            Self::Xuanwu => "Xuanwu",
        }
    }

    /// English name of the guardian.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Qinglong => "Azure Dragon",
            Self::Zhuque => "Vermilion Bird",
            Self::Gouchen => "Hooked Array",
            Self::Tengshe => "Coiling Snake",
            Self::Baihu => "White Tiger",
            Self::Xuanwu => "Black Tortoise",
        }
    }

    /// Traditional hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Qinglong => "青龍",
            Self::Zhuque => "朱雀",
            Self::Gouchen => "勾陳",
            Self::Tengshe => "螣蛇",
            Self::Baihu => "白虎",
            Self::Xuanwu => "玄武",
        }
    }

    /// All 6 guardians in order.
    pub const fn all() -> &'static [Guardian; 6] {
        &ALL_GUARDIANS
    }
}

/// Starting offset into the guardian cycle for a day stem.
///
/// Jia/Yi → 0, Bing/Ding → 1, Wu → 2, Ji → 3, Geng/Xin → 4, Ren/Gui → 5.
pub const fn start_offset(day_stem: Stem) -> u8 {
    match day_stem {
        Stem::Jia | Stem::Yi => 0,
        Stem::Bing | Stem::Ding => 1,
        Stem::Wu => 2,
        Stem::Ji => 3,
        Stem::Geng | Stem::Xin => 4,
        Stem::Ren | Stem::Gui => 5,
    }
}

/// Guardians for lines 1..6 (bottom to top) on the given day.
pub const fn sequence_for_day(day_stem: Stem) -> [Guardian; 6] {
    let offset = start_offset(day_stem);
    let mut out = [Guardian::Qinglong; 6];
    let mut i = 0;
    while i < 6 {
        out[i] = ALL_GUARDIANS[((offset + i as u8) % 6) as usize];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    #[test]
    fn jia_day_starts_at_qinglong() {
        assert_eq!(
            sequence_for_day(Stem::Jia),
            [
                Guardian::Qinglong,
                Guardian::Zhuque,
                Guardian::Gouchen,
                Guardian::Tengshe,
                Guardian::Baihu,
                Guardian::Xuanwu,
            ]
        );
    }

    #[test]
    fn gui_day_starts_at_xuanwu() {
        let seq = sequence_for_day(Stem::Gui);
        assert_eq!(seq[0], Guardian::Xuanwu);
        assert_eq!(seq[1], Guardian::Qinglong);
        assert_eq!(seq[5], Guardian::Baihu);
    }

    #[test]
    fn every_day_sequence_is_a_full_rotation() {
        for stem in ALL_STEMS {
            let seq = sequence_for_day(stem);
            let mut indices: Vec<u8> = seq.iter().map(|g| g.index()).collect();
            indices.sort_unstable();
            assert_eq!(indices, vec![0, 1, 2, 3, 4, 5], "day {}", stem.name());
            // Consecutive lines step through the cycle.
            for w in seq.windows(2) {
                assert_eq!((w[0].index() + 1) % 6, w[1].index());
            }
        }
    }

    #[test]
    fn offsets_cover_all_six_buckets() {
        let mut offsets: Vec<u8> = ALL_STEMS.iter().map(|s| start_offset(*s)).collect();
        offsets.sort_unstable();
        assert_eq!(offsets, vec![0, 0, 1, 1, 2, 3, 4, 4, 5, 5]);
    }
}
