//! The 64 hexagrams with palace, palace order, and self/counterpart lines.
//!
//! The table is the traditional eight-palace correspondence reproduced
//! verbatim, grouped by palace in palace order. Lookup by (upper, lower)
//! trigram is total: a compile-time index maps every packed trigram-code
//! pair to its entry, so resolution can never miss.

use crate::trigram::Trigram;
use crate::wuxing::Element;

/// One named hexagram with its palace annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagram {
    /// Traditional hanzi name.
    pub name: &'static str,
    /// Upper trigram.
    pub upper: Trigram,
    /// Lower trigram.
    pub lower: Trigram,
    /// Owning palace trigram.
    pub palace: Trigram,
    /// Position within the palace family (1..8).
    pub palace_order: u8,
    /// Self ("shi") line position, 1..6.
    pub shi_position: u8,
    /// Counterpart ("ying") line position, 1..6.
    pub ying_position: u8,
}

impl Hexagram {
    /// Element of the owning palace.
    pub const fn palace_element(&self) -> Element {
        self.palace.element()
    }

    /// Wandering-soul hexagram (7th in its palace).
    pub const fn is_you_hun(&self) -> bool {
        self.palace_order == 7
    }

    /// Returning-soul hexagram (8th in its palace).
    pub const fn is_gui_hun(&self) -> bool {
        self.palace_order == 8
    }

    /// Packed 6-bit code: upper trigram code in the high bits.
    pub const fn code(&self) -> u8 {
        self.upper.code() << 3 | self.lower.code()
    }

    /// Resolve the hexagram for an (upper, lower) trigram pair.
    pub const fn from_trigrams(upper: Trigram, lower: Trigram) -> &'static Hexagram {
        let key = (upper.code() << 3 | lower.code()) as usize;
        &HEXAGRAMS[BY_CODE[key] as usize]
    }
}

const fn hex(
    name: &'static str,
    upper: Trigram,
    lower: Trigram,
    palace: Trigram,
    palace_order: u8,
    shi_position: u8,
    ying_position: u8,
) -> Hexagram {
    Hexagram {
        name,
        upper,
        lower,
        palace,
        palace_order,
        shi_position,
        ying_position,
    }
}

/// All 64 hexagrams in traditional palace order (8 palaces × 8 each).
pub const HEXAGRAMS: [Hexagram; 64] = {
    use Trigram::*;
    [
        // Qian palace
        hex("乾為天", Qian, Qian, Qian, 1, 6, 3),
        hex("天風姤", Qian, Xun, Qian, 2, 1, 4),
        hex("天山遯", Qian, Gen, Qian, 3, 2, 5),
        hex("天地否", Qian, Kun, Qian, 4, 3, 6),
        hex("風地觀", Xun, Kun, Qian, 5, 4, 1),
        hex("山地剝", Gen, Kun, Qian, 6, 5, 2),
        hex("火地晉", Li, Kun, Qian, 7, 4, 1),
        hex("火天大有", Li, Qian, Qian, 8, 3, 6),
        // Dui palace
        hex("兌為澤", Dui, Dui, Dui, 1, 6, 3),
        hex("澤水困", Dui, Kan, Dui, 2, 1, 4),
        hex("澤地萃", Dui, Kun, Dui, 3, 2, 5),
        hex("澤山咸", Dui, Gen, Dui, 4, 3, 6),
        hex("水山蹇", Kan, Gen, Dui, 5, 4, 1),
        hex("地山謙", Kun, Gen, Dui, 6, 5, 2),
        hex("雷山小過", Zhen, Gen, Dui, 7, 4, 1),
        hex("雷澤歸妹", Zhen, Dui, Dui, 8, 3, 6),
        // Li palace
        hex("離為火", Li, Li, Li, 1, 6, 3),
        hex("火山旅", Li, Gen, Li, 2, 1, 4),
        hex("火風鼎", Li, Xun, Li, 3, 2, 5),
        hex("火水未濟", Li, Kan, Li, 4, 3, 6),
        hex("山水蒙", Gen, Kan, Li, 5, 4, 1),
        hex("風水渙", Xun, Kan, Li, 6, 5, 2),
        hex("天水訟", Qian, Kan, Li, 7, 4, 1),
        hex("天火同人", Qian, Li, Li, 8, 3, 6),
        // Zhen palace
        hex("震為雷", Zhen, Zhen, Zhen, 1, 6, 3),
        hex("雷地豫", Zhen, Kun, Zhen, 2, 1, 4),
        hex("雷水解", Zhen, Kan, Zhen, 3, 2, 5),
        hex("雷風恆", Zhen, Xun, Zhen, 4, 3, 6),
        hex("地風升", Kun, Xun, Zhen, 5, 4, 1),
        hex("水風井", Kan, Xun, Zhen, 6, 5, 2),
        hex("澤風大過", Dui, Xun, Zhen, 7, 4, 1),
        hex("澤雷隨", Dui, Zhen, Zhen, 8, 3, 6),
        // Xun palace
        hex("巽為風", Xun, Xun, Xun, 1, 6, 3),
        hex("風天小畜", Xun, Qian, Xun, 2, 1, 4),
        hex("風火家人", Xun, Li, Xun, 3, 2, 5),
        hex("風雷益", Xun, Zhen, Xun, 4, 3, 6),
        hex("天雷無妄", Qian, Zhen, Xun, 5, 4, 1),
        hex("火雷噬嗑", Li, Zhen, Xun, 6, 5, 2),
        hex("山雷頤", Gen, Zhen, Xun, 7, 4, 1),
        hex("山風蠱", Gen, Xun, Xun, 8, 3, 6),
        // Kan palace
        hex("坎為水", Kan, Kan, Kan, 1, 6, 3),
        hex("水澤節", Kan, Dui, Kan, 2, 1, 4),
        hex("水雷屯", Kan, Zhen, Kan, 3, 2, 5),
        hex("水火既濟", Kan, Li, Kan, 4, 3, 6),
        hex("澤火革", Dui, Li, Kan, 5, 4, 1),
        hex("雷火豐", Zhen, Li, Kan, 6, 5, 2),
        hex("地火明夷", Kun, Li, Kan, 7, 4, 1),
        hex("地水師", Kun, Kan, Kan, 8, 3, 6),
        // Gen palace
        hex("艮為山", Gen, Gen, Gen, 1, 6, 3),
        hex("山火賁", Gen, Li, Gen, 2, 1, 4),
        hex("山天大畜", Gen, Qian, Gen, 3, 2, 5),
        hex("山澤損", Gen, Dui, Gen, 4, 3, 6),
        hex("火澤睽", Li, Dui, Gen, 5, 4, 1),
        hex("天澤履", Qian, Dui, Gen, 6, 5, 2),
        hex("風澤中孚", Xun, Dui, Gen, 7, 4, 1),
        hex("風山漸", Xun, Gen, Gen, 8, 3, 6),
        // Kun palace
        hex("坤為地", Kun, Kun, Kun, 1, 6, 3),
        hex("地雷復", Kun, Zhen, Kun, 2, 1, 4),
        hex("地澤臨", Kun, Dui, Kun, 3, 2, 5),
        hex("地天泰", Kun, Qian, Kun, 4, 3, 6),
        hex("雷天大壯", Zhen, Qian, Kun, 5, 4, 1),
        hex("澤天夬", Dui, Qian, Kun, 6, 5, 2),
        hex("水天需", Kan, Qian, Kun, 7, 4, 1),
        hex("水地比", Kan, Kun, Kun, 8, 3, 6),
    ]
};

/// Compile-time index from packed (upper, lower) code to table position.
const BY_CODE: [u8; 64] = {
    let mut idx = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        idx[HEXAGRAMS[i].code() as usize] = i as u8;
        i += 1;
    }
    idx
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::TRIGRAMS_BY_CODE;

    #[test]
    fn table_has_64_entries() {
        assert_eq!(HEXAGRAMS.len(), 64);
    }

    #[test]
    fn lookup_is_a_bijection() {
        // Every (upper, lower) pair resolves, all 64 names are distinct,
        // and the resolved entry echoes its own trigram pair.
        let mut names: Vec<&str> = Vec::new();
        for upper in TRIGRAMS_BY_CODE {
            for lower in TRIGRAMS_BY_CODE {
                let h = Hexagram::from_trigrams(upper, lower);
                assert_eq!(h.upper, upper);
                assert_eq!(h.lower, lower);
                assert!(!names.contains(&h.name), "duplicate name {}", h.name);
                names.push(h.name);
            }
        }
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn palace_families_complete() {
        // Each palace owns exactly 8 hexagrams with orders 1..8.
        for palace in TRIGRAMS_BY_CODE {
            let mut orders: Vec<u8> = HEXAGRAMS
                .iter()
                .filter(|h| h.palace == palace)
                .map(|h| h.palace_order)
                .collect();
            orders.sort_unstable();
            assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7, 8], "palace {}", palace.name());
        }
    }

    #[test]
    fn shi_and_ying_positions_valid() {
        for h in &HEXAGRAMS {
            assert!((1..=6).contains(&h.shi_position), "{}", h.name);
            assert!((1..=6).contains(&h.ying_position), "{}", h.name);
            assert_ne!(h.shi_position, h.ying_position, "{}", h.name);
            // Shi and ying always sit three lines apart.
            assert_eq!(h.shi_position.abs_diff(h.ying_position), 3, "{}", h.name);
        }
    }

    #[test]
    fn soul_flags_follow_palace_order() {
        for h in &HEXAGRAMS {
            assert_eq!(h.is_you_hun(), h.palace_order == 7);
            assert_eq!(h.is_gui_hun(), h.palace_order == 8);
        }
    }

    #[test]
    fn pure_hexagrams_lead_their_palaces() {
        // Order 1 of each palace is the doubled palace trigram.
        for h in HEXAGRAMS.iter().filter(|h| h.palace_order == 1) {
            assert_eq!(h.upper, h.palace);
            assert_eq!(h.lower, h.palace);
        }
    }

    #[test]
    fn known_lookups() {
        let qian = Hexagram::from_trigrams(Trigram::Qian, Trigram::Qian);
        assert_eq!(qian.name, "乾為天");
        assert_eq!(qian.shi_position, 6);
        assert_eq!(qian.ying_position, 3);

        let xian = Hexagram::from_trigrams(Trigram::Dui, Trigram::Gen);
        assert_eq!(xian.name, "澤山咸");
        assert_eq!(xian.palace, Trigram::Dui);
        assert_eq!(xian.palace_element(), Element::Metal);
        assert_eq!(xian.palace_order, 4);

        let jin = Hexagram::from_trigrams(Trigram::Li, Trigram::Kun);
        assert_eq!(jin.name, "火地晉");
        assert!(jin.is_you_hun());

        let dayou = Hexagram::from_trigrams(Trigram::Li, Trigram::Qian);
        assert_eq!(dayou.name, "火天大有");
        assert!(dayou.is_gui_hun());
    }
}
