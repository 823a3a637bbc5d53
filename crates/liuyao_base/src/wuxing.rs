//! Wuxing (five elements) and the generation/overcoming cycles.
//!
//! The five elements form two total cyclic relations: each element
//! generates exactly one other (Wood → Fire → Earth → Metal → Water → Wood)
//! and overcomes exactly one other (Wood → Earth → Water → Fire → Metal →
//! Wood). Every classifier in this crate reduces to these two functions.

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Generation cycle, indexed by [`Element::index`]: element i generates
/// `GENERATES[i]`.
const GENERATES: [Element; 5] = [
    Element::Fire,  // Wood generates Fire
    Element::Earth, // Fire generates Earth
    Element::Metal, // Earth generates Metal
    Element::Water, // Metal generates Water
    Element::Wood,  // Water generates Wood
];

/// Overcoming cycle, indexed by [`Element::index`]: element i overcomes
/// `OVERCOMES[i]`.
const OVERCOMES: [Element; 5] = [
    Element::Earth, // Wood overcomes Earth
    Element::Metal, // Fire overcomes Metal
    Element::Water, // Earth overcomes Water
    Element::Wood,  // Metal overcomes Wood
    Element::Fire,  // Water overcomes Fire
];

impl Element {
    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        GENERATES[self.index() as usize]
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Element {
        OVERCOMES[self.index() as usize]
    }

    /// All 5 elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generation_is_a_5_cycle() {
        for e in ALL_ELEMENTS {
            // Applying generates five times returns to the start,
            // and never earlier.
            let mut cur = e;
            for step in 1..=5 {
                cur = cur.generates();
                if step < 5 {
                    assert_ne!(cur, e, "generation cycle closed early at {}", e.name());
                }
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn overcoming_is_a_5_cycle() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for step in 1..=5 {
                cur = cur.overcomes();
                if step < 5 {
                    assert_ne!(cur, e, "overcoming cycle closed early at {}", e.name());
                }
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn generation_and_overcoming_are_bijective() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                if a != b {
                    assert_ne!(a.generates(), b.generates());
                    assert_ne!(a.overcomes(), b.overcomes());
                }
            }
        }
    }

    #[test]
    fn known_relations() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
    }
}
