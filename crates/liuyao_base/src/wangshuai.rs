//! Wangshuai: element strength against a reference branch.
//!
//! A line's element is weighed once against the month branch and once
//! against the day branch, yielding one of five states in each case.
//! First matching rule wins; because the element cycles are total
//! bijections, the fifth state holds whenever the first four rules fail.

use crate::ganzhi::Branch;
use crate::wuxing::Element;

/// The five strength states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthState {
    /// 旺 — same element as the reference.
    Prosperous,
    /// 相 — generated by the reference.
    Assisted,
    /// 休 — generates the reference.
    Resting,
    /// 囚 — overcomes the reference.
    Confined,
    /// 死 — overcome by the reference.
    Dead,
}

/// All 5 strength states in rule order.
pub const ALL_STRENGTH_STATES: [StrengthState; 5] = [
    StrengthState::Prosperous,
    StrengthState::Assisted,
    StrengthState::Resting,
    StrengthState::Confined,
    StrengthState::Dead,
];

impl StrengthState {
    /// 0-based index in rule order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Prosperous => 0,
            Self::Assisted => 1,
            Self::Resting => 2,
            Self::Confined => 3,
            Self::Dead => 4,
        }
    }

    /// English name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperous => "Prosperous",
            Self::Assisted => "Assisted",
            Self::Resting => "Resting",
            Self::Confined => "Confined",
            Self::Dead => "Dead",
        }
    }

    /// Traditional hanzi character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Prosperous => "旺",
            Self::Assisted => "相",
            Self::Resting => "休",
            Self::Confined => "囚",
            Self::Dead => "死",
        }
    }
}

/// Classify `target` against the element of `reference`.
pub fn classify(target: Element, reference: Branch) -> StrengthState {
    classify_elements(target, reference.element())
}

/// Classify `target` against a reference element directly.
pub fn classify_elements(target: Element, reference: Element) -> StrengthState {
    if target == reference {
        StrengthState::Prosperous
    } else if reference.generates() == target {
        StrengthState::Assisted
    } else if target.generates() == reference {
        StrengthState::Resting
    } else if target.overcomes() == reference {
        StrengthState::Confined
    } else {
        // The only remaining relation in a total 5-cycle.
        debug_assert_eq!(reference.overcomes(), target);
        StrengthState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wuxing::ALL_ELEMENTS;

    #[test]
    fn totality_over_all_25_pairs() {
        for target in ALL_ELEMENTS {
            for reference in ALL_ELEMENTS {
                let rules = [
                    target == reference,
                    reference.generates() == target,
                    target.generates() == reference,
                    target.overcomes() == reference,
                    reference.overcomes() == target,
                ];
                assert_eq!(
                    rules.iter().filter(|r| **r).count(),
                    1,
                    "{} vs {}",
                    target.name(),
                    reference.name()
                );
                let expected = ALL_STRENGTH_STATES[rules.iter().position(|r| *r).unwrap()];
                assert_eq!(classify_elements(target, reference), expected);
            }
        }
    }

    #[test]
    fn known_cases_against_fire_month() {
        // Month branch Wu carries Fire.
        let month = Branch::Wu;
        assert_eq!(classify(Element::Fire, month), StrengthState::Prosperous);
        assert_eq!(classify(Element::Earth, month), StrengthState::Assisted);
        assert_eq!(classify(Element::Wood, month), StrengthState::Resting);
        assert_eq!(classify(Element::Water, month), StrengthState::Confined);
        assert_eq!(classify(Element::Metal, month), StrengthState::Dead);
    }

    #[test]
    fn known_cases_against_water_day() {
        let day = Branch::Zi;
        assert_eq!(classify(Element::Water, day), StrengthState::Prosperous);
        assert_eq!(classify(Element::Wood, day), StrengthState::Assisted);
        assert_eq!(classify(Element::Metal, day), StrengthState::Resting);
        assert_eq!(classify(Element::Earth, day), StrengthState::Confined);
        assert_eq!(classify(Element::Fire, day), StrengthState::Dead);
    }
}
