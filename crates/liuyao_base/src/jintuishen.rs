//! Jintuishen: advance/retreat classification of a moving line's branch
//! transition.
//!
//! Eight branches have an "advance" successor and eight have a "retreat"
//! predecessor; a moving line whose transformed branch matches one of
//! these is an advancing or retreating spirit, otherwise neither.

use crate::ganzhi::Branch;

/// Advancing or retreating spirit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvanceRetreat {
    /// 進神 — the transition strengthens the line.
    Advancing,
    /// 退神 — the transition weakens the line.
    Retreating,
}

impl AdvanceRetreat {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Advancing => "Advancing",
            Self::Retreating => "Retreating",
        }
    }

    /// Traditional hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Advancing => "進神",
            Self::Retreating => "退神",
        }
    }
}

/// Advance successor of a branch, if it has one (8 of 12 do).
pub const fn advance_target(branch: Branch) -> Option<Branch> {
    use Branch::*;
    match branch {
        Hai => Some(Zi),
        Yin => Some(Mao),
        Si => Some(Wu),
        Shen => Some(You),
        Chou => Some(Chen),
        Chen => Some(Wei),
        Wei => Some(Xu),
        Xu => Some(Chou),
        _ => None,
    }
}

/// Retreat predecessor of a branch, if it has one (8 of 12 do).
pub const fn retreat_target(branch: Branch) -> Option<Branch> {
    use Branch::*;
    match branch {
        Zi => Some(Hai),
        Mao => Some(Yin),
        Wu => Some(Si),
        You => Some(Shen),
        Chen => Some(Chou),
        Wei => Some(Chen),
        Xu => Some(Wei),
        Chou => Some(Xu),
        _ => None,
    }
}

/// Classify a moving line's transition from `original` to `transformed`.
pub fn classify(original: Branch, transformed: Branch) -> Option<AdvanceRetreat> {
    if advance_target(original) == Some(transformed) {
        Some(AdvanceRetreat::Advancing)
    } else if retreat_target(original) == Some(transformed) {
        Some(AdvanceRetreat::Retreating)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_BRANCHES;

    #[test]
    fn maps_have_eight_entries_each() {
        let advances = ALL_BRANCHES
            .iter()
            .filter(|b| advance_target(**b).is_some())
            .count();
        let retreats = ALL_BRANCHES
            .iter()
            .filter(|b| retreat_target(**b).is_some())
            .count();
        assert_eq!(advances, 8);
        assert_eq!(retreats, 8);
    }

    #[test]
    fn advance_and_retreat_are_inverse_on_cardinal_pairs() {
        // Hai→Zi advances and Zi→Hai retreats, and so on for the
        // same-element pairs.
        use Branch::*;
        for (from, to) in [(Hai, Zi), (Yin, Mao), (Si, Wu), (Shen, You)] {
            assert_eq!(classify(from, to), Some(AdvanceRetreat::Advancing));
            assert_eq!(classify(to, from), Some(AdvanceRetreat::Retreating));
        }
    }

    #[test]
    fn earth_branches_advance_in_sequence() {
        use Branch::*;
        assert_eq!(classify(Chou, Chen), Some(AdvanceRetreat::Advancing));
        assert_eq!(classify(Chen, Wei), Some(AdvanceRetreat::Advancing));
        assert_eq!(classify(Wei, Xu), Some(AdvanceRetreat::Advancing));
        assert_eq!(classify(Xu, Chou), Some(AdvanceRetreat::Advancing));
    }

    #[test]
    fn unrelated_transitions_are_neither() {
        use Branch::*;
        assert_eq!(classify(Zi, Wu), None);
        assert_eq!(classify(Hai, Mao), None);
        assert_eq!(classify(Chen, Xu), None);
    }

    #[test]
    fn same_branch_is_neither() {
        for b in ALL_BRANCHES {
            assert_eq!(classify(b, b), None);
        }
    }
}
