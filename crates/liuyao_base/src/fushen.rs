//! Fushen: recovery of kinship roles absent from the visible lines.
//!
//! When a role is missing from the six visible lines, it is recovered from
//! the palace's self-paired sequence: the lowest-position slot of that
//! sequence carrying the missing role supplies the hidden branch/element,
//! and the visible line at the same position becomes its "flying" host.
//! The self-paired sequence can carry a role at two positions (six slots
//! over five roles), so the lowest-position tie-break is load-bearing.

use crate::ganzhi::Branch;
use crate::liuqin::{self, ALL_KINSHIPS, Kinship};
use crate::najia;
use crate::trigram::Trigram;
use crate::wangshuai::{self, StrengthState};
use crate::wuxing::Element;

/// Relation of the flying (visible) line to its hidden counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenRelation {
    /// 比和 — equal elements.
    Same,
    /// 飛生伏 — flying generates hidden.
    FlyingGeneratesHidden,
    /// 飛克伏 — flying overcomes hidden.
    FlyingOvercomesHidden,
    /// 伏生飛 — hidden generates flying.
    HiddenGeneratesFlying,
    /// 伏克飛 — hidden overcomes flying.
    HiddenOvercomesFlying,
}

impl HiddenRelation {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "Same",
            Self::FlyingGeneratesHidden => "Flying generates hidden",
            Self::FlyingOvercomesHidden => "Flying overcomes hidden",
            Self::HiddenGeneratesFlying => "Hidden generates flying",
            Self::HiddenOvercomesFlying => "Hidden overcomes flying",
        }
    }

    /// Traditional hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Same => "比和",
            Self::FlyingGeneratesHidden => "飛生伏",
            Self::FlyingOvercomesHidden => "飛克伏",
            Self::HiddenGeneratesFlying => "伏生飛",
            Self::HiddenOvercomesFlying => "伏克飛",
        }
    }
}

/// Classify the flying/hidden element pair. Exactly one case fires for
/// every pair because the element cycles are total bijections.
pub fn relation(flying: Element, hidden: Element) -> HiddenRelation {
    if flying == hidden {
        HiddenRelation::Same
    } else if flying.generates() == hidden {
        HiddenRelation::FlyingGeneratesHidden
    } else if flying.overcomes() == hidden {
        HiddenRelation::FlyingOvercomesHidden
    } else if hidden.generates() == flying {
        HiddenRelation::HiddenGeneratesFlying
    } else {
        debug_assert_eq!(hidden.overcomes(), flying);
        HiddenRelation::HiddenOvercomesFlying
    }
}

/// One recovered hidden spirit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenSpiritRecord {
    /// The kinship role missing from the visible lines.
    pub kinship: Kinship,
    /// Recovered branch from the palace's self-paired sequence.
    pub branch: Branch,
    /// Element of the recovered branch.
    pub element: Element,
    /// Line position (1..6) the hidden spirit sits under.
    pub position: u8,
    /// Branch of the visible flying line at that position.
    pub flying_branch: Branch,
    /// Element of the flying line.
    pub flying_element: Element,
    /// Flying ↔ hidden relation.
    pub relation: HiddenRelation,
    /// Strength of the hidden element against the month branch.
    pub strength_by_month: StrengthState,
    /// Strength of the hidden element against the day branch.
    pub strength_by_day: StrengthState,
}

/// Resolve hidden spirits for every kinship role absent from the visible
/// lines. Returns 0..4 records, in canonical role order.
pub fn resolve(
    palace: Trigram,
    visible_kinships: &[Kinship; 6],
    visible_branches: &[Branch; 6],
    month_branch: Branch,
    day_branch: Branch,
) -> Vec<HiddenSpiritRecord> {
    let palace_element = palace.element();
    let sequence = najia::palace_sequence(palace);

    let mut records = Vec::new();
    for missing in ALL_KINSHIPS {
        if visible_kinships.contains(&missing) {
            continue;
        }
        // Lowest slot of the self-paired sequence carrying the role.
        let Some(slot) = sequence
            .iter()
            .position(|b| liuqin::classify(b.element(), palace_element) == missing)
        else {
            continue;
        };

        let branch = sequence[slot];
        let flying_branch = visible_branches[slot];
        records.push(HiddenSpiritRecord {
            kinship: missing,
            branch,
            element: branch.element(),
            position: slot as u8 + 1,
            flying_branch,
            flying_element: flying_branch.element(),
            relation: relation(flying_branch.element(), branch.element()),
            strength_by_month: wangshuai::classify(branch.element(), month_branch),
            strength_by_day: wangshuai::classify(branch.element(), day_branch),
        });
    }
    records
}
