//! The casting orchestrator: raw input in, one fully resolved record out.
//!
//! `calculate` composes the table-driven resolvers in dependency order:
//! hexagram resolution, movement/transformation, najia assignment,
//! kinship, guardians, strength, advance/retreat, hidden spirits, and the
//! void pair. It is a pure function: identical inputs always produce
//! structurally equal results, and nothing is mutated after assembly.

use crate::error::LiuyaoError;
use crate::fushen::{self, HiddenSpiritRecord};
use crate::ganzhi::{Branch, Stem};
use crate::hexagram::Hexagram;
use crate::jintuishen::{self, AdvanceRetreat};
use crate::line::{self, LineValue, Polarity};
use crate::liuqin::{self, Kinship};
use crate::liushen::{self, Guardian};
use crate::najia;
use crate::wangshuai::{self, StrengthState};
use crate::wuxing::Element;
use crate::xunkong;

/// Validated input for one casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastingInput {
    /// Six line values, bottom (position 1) to top (position 6).
    pub lines: [LineValue; 6],
    /// Day stem (guardians, void pair).
    pub day_stem: Stem,
    /// Day branch (void pair, strength).
    pub day_branch: Branch,
    /// Month branch (strength).
    pub month_branch: Branch,
}

impl CastingInput {
    /// Build an input from raw line values, validating each against
    /// {6, 7, 8, 9}. Stems and branches are already closed enums and need
    /// no further checking.
    pub fn from_values(
        values: [u8; 6],
        day_stem: Stem,
        day_branch: Branch,
        month_branch: Branch,
    ) -> Result<CastingInput, LiuyaoError> {
        let mut lines = [LineValue::OldYin; 6];
        for (slot, value) in lines.iter_mut().zip(values) {
            *slot = LineValue::from_value(value)?;
        }
        Ok(CastingInput {
            lines,
            day_stem,
            day_branch,
            month_branch,
        })
    }
}

/// One fully resolved line of the casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord {
    /// Position 1 (bottom) .. 6 (top).
    pub position: u8,
    /// The raw cast value.
    pub value: LineValue,
    /// Polarity in the primary hexagram.
    pub polarity: Polarity,
    /// Old lines move.
    pub is_moving: bool,
    /// Polarity in the transformed hexagram; present only for moving lines.
    pub transformed_polarity: Option<Polarity>,
    /// Assigned branch in the primary hexagram.
    pub branch: Branch,
    /// Element of the assigned branch.
    pub element: Element,
    /// Assigned branch in the transformed hexagram; moving lines only.
    pub transformed_branch: Option<Branch>,
    /// Kinship role against the palace element.
    pub kinship: Kinship,
    /// Guardian for the casting day.
    pub guardian: Guardian,
    /// This line is the self ("shi") line.
    pub is_shi: bool,
    /// This line is the counterpart ("ying") line.
    pub is_ying: bool,
    /// Advance/retreat spirit; moving lines only, and often neither.
    pub advance_retreat: Option<AdvanceRetreat>,
    /// Strength against the month branch.
    pub strength_by_month: StrengthState,
    /// Strength against the day branch.
    pub strength_by_day: StrengthState,
}

/// Complete structured analysis of one casting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastingResult {
    /// The primary hexagram.
    pub primary: &'static Hexagram,
    /// The transformed hexagram; present only if at least one line moves.
    pub transformed: Option<&'static Hexagram>,
    /// The six resolved lines, bottom to top.
    pub lines: [LineRecord; 6],
    /// Moving-line positions, ascending.
    pub moving_positions: Vec<u8>,
    /// Hidden spirits for the kinship roles absent from the visible lines.
    pub hidden_spirits: Vec<HiddenSpiritRecord>,
    /// The day's void branch pair.
    pub void_branches: [Branch; 2],
}

/// Derive the full structured analysis of a casting.
pub fn calculate(input: &CastingInput) -> CastingResult {
    let polarities = line::polarities(&input.lines);
    let (upper, lower) = line::trigram_pair(&polarities);
    let primary = Hexagram::from_trigrams(upper, lower);
    let palace_element = primary.palace_element();

    let moving_positions = line::moving_positions(&input.lines);
    let transformed = if moving_positions.is_empty() {
        None
    } else {
        let transformed_polarities = line::transformed_polarities(&input.lines);
        let (t_upper, t_lower) = line::trigram_pair(&transformed_polarities);
        Some(Hexagram::from_trigrams(t_upper, t_lower))
    };

    let branches = najia::assign_all(primary.upper, primary.lower);
    let transformed_branches = transformed.map(|t| najia::assign_all(t.upper, t.lower));
    let guardians = liushen::sequence_for_day(input.day_stem);

    let lines: [LineRecord; 6] = core::array::from_fn(|i| {
        let position = i as u8 + 1;
        let value = input.lines[i];
        let is_moving = value.is_moving();
        let branch = branches[i];
        let transformed_branch = match (is_moving, transformed_branches) {
            (true, Some(tb)) => Some(tb[i]),
            _ => None,
        };
        LineRecord {
            position,
            value,
            polarity: value.polarity(),
            is_moving,
            transformed_polarity: is_moving.then(|| value.transformed_polarity()),
            branch,
            element: branch.element(),
            transformed_branch,
            kinship: liuqin::classify(branch.element(), palace_element),
            guardian: guardians[i],
            is_shi: position == primary.shi_position,
            is_ying: position == primary.ying_position,
            advance_retreat: transformed_branch.and_then(|t| jintuishen::classify(branch, t)),
            strength_by_month: wangshuai::classify(branch.element(), input.month_branch),
            strength_by_day: wangshuai::classify(branch.element(), input.day_branch),
        }
    });

    let visible_kinships: [Kinship; 6] = core::array::from_fn(|i| lines[i].kinship);
    let hidden_spirits = fushen::resolve(
        primary.palace,
        &visible_kinships,
        &branches,
        input.month_branch,
        input.day_branch,
    );

    CastingResult {
        primary,
        transformed,
        lines,
        moving_positions,
        hidden_spirits,
        void_branches: xunkong::void_branches(input.day_stem, input.day_branch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CastingInput {
        CastingInput::from_values([9, 8, 8, 6, 7, 7], Stem::Jia, Branch::Zi, Branch::Wu).unwrap()
    }

    #[test]
    fn from_values_rejects_bad_line() {
        let err = CastingInput::from_values([9, 8, 5, 6, 7, 7], Stem::Jia, Branch::Zi, Branch::Wu);
        assert_eq!(err, Err(LiuyaoError::InvalidLineValue(5)));
    }

    #[test]
    fn determinism() {
        let input = sample_input();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn static_casting_has_no_transformation() {
        let input =
            CastingInput::from_values([7, 8, 7, 8, 7, 8], Stem::Bing, Branch::Yin, Branch::Hai)
                .unwrap();
        let result = calculate(&input);
        assert!(result.transformed.is_none());
        assert!(result.moving_positions.is_empty());
        for line in &result.lines {
            assert!(!line.is_moving);
            assert_eq!(line.transformed_polarity, None);
            assert_eq!(line.transformed_branch, None);
            assert_eq!(line.advance_retreat, None);
        }
    }

    #[test]
    fn moving_count_matches_old_values() {
        let input = sample_input();
        let result = calculate(&input);
        assert_eq!(result.moving_positions, vec![1, 4]);
        for line in &result.lines {
            let expected = matches!(line.value.value(), 6 | 9);
            assert_eq!(line.is_moving, expected);
            assert_eq!(line.transformed_polarity.is_some(), expected);
            if let Some(tp) = line.transformed_polarity {
                assert_eq!(tp, line.polarity.flipped());
            }
        }
    }

    #[test]
    fn hidden_spirit_count_complements_visible_roles() {
        let input = sample_input();
        let result = calculate(&input);
        let mut roles: Vec<Kinship> = result.lines.iter().map(|l| l.kinship).collect();
        roles.sort_by_key(|k| k.index());
        roles.dedup();
        assert_eq!(result.hidden_spirits.len(), 5 - roles.len());
    }

    #[test]
    fn exactly_one_shi_and_one_ying() {
        let input = sample_input();
        let result = calculate(&input);
        assert_eq!(result.lines.iter().filter(|l| l.is_shi).count(), 1);
        assert_eq!(result.lines.iter().filter(|l| l.is_ying).count(), 1);
    }

    #[test]
    fn all_yang_resolves_to_pure_qian() {
        let input =
            CastingInput::from_values([7, 7, 7, 7, 7, 7], Stem::Geng, Branch::Shen, Branch::Mao)
                .unwrap();
        let result = calculate(&input);
        assert_eq!(result.primary.name, "乾為天");
        assert!(result.transformed.is_none());
    }

    #[test]
    fn all_moving_yang_transforms_to_pure_kun() {
        let input =
            CastingInput::from_values([9, 9, 9, 9, 9, 9], Stem::Geng, Branch::Shen, Branch::Mao)
                .unwrap();
        let result = calculate(&input);
        assert_eq!(result.primary.name, "乾為天");
        assert_eq!(result.transformed.unwrap().name, "坤為地");
        assert_eq!(result.moving_positions, vec![1, 2, 3, 4, 5, 6]);
    }
}
