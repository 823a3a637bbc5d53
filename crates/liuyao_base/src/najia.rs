//! Najia: the fixed branch assignment per trigram and placement.
//!
//! Each trigram owns two ordered branch triples, one used when the trigram
//! sits as the lower ("inner") figure and one when it sits as the upper
//! ("outer") figure. The 8 × 2 × 3 entries below are the traditional
//! correspondence reproduced verbatim; a line's element follows from its
//! assigned branch.

use crate::ganzhi::Branch;
use crate::trigram::Trigram;

/// Inner triple (lines 1..3, bottom up) for a trigram as the lower figure.
pub const fn inner_triple(trigram: Trigram) -> [Branch; 3] {
    use Branch::*;
    match trigram {
        Trigram::Qian => [Zi, Yin, Chen],
        Trigram::Kun => [Wei, Si, Mao],
        Trigram::Zhen => [Zi, Yin, Chen],
        Trigram::Xun => [Chou, Hai, You],
        Trigram::Kan => [Yin, Chen, Wu],
        Trigram::Li => [Mao, Chou, Hai],
        Trigram::Gen => [Chen, Wu, Shen],
        Trigram::Dui => [Si, Mao, Chou],
    }
}

/// Outer triple (lines 4..6, bottom up) for a trigram as the upper figure.
pub const fn outer_triple(trigram: Trigram) -> [Branch; 3] {
    use Branch::*;
    match trigram {
        Trigram::Qian => [Wu, Shen, Xu],
        Trigram::Kun => [Chou, Hai, You],
        Trigram::Zhen => [Wu, Shen, Xu],
        Trigram::Xun => [Wei, Si, Mao],
        Trigram::Kan => [Shen, Xu, Zi],
        Trigram::Li => [You, Wei, Si],
        Trigram::Gen => [Xu, Zi, Yin],
        Trigram::Dui => [Hai, You, Wei],
    }
}

/// Branch assigned to line `position` (1..6) of an (upper, lower) pair.
///
/// Lines 1..3 draw from the lower trigram's inner triple, lines 4..6 from
/// the upper trigram's outer triple.
pub const fn branch_for_line(position: u8, upper: Trigram, lower: Trigram) -> Branch {
    debug_assert!(position >= 1 && position <= 6);
    if position <= 3 {
        inner_triple(lower)[(position - 1) as usize]
    } else {
        outer_triple(upper)[(position - 4) as usize]
    }
}

/// Branches for all six lines of an (upper, lower) pair, bottom to top.
pub const fn assign_all(upper: Trigram, lower: Trigram) -> [Branch; 6] {
    let inner = inner_triple(lower);
    let outer = outer_triple(upper);
    [inner[0], inner[1], inner[2], outer[0], outer[1], outer[2]]
}

/// The palace's self-paired sequence: the palace trigram taken as both
/// lower and upper figure. Hidden-spirit recovery reads from this.
pub const fn palace_sequence(palace: Trigram) -> [Branch; 6] {
    assign_all(palace, palace)
}
