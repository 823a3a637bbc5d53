//! Xunkong: the two void branches of the day's ten-day sub-cycle.
//!
//! The sexagenary cycle pairs 10 stems with 12 branches, so each ten-day
//! sub-cycle ("xun") leaves two branches unpaired. Those two branches are
//! void for any day in that xun.

use crate::ganzhi::{Branch, Stem};

/// Void branch pair for a day given its stem and branch.
///
/// The xun starts where the branch index leads the stem index; the two
/// slots past the ten paired days are void.
pub const fn void_branches(day_stem: Stem, day_branch: Branch) -> [Branch; 2] {
    let start = (day_branch.index() + 12 - day_stem.index()) % 12;
    [
        Branch::from_index_cyclic(start + 10),
        Branch::from_index_cyclic(start + 11),
    ]
}
