//! Six-line (liuyao) casting derivation engine.
//!
//! This crate turns six raw line readings plus a day/month stem-branch
//! context into a complete structured casting: primary and transformed
//! hexagrams, per-line branch/element/kinship/guardian/strength, hidden
//! spirits for absent roles, and the day's void branch pair.
//!
//! The whole derivation is a pure, total function over closed enumerated
//! domains: every table is compile-time constant data reproduced from the
//! traditional correspondence, and once input passes validation no lookup
//! can miss. The engine does no I/O, holds no state, and may be called
//! concurrently without synchronization.

pub mod engine;
pub mod error;
pub mod fushen;
pub mod ganzhi;
pub mod hexagram;
pub mod jintuishen;
pub mod line;
pub mod liuqin;
pub mod liushen;
pub mod najia;
pub mod trigram;
pub mod wangshuai;
pub mod wuxing;
pub mod xunkong;

pub use engine::{CastingInput, CastingResult, LineRecord, calculate};
pub use error::LiuyaoError;
pub use fushen::{HiddenRelation, HiddenSpiritRecord};
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem};
pub use hexagram::{HEXAGRAMS, Hexagram};
pub use jintuishen::AdvanceRetreat;
pub use line::{LineValue, Polarity};
pub use liuqin::{ALL_KINSHIPS, Kinship};
pub use liushen::{ALL_GUARDIANS, Guardian};
pub use trigram::{TRIGRAMS_BY_CODE, Trigram};
pub use wangshuai::StrengthState;
pub use wuxing::{ALL_ELEMENTS, Element};
pub use xunkong::void_branches;
