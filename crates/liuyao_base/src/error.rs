//! Error types for casting derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from boundary validation of casting input.
///
/// Everything past validation is total over the enumerated domains, so
/// this type only covers malformed raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LiuyaoError {
    /// A raw line value outside {6, 7, 8, 9}.
    InvalidLineValue(u8),
    /// Malformed casting input.
    InvalidInput(&'static str),
}

impl Display for LiuyaoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLineValue(v) => {
                write!(f, "invalid line value {v}: must be 6, 7, 8, or 9")
            }
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for LiuyaoError {}
