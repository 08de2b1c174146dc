//! Tuple variant identities.
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;
use std::fmt;

/// Identity of a tuple variant, fixing its arity bounds and name tag.
///
/// Each variant carries its bounds as associated constant data; introducing
/// a new arity (Triple, Quad, ...) means adding a variant here and its three
/// match arms, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TupleKind {
    /// Exactly one element.
    Single,
    /// Exactly two elements.
    Pair,
}

impl TupleKind {
    /// Minimum number of elements a tuple of this kind may hold.
    #[inline]
    pub const fn min_arity(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
        }
    }

    /// Maximum number of elements a tuple of this kind may hold.
    #[inline]
    pub const fn max_arity(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
        }
    }

    /// Name tag of this variant, used in error messages and display output.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Pair => "PAIR",
        }
    }
}

const_assert!(TupleKind::Single.min_arity() <= TupleKind::Single.max_arity());
const_assert!(TupleKind::Pair.min_arity() <= TupleKind::Pair.max_arity());

impl fmt::Display for TupleKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
