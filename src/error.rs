//! Error types
use crate::tuples::TupleKind;
use thiserror::Error;

/// Element count outside a tuple kind's arity bounds.
///
/// Raised only during construction; a failed construction never yields a
/// partially built tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("{kind} expects a minimum of {min} values but only got {actual}")]
    TooFew {
        kind: TupleKind,
        min: usize,
        actual: usize,
    },
    #[error("{kind} expects a maximum of {max} values but instead got {actual}")]
    TooMany {
        kind: TupleKind,
        max: usize,
        actual: usize,
    },
}

/// Malformed tuple index.
///
/// A well-formed index beyond the stored length is not an error; lookups
/// report it as an absent element instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidIndexError {
    #[error("index must be an integer, \"{kind}\" passed")]
    NotAnInteger { kind: &'static str },
    #[error("index must be non-negative, {index} passed")]
    Negative { index: i64 },
}

/// Equality comparison against a value that is not a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compare {expected} with {actual} as they are not of the same type")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// Any error from the tuple crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error(transparent)]
    InvalidIndex(#[from] InvalidIndexError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}
