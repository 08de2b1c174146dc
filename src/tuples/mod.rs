//! Immutable fixed-arity tuple containers.
mod kind;
#[cfg(test)]
pub mod testing;

pub use kind::TupleKind;

use crate::error::{ArityError, InvalidIndexError, TypeMismatchError};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::slice;

/// An immutable, ordered, fixed-arity container of [`Value`]s.
///
/// The element count is validated against the [`TupleKind`] arity bounds
/// when the tuple is built and can never change afterwards; no mutating
/// access is exposed. Elements are read back by non-negative integer index
/// ([`get`](Self::get), [`exists`](Self::exists)) and compared with the
/// type-strict structural equality of [`Value`].
///
/// Equality requires matching kind tags: a `SINGLE` never equals a `PAIR`.
/// [`elements_eq`](Self::elements_eq) compares contents alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTuple", into = "RawTuple")]
pub struct Tuple {
    kind: TupleKind,
    elements: SmallVec<[Value; 2]>,
}

impl Tuple {
    /// Build a tuple of the given kind from an ordered sequence of values.
    ///
    /// Fails with an [`ArityError`] if the number of values falls outside
    /// the kind's arity bounds; no tuple exists in that case.
    pub fn new<I>(kind: TupleKind, elements: I) -> Result<Self, ArityError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let elements: SmallVec<[Value; 2]> = elements.into_iter().map(Into::into).collect();
        let actual = elements.len();
        if actual < kind.min_arity() {
            return Err(ArityError::TooFew {
                kind,
                min: kind.min_arity(),
                actual,
            });
        }
        if actual > kind.max_arity() {
            return Err(ArityError::TooMany {
                kind,
                max: kind.max_arity(),
                actual,
            });
        }
        Ok(Self { kind, elements })
    }

    /// A 1-tuple holding the given value.
    pub fn single<T: Into<Value>>(value: T) -> Self {
        Self {
            kind: TupleKind::Single,
            elements: smallvec![value.into()],
        }
    }

    /// A 2-tuple holding the given values in order.
    pub fn pair<A, B>(first: A, second: B) -> Self
    where
        A: Into<Value>,
        B: Into<Value>,
    {
        Self {
            kind: TupleKind::Pair,
            elements: smallvec![first.into(), second.into()],
        }
    }

    /// The variant identity of this tuple.
    #[inline]
    pub const fn kind(&self) -> TupleKind {
        self.kind
    }

    /// The number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The stored elements in order.
    #[inline]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Read the element at a dynamically typed index.
    ///
    /// A well-formed index past the stored length is not an error; the
    /// element is reported absent instead. Only a malformed index (negative
    /// or not an integer at all) fails.
    pub fn get<K: Into<Value>>(&self, index: K) -> Result<Option<&Value>, InvalidIndexError> {
        let position = checked_index(&index.into())?;
        Ok(self.elements.get(position))
    }

    /// Whether a value is present at a dynamically typed index.
    ///
    /// Same index validation as [`get`](Self::get), without materializing
    /// the element. A stored [`Value::Unit`] counts as present.
    pub fn exists<K: Into<Value>>(&self, index: K) -> Result<bool, InvalidIndexError> {
        let position = checked_index(&index.into())?;
        Ok(position < self.elements.len())
    }

    /// Compare this tuple with a dynamically typed value.
    ///
    /// Fails with a [`TypeMismatchError`] if `other` is not itself a tuple.
    /// Tuples of different kinds compare unequal rather than failing.
    pub fn equals(&self, other: &Value) -> Result<bool, TypeMismatchError> {
        match other {
            Value::Tuple(other) => Ok(self == other.as_ref()),
            other => Err(TypeMismatchError {
                expected: self.kind.name(),
                actual: other.type_name(),
            }),
        }
    }

    /// Elementwise comparison that ignores the kind tag.
    pub fn elements_eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

/// Validate a dynamically typed index into a storable position.
fn checked_index(index: &Value) -> Result<usize, InvalidIndexError> {
    match index {
        Value::Int(i) if *i < 0 => Err(InvalidIndexError::Negative { index: *i }),
        // Positions past any storable length read as absent.
        Value::Int(i) => Ok(usize::try_from(*i).unwrap_or(usize::MAX)),
        other => Err(InvalidIndexError::NotAnInteger {
            kind: other.type_name(),
        }),
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str(")")
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = smallvec::IntoIter<[Value; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Serde mirror of [`Tuple`]; deserialization re-validates the arity bounds.
#[derive(Serialize, Deserialize)]
struct RawTuple {
    kind: TupleKind,
    elements: Vec<Value>,
}

impl From<Tuple> for RawTuple {
    fn from(tuple: Tuple) -> Self {
        Self {
            kind: tuple.kind,
            elements: tuple.elements.into_vec(),
        }
    }
}

impl TryFrom<RawTuple> for Tuple {
    type Error = ArityError;

    fn try_from(raw: RawTuple) -> Result<Self, Self::Error> {
        Self::new(raw.kind, raw.elements)
    }
}


#[cfg(test)]
mod index {
    use super::*;
    use rstest::rstest;

    #[test]
    fn get_in_range() {
        let pair = Tuple::pair(1, 2);
        assert_eq!(pair.get(0).unwrap(), Some(&Value::from(1)));
        assert_eq!(pair.get(1).unwrap(), Some(&Value::from(2)));
    }

    #[test]
    fn get_past_length_is_absent() {
        let pair = Tuple::pair(1, 2);
        assert_eq!(pair.get(2).unwrap(), None);
        assert_eq!(pair.get(i64::MAX).unwrap(), None);
    }

    #[test]
    fn exists() {
        let pair = Tuple::pair("A", "B");
        assert!(pair.exists(0).unwrap());
        assert!(pair.exists(1).unwrap());
        assert!(!pair.exists(5).unwrap());
    }

    #[test]
    fn stored_unit_is_present() {
        let pair = Tuple::pair("foo", ());
        assert_eq!(pair.get(1).unwrap(), Some(&Value::Unit));
        assert!(pair.exists(1).unwrap());
    }

    #[test]
    fn negative_index() {
        let pair = Tuple::pair(1, 2);
        assert_eq!(
            pair.get(-1),
            Err(InvalidIndexError::Negative { index: -1 })
        );
        assert_eq!(
            pair.exists(-1),
            Err(InvalidIndexError::Negative { index: -1 })
        );
    }

    #[rstest]
    #[case(Value::from("x"), "string")]
    #[case(Value::from(f64::NAN), "float")]
    #[case(Value::from(0.0), "float")]
    #[case(Value::from(true), "bool")]
    #[case(Value::Unit, "unit")]
    fn malformed_index(#[case] index: Value, #[case] kind: &'static str) {
        let pair = Tuple::pair(1, 2);
        assert_eq!(
            pair.get(index.clone()),
            Err(InvalidIndexError::NotAnInteger { kind })
        );
        assert_eq!(
            pair.exists(index),
            Err(InvalidIndexError::NotAnInteger { kind })
        );
    }

    #[test]
    fn invalid_index_message() {
        let error = Tuple::pair(1, 2).get("x").unwrap_err();
        assert_eq!(error.to_string(), "index must be an integer, \"string\" passed");
    }

    #[rstest]
    #[case(Tuple::single("foo"))]
    #[case(Tuple::pair("foo", "bar"))]
    #[case(Tuple::pair(10, ()))]
    fn contract(#[case] tuple: Tuple) {
        testing::check_index_contract(&tuple);
    }
}
