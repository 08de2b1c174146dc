//! Tuple contract test utilities
use super::{Tuple, TupleKind};
use crate::error::{ArityError, InvalidIndexError};
use crate::value::Value;

fn filler(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| Value::from(i64::try_from(i).unwrap()))
        .collect()
}

/// Check that construction succeeds at the arity bounds and fails just outside them.
pub fn check_arity_bounds(kind: TupleKind) {
    let min = kind.min_arity();
    let max = kind.max_arity();
    assert!(Tuple::new(kind, filler(min)).is_ok());
    assert!(Tuple::new(kind, filler(max)).is_ok());
    if min > 0 {
        assert_eq!(
            Tuple::new(kind, filler(min - 1)),
            Err(ArityError::TooFew {
                kind,
                min,
                actual: min - 1,
            })
        );
    }
    assert_eq!(
        Tuple::new(kind, filler(max + 1)),
        Err(ArityError::TooMany {
            kind,
            max,
            actual: max + 1,
        })
    );
}

/// Check in-range reads, absent reads past the length, and malformed indices.
pub fn check_index_contract(tuple: &Tuple) {
    for (i, element) in tuple.iter().enumerate() {
        let index = i64::try_from(i).unwrap();
        assert_eq!(tuple.get(index).unwrap(), Some(element));
        assert!(tuple.exists(index).unwrap());
    }
    let len = i64::try_from(tuple.len()).unwrap();
    assert_eq!(tuple.get(len).unwrap(), None);
    assert!(!tuple.exists(len).unwrap());
    assert_eq!(tuple.get(-1), Err(InvalidIndexError::Negative { index: -1 }));
    assert_eq!(
        tuple.get("x"),
        Err(InvalidIndexError::NotAnInteger { kind: "string" })
    );
}

/// Check that equality is reflexive, including through the dynamic seam.
pub fn check_reflexive_eq(tuple: &Tuple) {
    assert_eq!(tuple, &tuple.clone());
    assert_eq!(tuple.equals(&Value::from(tuple.clone())), Ok(true));
}
