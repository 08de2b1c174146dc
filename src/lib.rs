//! Immutable fixed-arity tuple values.
//!
//! A [`Tuple`] holds a fixed number of dynamically typed [`Value`]s, chosen
//! at construction by its [`TupleKind`] and frozen thereafter. Elements are
//! read back by non-negative integer index and compared with a type-strict
//! structural equality that never coerces across value kinds.
//!
//! ```
//! use ntuple::{Tuple, Value};
//!
//! let pair = Tuple::pair("A", "B");
//! assert_eq!(pair.get(0).unwrap(), Some(&Value::from("A")));
//! assert!(pair.exists(0).unwrap());
//! assert!(!pair.exists(5).unwrap());
//! assert_eq!(pair, Tuple::pair("A", "B"));
//! ```
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
mod error;
pub mod tuples;
pub mod value;

pub use error::{ArityError, InvalidIndexError, TupleError, TypeMismatchError};
pub use tuples::{Tuple, TupleKind};
pub use value::Value;
