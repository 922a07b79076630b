#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A sentinel-headed singly linked list of small integers, filled from a
//! pseudo-random source and rendered as a single line of text.

pub mod list;
pub mod source;

pub use list::{Iter, List, TERMINATOR};
pub use source::{RandomDigits, ValueSource, VALUE_RANGE};
