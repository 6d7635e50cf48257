//! Grid geometry.
//!
//! This module holds the pure spatial predicates every action validator
//! relies on.

pub mod spatial;

pub use spatial::*;
