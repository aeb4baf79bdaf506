#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the tyshape crates.
//!
//! - `Interner` / `Symbol`: cheap handles for type, parameter and field names
//! - `Colors`: ANSI palette used by type printing and fold traces

pub mod colors;
mod interner;

#[cfg(test)]
mod interner_tests;

pub use colors::Colors;
pub use interner::{Interner, Symbol};
