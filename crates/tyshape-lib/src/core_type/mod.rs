//! Core types of type parameters.
//!
//! Layered leaf-first:
//! - `under`: strip named wrapping
//! - `match_types`: pairwise compatibility of two underlying types
//! - `core_type` / `core_string`: fold a type parameter's terms through
//!   the matcher

mod error;
mod fold;
mod matching;
mod trace;
mod under;

#[cfg(test)]
mod matching_tests;
#[cfg(test)]
mod under_tests;

pub use error::NoCoreType;
pub use fold::{
    FoldMode, TermSource, core_string, core_type, explain_core_string, explain_core_type,
    explain_with, fold_core,
};
pub use matching::{Operand, match_types};
pub use trace::{FoldTracer, NoopTracer, PrintTracer, TraceConfig, Verbosity};
pub use under::under;
