//! Self-contained universes of declarations loaded from JSON.
//!
//! A universe owns its `TypeContext` and `Interner`, which makes it the
//! quickest way to describe type parameters for core-type queries.

mod builder;
mod json;
mod scope;


pub use json::UniverseError;
pub use scope::Universe;
