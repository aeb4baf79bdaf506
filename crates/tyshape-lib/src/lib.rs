//! tyshape: core types of type parameters in a Go-style type checker.
//!
//! The core type of a type parameter is the single underlying type shared by
//! every type in its constraint's type set. Operations such as indexing,
//! channel sends, and field selection are only statically valid on a type
//! parameter when it has one.
//!
//! # Example
//!
//! ```
//! use tyshape_lib::core_type::{core_string, core_type};
//! use tyshape_lib::universe::Universe;
//!
//! let universe = Universe::from_json(r#"{
//!     "params": [{ "name": "T", "terms": ["string", { "slice": "byte" }] }]
//! }"#)?;
//! let t = universe.lookup("T").expect("declared above");
//!
//! assert_eq!(core_type(universe.ctx(), t), None);
//! let core = core_string(universe.ctx(), t).expect("string and []byte agree");
//! assert_eq!(universe.printer().render(core), "string");
//! # Ok::<(), tyshape_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod core_type;
pub mod ops;
pub mod types;
pub mod universe;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod test_utils;

pub use core_type::{NoCoreType, core_string, core_type, match_types, under};
pub use ops::{ChanOp, OperationError};
pub use types::{TypeContext, TypeId, TypePrinter};
pub use universe::{Universe, UniverseError};

/// Any error this crate reports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    NoCoreType(#[from] NoCoreType),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Universe(#[from] UniverseError),
}

pub type Result<T> = std::result::Result<T, Error>;
