//! Type model: interned shapes, declarations, and printing.

mod context;
mod invariants;
mod printer;
mod shape;

#[cfg(test)]
mod printer_tests;

pub use context::TypeContext;
pub use printer::{DisplayType, TypePrinter};
pub use shape::{
    BasicKind, ChanDir, Field, NamedId, ParamId, TYPE_BOOL, TYPE_BYTE, TYPE_FLOAT64, TYPE_INT,
    TYPE_INT32, TYPE_INVALID, TYPE_RUNE, TYPE_STRING, TYPE_UINT8, TYPE_UNTYPED_STRING, Term,
    TypeId, TypeSet, TypeShape,
};
