//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::context::TypeContext;
use super::shape::{NamedId, ParamId, TYPE_INVALID, TypeId, TypeShape};

impl TypeContext {
    /// Shape of a type produced by this context.
    pub fn shape(&self, id: TypeId) -> &TypeShape {
        self.get_type(id).unwrap_or_else(|| {
            panic!(
                "TypeContext: type id {} not found \
                 (ids must come from the context that interned them)",
                id.0
            )
        })
    }

    pub(crate) fn ensure_named(&self, id: TypeId) -> NamedId {
        match self.shape(id) {
            TypeShape::Named(named) => *named,
            other => panic!("TypeContext: expected a named type, got {other:?}"),
        }
    }

    pub(crate) fn ensure_param(&self, id: TypeId) -> ParamId {
        match self.shape(id) {
            TypeShape::Param(param) => *param,
            other => panic!("TypeContext: expected a type parameter, got {other:?}"),
        }
    }

    /// Underlying type of a fully set-up named type.
    ///
    /// Querying a declaration whose underlying type was never assigned is a
    /// caller bug: debug builds assert, release builds yield `Invalid`.
    pub(crate) fn ensure_underlying(&self, named: NamedId) -> TypeId {
        let underlying = self.named_underlying(named);
        debug_assert!(
            underlying.is_some(),
            "TypeContext: named type #{} queried before its underlying type was set",
            named.index()
        );

        let Some(underlying) = underlying else {
            return TYPE_INVALID;
        };
        debug_assert!(
            !self.shape(underlying).is_named(),
            "TypeContext: stored underlying type of named type #{} is itself named",
            named.index()
        );
        underlying
    }
}
