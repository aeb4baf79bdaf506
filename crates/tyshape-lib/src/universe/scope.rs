use indexmap::IndexMap;
use tyshape_core::{Interner, Symbol};

use crate::types::{BasicKind, TypeContext, TypeId, TypePrinter};

/// A self-contained set of declarations over its own context.
///
/// Declared names shadow predeclared ones, as in Go's package scope.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub(super) ctx: TypeContext,
    pub(super) interner: Interner,
    /// Named types first, then parameters, each in declaration order.
    pub(super) names: IndexMap<Symbol, TypeId>,
}

impl Universe {
    pub fn ctx(&self) -> &TypeContext {
        &self.ctx
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Resolve a declared or predeclared type name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.declared(name)
            .or_else(|| BasicKind::from_name(name).map(BasicKind::type_id))
    }

    fn declared(&self, name: &str) -> Option<TypeId> {
        let sym = self.interner.get(name)?;
        self.names.get(&sym).copied()
    }

    /// Declared names with their types, in declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.names
            .iter()
            .map(|(&sym, &ty)| (self.interner.resolve(sym), ty))
    }

    pub fn printer(&self) -> TypePrinter<'_> {
        TypePrinter::new(&self.ctx, &self.interner)
    }
}
