use tyshape_core::Interner;

use crate::types::{ChanDir, Term, TypeContext, TypeId, TypePrinter, TypeSet};

/// A context plus interner with shorthand constructors for tests.
pub struct Fixture {
    pub ctx: TypeContext,
    pub interner: Interner,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            ctx: TypeContext::new(),
            interner: Interner::new(),
        }
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.ctx.intern_slice(elem)
    }

    pub fn chan(&mut self, elem: TypeId) -> TypeId {
        self.ctx.intern_chan(elem, ChanDir::SendRecv)
    }

    pub fn send(&mut self, elem: TypeId) -> TypeId {
        self.ctx.intern_chan(elem, ChanDir::SendOnly)
    }

    pub fn recv(&mut self, elem: TypeId) -> TypeId {
        self.ctx.intern_chan(elem, ChanDir::RecvOnly)
    }

    /// Declare a fully set-up named type.
    pub fn named(&mut self, name: &str, underlying: TypeId) -> TypeId {
        let sym = self.interner.intern(name);
        let ty = self.ctx.declare_named(sym);
        self.ctx.set_underlying(ty, underlying);
        ty
    }

    /// Declare a type parameter constrained to exactly `terms`.
    pub fn param(&mut self, name: &str, terms: &[TypeId]) -> TypeId {
        let set = TypeSet::of(terms.iter().copied().map(Term::exact));
        self.param_with(name, set)
    }

    pub fn param_with(&mut self, name: &str, set: TypeSet) -> TypeId {
        let sym = self.interner.intern(name);
        self.ctx.declare_param(sym, set)
    }

    pub fn show(&self, id: TypeId) -> String {
        TypePrinter::new(&self.ctx, &self.interner).render(id)
    }
}
