//! Resolution of a raw universe into interned types.
//!
//! Every declaration is registered before any type expression is resolved,
//! so declarations may refer to each other in any order. Named types whose
//! underlying type is a bare name are set up referenced-first, because
//! `TypeContext::set_underlying` reads the referenced type's underlying type.

use tyshape_core::Symbol;

use crate::types::{ChanDir, Field, Term, TypeId, TypeSet, TypeShape};

use super::json::{
    RawChanDir, RawComposite, RawNamed, RawParam, RawTerm, RawType, RawUniverse, UniverseError,
};
use super::scope::Universe;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    InProgress,
    Done,
}

#[derive(Default)]
pub(super) struct Builder {
    universe: Universe,
}

impl Builder {
    pub(super) fn build(mut self, raw: RawUniverse) -> Result<Universe, UniverseError> {
        let named: Vec<TypeId> = raw
            .named
            .iter()
            .map(|decl| -> Result<TypeId, UniverseError> {
                let sym = self.declare_name(&decl.name)?;
                let ty = self.universe.ctx.declare_named(sym);
                self.universe.names.insert(sym, ty);
                Ok(ty)
            })
            .collect::<Result<_, _>>()?;

        let params: Vec<TypeId> = raw
            .params
            .iter()
            .map(|decl| -> Result<TypeId, UniverseError> {
                let sym = self.declare_name(&decl.name)?;
                let ty = self.universe.ctx.declare_param(sym, TypeSet::All);
                self.universe.names.insert(sym, ty);
                Ok(ty)
            })
            .collect::<Result<_, _>>()?;

        let mut states = vec![State::Pending; named.len()];
        for index in 0..named.len() {
            self.resolve_named(&raw.named, &named, &mut states, index)?;
        }

        for (decl, &ty) in raw.params.iter().zip(&params) {
            let constraint = self.resolve_constraint(decl)?;
            self.universe.ctx.set_constraint(ty, constraint);
        }

        Ok(self.universe)
    }

    fn declare_name(&mut self, name: &str) -> Result<Symbol, UniverseError> {
        let sym = self.universe.interner.intern(name);
        if self.universe.names.contains_key(&sym) {
            return Err(UniverseError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(sym)
    }

    /// Set up the named type at `root` and every named type its underlying
    /// type refers to by bare name.
    fn resolve_named(
        &mut self,
        decls: &[RawNamed],
        named: &[TypeId],
        states: &mut [State],
        root: usize,
    ) -> Result<(), UniverseError> {
        // Resolved declarations waiting for the name they refer to
        let mut waiting: Vec<(usize, TypeId)> = Vec::new();
        let mut next = Some(root);

        loop {
            if let Some(index) = next.take() {
                match states[index] {
                    State::Done => {}
                    State::InProgress => {
                        return Err(UniverseError::InvalidRecursiveType {
                            name: decls[index].name.clone(),
                        });
                    }
                    State::Pending => {
                        states[index] = State::InProgress;
                        let underlying = self.resolve_direct(&decls[index].underlying)?;
                        // Declared named types occupy the first slots, in order
                        next = match self.universe.ctx.shape(underlying) {
                            TypeShape::Named(other) => Some(other.index()),
                            _ => None,
                        };
                        waiting.push((index, underlying));
                        continue;
                    }
                }
            }

            let Some((index, underlying)) = waiting.pop() else {
                return Ok(());
            };
            self.universe.ctx.set_underlying(named[index], underlying);
            states[index] = State::Done;
        }
    }

    fn resolve_constraint(&mut self, decl: &RawParam) -> Result<TypeSet, UniverseError> {
        let Some(terms) = &decl.terms else {
            return Ok(TypeSet::All);
        };

        let mut resolved = Vec::with_capacity(terms.len());
        for term in terms {
            let (raw, tilde) = match term {
                RawTerm::Tilde(t) => (&t.tilde, true),
                RawTerm::Exact(raw) => (raw, false),
            };
            let ty = self.resolve_direct(raw)?;
            resolved.push(if tilde { Term::tilde(ty) } else { Term::exact(ty) });
        }
        Ok(TypeSet::Terms(resolved))
    }

    /// Resolve a type that must not be a bare type parameter.
    fn resolve_direct(&mut self, raw: &RawType) -> Result<TypeId, UniverseError> {
        let ty = self.resolve(raw)?;
        if let RawType::Name(name) = raw
            && self.universe.ctx.shape(ty).is_param()
        {
            return Err(UniverseError::MisplacedParam { name: name.clone() });
        }
        Ok(ty)
    }

    fn resolve(&mut self, raw: &RawType) -> Result<TypeId, UniverseError> {
        let composite = match raw {
            RawType::Name(name) => return self.resolve_name(name),
            RawType::Composite(composite) => composite,
        };

        let ctx_ty = match composite {
            RawComposite::Slice(elem) => {
                let elem = self.resolve(elem)?;
                self.universe.ctx.intern_slice(elem)
            }
            RawComposite::Array { len, elem } => {
                let elem = self.resolve(elem)?;
                self.universe.ctx.intern_array(*len, elem)
            }
            RawComposite::Pointer(elem) => {
                let elem = self.resolve(elem)?;
                self.universe.ctx.intern_pointer(elem)
            }
            RawComposite::Map { key, value } => {
                let key = self.resolve(key)?;
                let value = self.resolve(value)?;
                self.universe.ctx.intern_map(key, value)
            }
            RawComposite::Chan { elem, dir } => {
                let elem = self.resolve(elem)?;
                let dir = match dir {
                    RawChanDir::Both => ChanDir::SendRecv,
                    RawChanDir::Send => ChanDir::SendOnly,
                    RawChanDir::Recv => ChanDir::RecvOnly,
                };
                self.universe.ctx.intern_chan(elem, dir)
            }
            RawComposite::Struct(raw_fields) => {
                let mut fields = Vec::with_capacity(raw_fields.len());
                for field in raw_fields {
                    let ty = self.resolve(&field.ty)?;
                    let name = self.universe.interner.intern(&field.name);
                    fields.push(Field::new(name, ty));
                }
                self.universe.ctx.intern_struct(fields)
            }
            RawComposite::Func {
                params,
                results,
                variadic,
            } => {
                let mut param_tys = self.resolve_all(params)?;
                let result_tys = self.resolve_all(results)?;
                // A variadic parameter has slice type inside the function
                let variadic = *variadic && !param_tys.is_empty();
                if variadic && let Some(last) = param_tys.last_mut() {
                    *last = self.universe.ctx.intern_slice(*last);
                }
                self.universe.ctx.intern_func(param_tys, result_tys, variadic)
            }
        };
        Ok(ctx_ty)
    }

    fn resolve_all(&mut self, raws: &[RawType]) -> Result<Vec<TypeId>, UniverseError> {
        raws.iter().map(|raw| self.resolve(raw)).collect()
    }

    fn resolve_name(&self, name: &str) -> Result<TypeId, UniverseError> {
        self.universe
            .lookup(name)
            .ok_or_else(|| UniverseError::UnknownType {
                name: name.to_string(),
            })
    }
}
