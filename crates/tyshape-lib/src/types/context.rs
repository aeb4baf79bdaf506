//! TypeContext: interned types plus named-type and type-parameter declarations.
//!
//! Structural types are hash-consed, so two structural types are identical
//! iff their ids are equal. Named types and type parameters are declared
//! rather than interned by content, which keeps them nominal.
//!
//! The context is built by the surrounding checking pass and is only read
//! by core-type queries.

use std::collections::HashMap;

use tyshape_core::Symbol;

use super::shape::{
    BasicKind, ChanDir, Field, NamedId, ParamId, TYPE_INVALID, TYPE_UINT8, TypeId, TypeSet,
    TypeShape,
};

#[derive(Clone, Debug)]
pub(crate) struct NamedDef {
    pub(crate) name: Symbol,
    /// Never itself a named type once set.
    pub(crate) underlying: Option<TypeId>,
}

#[derive(Clone, Debug)]
pub(crate) struct ParamDef {
    pub(crate) name: Symbol,
    pub(crate) constraint: TypeSet,
}

/// Central registry for types and declarations.
#[derive(Clone, Debug)]
pub struct TypeContext {
    types: Vec<TypeShape>,
    type_map: HashMap<TypeShape, TypeId>,

    pub(crate) named: Vec<NamedDef>,
    pub(crate) params: Vec<ParamDef>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    pub fn new() -> Self {
        let mut ctx = Self {
            types: Vec::new(),
            type_map: HashMap::new(),
            named: Vec::new(),
            params: Vec::new(),
        };

        // Builtins occupy their reserved ids
        let invalid = ctx.intern_type(TypeShape::Invalid);
        debug_assert_eq!(invalid, TYPE_INVALID);

        for kind in BasicKind::ALL {
            let id = ctx.intern_type(TypeShape::Basic(kind));
            debug_assert_eq!(id, kind.type_id());
        }

        ctx
    }

    /// Intern a type, returning its ID. Deduplicates identical shapes.
    pub fn intern_type(&mut self, shape: TypeShape) -> TypeId {
        if let Some(&id) = self.type_map.get(&shape) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(shape.clone());
        self.type_map.insert(shape, id);
        id
    }

    pub fn get_type(&self, id: TypeId) -> Option<&TypeShape> {
        self.types.get(id.index())
    }

    pub fn intern_slice(&mut self, elem: TypeId) -> TypeId {
        self.intern_type(TypeShape::Slice(elem))
    }

    pub fn intern_chan(&mut self, elem: TypeId, dir: ChanDir) -> TypeId {
        self.intern_type(TypeShape::Chan { elem, dir })
    }

    pub fn intern_array(&mut self, len: u64, elem: TypeId) -> TypeId {
        self.intern_type(TypeShape::Array { len, elem })
    }

    pub fn intern_pointer(&mut self, elem: TypeId) -> TypeId {
        self.intern_type(TypeShape::Pointer(elem))
    }

    pub fn intern_map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern_type(TypeShape::Map { key, value })
    }

    pub fn intern_struct(&mut self, fields: impl IntoIterator<Item = Field>) -> TypeId {
        self.intern_type(TypeShape::Struct(fields.into_iter().collect()))
    }

    pub fn intern_func(
        &mut self,
        params: Vec<TypeId>,
        results: Vec<TypeId>,
        variadic: bool,
    ) -> TypeId {
        self.intern_type(TypeShape::Func {
            params,
            results,
            variadic,
        })
    }

    /// Declare a named type whose underlying type is assigned later.
    ///
    /// Each call produces a distinct type, even for a repeated name.
    pub fn declare_named(&mut self, name: Symbol) -> TypeId {
        let named = NamedId::from_raw(self.named.len() as u32);
        self.named.push(NamedDef {
            name,
            underlying: None,
        });
        self.intern_type(TypeShape::Named(named))
    }

    /// Assign the underlying type of a declared named type.
    ///
    /// A named `underlying` is replaced by its own underlying type, so the
    /// stored type is always structural. Referring to a named type that is
    /// not yet set up stores `Invalid`.
    pub fn set_underlying(&mut self, named_ty: TypeId, underlying: TypeId) {
        let named = self.ensure_named(named_ty);
        let resolved = match self.shape(underlying) {
            TypeShape::Named(other) => self.named[other.index()]
                .underlying
                .unwrap_or(TYPE_INVALID),
            _ => underlying,
        };
        self.named[named.index()].underlying = Some(resolved);
    }

    /// Declare a type parameter with its constraint's type set.
    pub fn declare_param(&mut self, name: Symbol, constraint: TypeSet) -> TypeId {
        let param = ParamId::from_raw(self.params.len() as u32);
        self.params.push(ParamDef { name, constraint });
        self.intern_type(TypeShape::Param(param))
    }

    /// Replace a type parameter's constraint (bounds are often set after declaration).
    pub fn set_constraint(&mut self, param_ty: TypeId, constraint: TypeSet) {
        let param = self.ensure_param(param_ty);
        self.params[param.index()].constraint = constraint;
    }

    pub fn named_name(&self, named: NamedId) -> Symbol {
        self.named[named.index()].name
    }

    /// Stored underlying type; `None` while the declaration is incomplete.
    pub fn named_underlying(&self, named: NamedId) -> Option<TypeId> {
        self.named[named.index()].underlying
    }

    pub fn param_name(&self, param: ParamId) -> Symbol {
        self.params[param.index()].name
    }

    pub fn param_constraint(&self, param: ParamId) -> &TypeSet {
        &self.params[param.index()].constraint
    }

    /// Structural identity.
    ///
    /// Interning guarantees identical shapes share an id; named types and
    /// parameters are only identical to themselves.
    #[inline]
    pub fn identical(&self, a: TypeId, b: TypeId) -> bool {
        a == b
    }

    /// Whether `id` is `string` or `untyped string` (not a named string type).
    pub fn is_string(&self, id: TypeId) -> bool {
        self.shape(id).is_string()
    }

    /// Whether `id` is a slice whose element is `byte`.
    pub fn is_byte_slice(&self, id: TypeId) -> bool {
        matches!(self.shape(id), TypeShape::Slice(elem) if self.identical(*elem, TYPE_UINT8))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn named_count(&self) -> usize {
        self.named.len()
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}
