//! Type representation for core-type queries.
//!
//! Every type is a `TypeShape` interned in a `TypeContext` and addressed by
//! a `TypeId`. Interning makes structural identity an integer comparison;
//! named types and type parameters get a fresh declaration id each, so they
//! stay nominal.

use tyshape_core::Symbol;

/// Interned type identifier.
///
/// Index into the type registry. Index 0 is `Invalid`, followed by one slot
/// per `BasicKind` in declaration order; composite types start after those.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn is_builtin(self) -> bool {
        (self.0 as usize) <= BasicKind::ALL.len()
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub const TYPE_INVALID: TypeId = TypeId(0);
pub const TYPE_BOOL: TypeId = BasicKind::Bool.type_id();
pub const TYPE_INT: TypeId = BasicKind::Int.type_id();
pub const TYPE_INT32: TypeId = BasicKind::Int32.type_id();
pub const TYPE_UINT8: TypeId = BasicKind::Uint8.type_id();
pub const TYPE_FLOAT64: TypeId = BasicKind::Float64.type_id();
pub const TYPE_STRING: TypeId = BasicKind::String.type_id();
pub const TYPE_UNTYPED_STRING: TypeId = BasicKind::UntypedString.type_id();

/// `byte` is an alias of `uint8`; both spell the same interned type.
pub const TYPE_BYTE: TypeId = TYPE_UINT8;
/// `rune` is an alias of `int32`.
pub const TYPE_RUNE: TypeId = TYPE_INT32;

/// Predeclared basic types, including the untyped constant kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    pub const ALL: [BasicKind; 24] = [
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::String,
        Self::UnsafePointer,
        Self::UntypedBool,
        Self::UntypedInt,
        Self::UntypedRune,
        Self::UntypedFloat,
        Self::UntypedString,
        Self::UntypedNil,
    ];

    /// Reserved id of this kind in every `TypeContext`.
    pub const fn type_id(self) -> TypeId {
        TypeId(self as u32 + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "unsafe.Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
        }
    }

    /// Resolve a predeclared spelling, including the `byte` and `rune` aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "byte" => return Some(Self::Uint8),
            "rune" => return Some(Self::Int32),
            _ => {}
        }
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String | Self::UntypedString)
    }

    pub fn is_untyped(self) -> bool {
        matches!(
            self,
            Self::UntypedBool
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedString
                | Self::UntypedNil
        )
    }
}

/// Channel directionality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ChanDir {
    /// `chan T`, supports both operations.
    SendRecv,
    /// `chan<- T`
    SendOnly,
    /// `<-chan T`
    RecvOnly,
}

impl ChanDir {
    pub fn can_send(self) -> bool {
        !matches!(self, Self::RecvOnly)
    }

    pub fn can_recv(self) -> bool {
        !matches!(self, Self::SendOnly)
    }
}

/// Declaration index of a named type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NamedId(u32);

impl NamedId {
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declaration index of a type parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ParamId(u32);

impl ParamId {
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A struct field. Field order is significant for identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Field {
    pub name: Symbol,
    pub ty: TypeId,
}

impl Field {
    pub fn new(name: Symbol, ty: TypeId) -> Self {
        Self { name, ty }
    }
}

/// The structural form of a type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeShape {
    /// No meaningful type.
    Invalid,
    Basic(BasicKind),
    /// User-defined type; its underlying type lives in the context.
    Named(NamedId),
    /// Type parameter; its constraint lives in the context.
    Param(ParamId),
    Chan { elem: TypeId, dir: ChanDir },
    Slice(TypeId),
    Array { len: u64, elem: TypeId },
    Pointer(TypeId),
    Map { key: TypeId, value: TypeId },
    Struct(Vec<Field>),
    Func {
        params: Vec<TypeId>,
        results: Vec<TypeId>,
        variadic: bool,
    },
}

impl TypeShape {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::Basic(kind) if kind.is_string())
    }
}

/// One element of a constraint's type set: `T` or `~T`.
///
/// Both forms contribute the underlying type of `ty` to core-type folding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    pub tilde: bool,
    pub ty: TypeId,
}

impl Term {
    pub fn exact(ty: TypeId) -> Self {
        Self { tilde: false, ty }
    }

    pub fn tilde(ty: TypeId) -> Self {
        Self { tilde: true, ty }
    }
}

/// The type set of a type parameter's constraint.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum TypeSet {
    /// No specific terms: every type satisfies the constraint.
    #[default]
    All,
    /// Exactly the listed terms, in declaration order.
    Terms(Vec<Term>),
}

impl TypeSet {
    pub fn of(terms: impl IntoIterator<Item = Term>) -> Self {
        Self::Terms(terms.into_iter().collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether the set admits no type at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Terms(terms) if terms.is_empty())
    }

    pub fn term_list(&self) -> &[Term] {
        match self {
            Self::All => &[],
            Self::Terms(terms) => terms,
        }
    }
}
