use crate::types::{TypeContext, TypeId, TypeShape};

/// The underlying type of `t`.
///
/// Named types resolve through one indirection to their stored structural
/// type; every other type is its own underlying type. A type parameter is
/// returned unchanged since it has no fixed shape of its own.
///
/// `t` must be fully set up. A named type whose underlying type was never
/// assigned trips a debug assertion and resolves to `Invalid` otherwise.
pub fn under(ctx: &TypeContext, t: TypeId) -> TypeId {
    match ctx.shape(t) {
        TypeShape::Named(named) => ctx.ensure_underlying(*named),
        _ => t,
    }
}
