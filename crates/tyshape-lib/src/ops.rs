//! Operations whose legality on a type parameter depends on its core type.
//!
//! Each query resolves the operand's core type first and then inspects its
//! shape, so the same code path serves ordinary types and type parameters.

use tyshape_core::Symbol;

use crate::core_type::{NoCoreType, explain_core_string, explain_core_type, under};
use crate::types::{TYPE_BYTE, TypeContext, TypeId, TypeShape};

/// Direction of a channel operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChanOp {
    /// `ch <- v`
    Send,
    /// `<-ch`
    Recv,
}

/// Why an operation is not statically valid on a type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("no core type: {0}")]
    NoCoreType(#[from] NoCoreType),

    #[error("core type is not a channel")]
    NotChannel { core: TypeId },

    #[error("cannot send to a receive-only channel")]
    SendOnRecvOnly { core: TypeId },

    #[error("cannot receive from a send-only channel")]
    RecvOnSendOnly { core: TypeId },

    #[error("core type cannot be indexed")]
    NotIndexable { core: TypeId },

    #[error("core type has no fields")]
    NotStruct { core: TypeId },

    #[error("no field with that name")]
    UnknownField { core: TypeId, name: Symbol },
}

/// Element type of `ch <- v` or `<-ch` on an operand of type `t`.
pub fn channel_elem(ctx: &TypeContext, t: TypeId, op: ChanOp) -> Result<TypeId, OperationError> {
    let core = explain_core_type(ctx, t)?;
    let TypeShape::Chan { elem, dir } = ctx.shape(core) else {
        return Err(OperationError::NotChannel { core });
    };

    match op {
        ChanOp::Send if !dir.can_send() => Err(OperationError::SendOnRecvOnly { core }),
        ChanOp::Recv if !dir.can_recv() => Err(OperationError::RecvOnSendOnly { core }),
        _ => Ok(*elem),
    }
}

/// Element type of `x[i]` on an operand of type `t`.
///
/// Strings index as `byte`. A type parameter whose terms mix strings and
/// byte slices has core string `string` and therefore also indexes as
/// `byte`. Maps yield their value type.
pub fn index_elem(ctx: &TypeContext, t: TypeId) -> Result<TypeId, OperationError> {
    let core = explain_core_string(ctx, t)?;
    match ctx.shape(core) {
        shape if shape.is_string() => Ok(TYPE_BYTE),
        TypeShape::Slice(elem) | TypeShape::Array { elem, .. } => Ok(*elem),
        TypeShape::Map { value, .. } => Ok(*value),
        TypeShape::Pointer(pointee) => match ctx.shape(under(ctx, *pointee)) {
            TypeShape::Array { elem, .. } => Ok(*elem),
            _ => Err(OperationError::NotIndexable { core }),
        },
        _ => Err(OperationError::NotIndexable { core }),
    }
}

/// Type of the selector `x.name` on an operand of type `t`.
///
/// Field access goes through one level of pointer indirection, as `p.f`
/// does for `p` of type `*struct{f T}`.
pub fn field_lookup(ctx: &TypeContext, t: TypeId, name: Symbol) -> Result<TypeId, OperationError> {
    let core = explain_core_type(ctx, t)?;
    let target = match ctx.shape(core) {
        TypeShape::Pointer(pointee) => under(ctx, *pointee),
        _ => core,
    };
    let TypeShape::Struct(fields) = ctx.shape(target) else {
        return Err(OperationError::NotStruct { core });
    };

    fields
        .iter()
        .find(|field| field.name == name)
        .map(|field| field.ty)
        .ok_or(OperationError::UnknownField { core, name })
}
