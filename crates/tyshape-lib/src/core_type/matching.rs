//! Pairwise matching of underlying types.
//!
//! Rules, in order:
//! - identical types match and yield the left operand
//! - channels differing only in direction yield the restricted one,
//!   provided the other is bidirectional
//! - anything else fails

use crate::types::{ChanDir, TypeContext, TypeId, TypeShape};

/// A type as seen by the fold.
///
/// `ByteSlice` is the `[]byte` stand-in for string terms during
/// string-aware folding. It exists only for the duration of one fold and is
/// never interned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    Type(TypeId),
    ByteSlice,
}

impl Operand {
    fn identical(self, ctx: &TypeContext, other: Operand) -> bool {
        match (self, other) {
            (Operand::Type(a), Operand::Type(b)) => ctx.identical(a, b),
            (Operand::ByteSlice, Operand::ByteSlice) => true,
            (Operand::Type(id), Operand::ByteSlice) | (Operand::ByteSlice, Operand::Type(id)) => {
                ctx.is_byte_slice(id)
            }
        }
    }

    /// The channel shape behind this operand, if any.
    fn as_chan(self, ctx: &TypeContext) -> Option<(TypeId, ChanDir)> {
        match self {
            Operand::Type(id) => match ctx.shape(id) {
                TypeShape::Chan { elem, dir } => Some((*elem, *dir)),
                _ => None,
            },
            Operand::ByteSlice => None,
        }
    }
}

/// Why two operands did not match.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MatchFailure {
    /// Different shapes.
    Shape,
    /// Same element type, opposite channel restrictions.
    Direction,
}

pub(crate) fn match_operands(
    ctx: &TypeContext,
    x: Operand,
    y: Operand,
) -> Result<Operand, MatchFailure> {
    if x.identical(ctx, y) {
        return Ok(x);
    }

    let (Some((x_elem, x_dir)), Some((y_elem, y_dir))) = (x.as_chan(ctx), y.as_chan(ctx)) else {
        return Err(MatchFailure::Shape);
    };
    if !ctx.identical(x_elem, y_elem) {
        return Err(MatchFailure::Shape);
    }

    // Same element, different direction: prefer the restricted channel
    match (x_dir, y_dir) {
        (ChanDir::SendRecv, _) => Ok(y),
        (_, ChanDir::SendRecv) => Ok(x),
        _ => Err(MatchFailure::Direction),
    }
}

/// Match two underlying types.
///
/// Returns `x` when the types are identical, the restricted channel when
/// `x` and `y` are channels of the same element type and one of them is
/// bidirectional, and `None` otherwise. Send-only and receive-only
/// channels never match each other.
pub fn match_types(ctx: &TypeContext, x: TypeId, y: TypeId) -> Option<TypeId> {
    match match_operands(ctx, Operand::Type(x), Operand::Type(y)).ok()? {
        Operand::Type(id) => Some(id),
        Operand::ByteSlice => None,
    }
}
