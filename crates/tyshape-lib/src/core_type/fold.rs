//! Core-type folding over a type parameter's terms.

use crate::types::{TYPE_INVALID, TYPE_STRING, Term, TypeContext, TypeId, TypeSet, TypeShape};

use super::error::NoCoreType;
use super::matching::{MatchFailure, Operand, match_operands};
use super::trace::{FoldTracer, NoopTracer};
use super::under::under;

/// Enumerable constraint terms.
///
/// Implemented by `TypeSet`; the surrounding checker may supply its own
/// representation. Enumeration must be finite and deterministic.
pub trait TermSource {
    /// Terms in enumeration order, or `None` when the constraint has no
    /// specific terms and admits every type.
    fn terms(&self) -> Option<impl Iterator<Item = Term> + '_>;
}

impl TermSource for TypeSet {
    fn terms(&self) -> Option<impl Iterator<Item = Term> + '_> {
        match self {
            TypeSet::All => None,
            TypeSet::Terms(terms) => Some(terms.iter().copied()),
        }
    }
}

impl TermSource for [Term] {
    fn terms(&self) -> Option<impl Iterator<Item = Term> + '_> {
        Some(self.iter().copied())
    }
}

/// Which folder to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FoldMode {
    /// Every term must share one underlying shape.
    #[default]
    Plain,
    /// Like `Plain`, but strings count as `[]byte`; a result involving any
    /// string term is `string`.
    StringAware,
}

/// Fold the underlying types of `source`'s terms into one representative.
///
/// Stops at the first invalid term or mismatch; later terms are never
/// pulled from the iterator.
pub fn fold_core<S, T>(
    ctx: &TypeContext,
    source: &S,
    mode: FoldMode,
    tracer: &mut T,
) -> Result<TypeId, NoCoreType>
where
    S: TermSource + ?Sized,
    T: FoldTracer,
{
    let Some(terms) = source.terms() else {
        return fail(tracer, NoCoreType::Unrestricted);
    };

    let mut acc: Option<Operand> = None;
    let mut saw_string = false;

    for (index, term) in terms.enumerate() {
        let u = under(ctx, term.ty);
        tracer.trace_term(index, term, u);
        if u == TYPE_INVALID {
            return fail(tracer, NoCoreType::InvalidTerm { index });
        }

        let mut operand = Operand::Type(u);
        if mode == FoldMode::StringAware && ctx.is_string(u) {
            operand = Operand::ByteSlice;
            saw_string = true;
            tracer.trace_substitute(index);
        }

        let Some(prev) = acc else {
            acc = Some(operand);
            continue;
        };

        match match_operands(ctx, prev, operand) {
            Ok(result) => {
                tracer.trace_match(index, prev, operand, result);
                acc = Some(result);
            }
            Err(failure) => {
                let acc_ty = representative(prev);
                let error = match failure {
                    MatchFailure::Shape => NoCoreType::Mismatch {
                        index,
                        acc: acc_ty,
                        term: u,
                    },
                    MatchFailure::Direction => NoCoreType::DirectionConflict {
                        index,
                        acc: acc_ty,
                        term: u,
                    },
                };
                return fail(tracer, error);
            }
        }
    }

    let Some(acc) = acc else {
        return fail(tracer, NoCoreType::EmptyTypeSet);
    };

    let result = if saw_string {
        TYPE_STRING
    } else {
        representative(acc)
    };
    tracer.trace_success(result);
    Ok(result)
}

fn representative(operand: Operand) -> TypeId {
    match operand {
        Operand::Type(id) => id,
        Operand::ByteSlice => TYPE_STRING,
    }
}

fn fail<T: FoldTracer>(tracer: &mut T, error: NoCoreType) -> Result<TypeId, NoCoreType> {
    tracer.trace_failure(&error);
    Err(error)
}

/// Core type of `t` with the reason for failure, traced.
///
/// A type that is not a type parameter is its own core type: the result is
/// its underlying type, even when that is `Invalid`.
pub fn explain_with<T: FoldTracer>(
    ctx: &TypeContext,
    t: TypeId,
    mode: FoldMode,
    tracer: &mut T,
) -> Result<TypeId, NoCoreType> {
    match ctx.shape(t) {
        TypeShape::Param(param) => fold_core(ctx, ctx.param_constraint(*param), mode, tracer),
        _ => Ok(under(ctx, t)),
    }
}

pub fn explain_core_type(ctx: &TypeContext, t: TypeId) -> Result<TypeId, NoCoreType> {
    explain_with(ctx, t, FoldMode::Plain, &mut NoopTracer)
}

pub fn explain_core_string(ctx: &TypeContext, t: TypeId) -> Result<TypeId, NoCoreType> {
    explain_with(ctx, t, FoldMode::StringAware, &mut NoopTracer)
}

/// The single underlying type shared by every type in `t`'s type set.
///
/// For a non-parameter `t` this is `under(t)`. For a type parameter it is
/// the common underlying type of all its terms, where a bidirectional
/// channel gives way to a restricted one of the same element type. `None`
/// when the set is empty or unrestricted, a term is invalid, or two terms
/// disagree.
pub fn core_type(ctx: &TypeContext, t: TypeId) -> Option<TypeId> {
    explain_core_type(ctx, t).ok()
}

/// Like [`core_type`], but `string` and `[]byte` count as the same shape.
///
/// If the fold succeeds and any term was a string, the result is `string`.
pub fn core_string(ctx: &TypeContext, t: TypeId) -> Option<TypeId> {
    explain_core_string(ctx, t).ok()
}
