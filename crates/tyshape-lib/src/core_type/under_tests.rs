use super::*;
use crate::test_utils::Fixture;
use crate::types::{TYPE_INT, TYPE_INVALID, TYPE_STRING, TYPE_UNTYPED_STRING};

#[test]
fn structural_types_are_their_own_underlying_type() {
    let mut fx = Fixture::new();
    let ints = fx.slice(TYPE_INT);

    assert_eq!(under(&fx.ctx, TYPE_INT), TYPE_INT);
    assert_eq!(under(&fx.ctx, ints), ints);
    assert_eq!(under(&fx.ctx, TYPE_UNTYPED_STRING), TYPE_UNTYPED_STRING);
    assert_eq!(under(&fx.ctx, TYPE_INVALID), TYPE_INVALID);
}

#[test]
fn named_type_resolves_to_structure() {
    let mut fx = Fixture::new();
    let ints = fx.slice(TYPE_INT);
    let list = fx.named("IntList", ints);

    assert_eq!(under(&fx.ctx, list), ints);
}

#[test]
fn named_chain_resolves_in_one_step() {
    let mut fx = Fixture::new();
    let name = fx.named("Name", TYPE_STRING);
    let label = fx.named("Label", name);

    assert_eq!(under(&fx.ctx, label), TYPE_STRING);
}

#[test]
fn type_parameter_is_returned_unchanged() {
    let mut fx = Fixture::new();
    let t = fx.param("T", &[TYPE_INT]);

    assert_eq!(under(&fx.ctx, t), t);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "queried before its underlying type was set")]
fn incomplete_named_type_asserts_in_debug() {
    let mut fx = Fixture::new();
    let sym = fx.interner.intern("Pending");
    let pending = fx.ctx.declare_named(sym);

    under(&fx.ctx, pending);
}
