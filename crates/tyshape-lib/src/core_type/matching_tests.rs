use super::matching::{MatchFailure, match_operands};
use super::*;
use crate::test_utils::Fixture;
use crate::types::{TYPE_BYTE, TYPE_INT, TYPE_STRING};

#[test]
fn identical_types_match_themselves() {
    let mut fx = Fixture::new();
    let ints = fx.slice(TYPE_INT);
    let ch = fx.chan(TYPE_INT);
    let send = fx.send(TYPE_INT);

    for ty in [TYPE_INT, TYPE_STRING, ints, ch, send] {
        assert_eq!(match_types(&fx.ctx, ty, ty), Some(ty));
    }
}

#[test]
fn bidirectional_gives_way_to_restricted() {
    let mut fx = Fixture::new();
    let both = fx.chan(TYPE_INT);
    let send = fx.send(TYPE_INT);
    let recv = fx.recv(TYPE_INT);

    assert_eq!(match_types(&fx.ctx, both, send), Some(send));
    assert_eq!(match_types(&fx.ctx, send, both), Some(send));
    assert_eq!(match_types(&fx.ctx, both, recv), Some(recv));
    assert_eq!(match_types(&fx.ctx, recv, both), Some(recv));
}

#[test]
fn opposite_restrictions_never_match() {
    let mut fx = Fixture::new();
    let send = fx.send(TYPE_INT);
    let recv = fx.recv(TYPE_INT);

    assert_eq!(match_types(&fx.ctx, send, recv), None);
    assert_eq!(match_types(&fx.ctx, recv, send), None);
    assert_eq!(
        match_operands(&fx.ctx, Operand::Type(send), Operand::Type(recv)),
        Err(MatchFailure::Direction)
    );
}

#[test]
fn channels_with_different_elements_do_not_match() {
    let mut fx = Fixture::new();
    let ints = fx.chan(TYPE_INT);
    let strings = fx.send(TYPE_STRING);

    assert_eq!(match_types(&fx.ctx, ints, strings), None);
    assert_eq!(
        match_operands(&fx.ctx, Operand::Type(ints), Operand::Type(strings)),
        Err(MatchFailure::Shape)
    );
}

#[test]
fn direction_rule_applies_only_at_top_level() {
    let mut fx = Fixture::new();
    let inner_both = fx.chan(TYPE_INT);
    let inner_send = fx.send(TYPE_INT);
    let outer_a = fx.chan(inner_both);
    let outer_b = fx.chan(inner_send);

    assert_eq!(match_types(&fx.ctx, outer_a, outer_b), None);
}

#[test]
fn named_type_differs_from_its_underlying_type() {
    let mut fx = Fixture::new();
    let ints = fx.slice(TYPE_INT);
    let list = fx.named("IntList", ints);

    assert_eq!(match_types(&fx.ctx, list, ints), None);
    assert_eq!(match_types(&fx.ctx, list, list), Some(list));
}

#[test]
fn different_shapes_do_not_match() {
    let mut fx = Fixture::new();
    let ints = fx.slice(TYPE_INT);
    let ch = fx.chan(TYPE_INT);
    let arr = fx.ctx.intern_array(3, TYPE_INT);
    let ptr = fx.ctx.intern_pointer(TYPE_INT);

    let shapes = [TYPE_INT, ints, ch, arr, ptr];
    for (i, &x) in shapes.iter().enumerate() {
        for (j, &y) in shapes.iter().enumerate() {
            let expected = (i == j).then_some(x);
            assert_eq!(match_types(&fx.ctx, x, y), expected);
        }
    }
}

#[test]
fn matching_is_commutative() {
    let mut fx = Fixture::new();
    let both = fx.chan(TYPE_INT);
    let send = fx.send(TYPE_INT);
    let recv = fx.recv(TYPE_INT);
    let ints = fx.slice(TYPE_INT);

    let types = [TYPE_INT, TYPE_STRING, both, send, recv, ints];
    for &x in &types {
        for &y in &types {
            assert_eq!(
                match_types(&fx.ctx, x, y),
                match_types(&fx.ctx, y, x),
                "match({}, {})",
                fx.show(x),
                fx.show(y)
            );
        }
    }
}

#[test]
fn byte_slice_stand_in_matches_interned_byte_slice() {
    let mut fx = Fixture::new();
    let bytes = fx.slice(TYPE_BYTE);
    let ints = fx.slice(TYPE_INT);

    assert_eq!(
        match_operands(&fx.ctx, Operand::ByteSlice, Operand::Type(bytes)),
        Ok(Operand::ByteSlice)
    );
    assert_eq!(
        match_operands(&fx.ctx, Operand::Type(bytes), Operand::ByteSlice),
        Ok(Operand::Type(bytes))
    );
    assert_eq!(
        match_operands(&fx.ctx, Operand::ByteSlice, Operand::Type(ints)),
        Err(MatchFailure::Shape)
    );
    assert_eq!(
        match_operands(&fx.ctx, Operand::ByteSlice, Operand::ByteSlice),
        Ok(Operand::ByteSlice)
    );
}
