use tyshape_core::{Colors, Interner};

use super::*;

#[test]
fn basic_types_print_canonical_names() {
    let ctx = TypeContext::new();
    let interner = Interner::new();
    let p = TypePrinter::new(&ctx, &interner);

    insta::assert_snapshot!(p.render(TYPE_INT), @"int");
    insta::assert_snapshot!(p.render(TYPE_BYTE), @"uint8");
    insta::assert_snapshot!(p.render(TYPE_RUNE), @"int32");
    insta::assert_snapshot!(p.render(TYPE_UNTYPED_STRING), @"untyped string");
    insta::assert_snapshot!(p.render(TYPE_INVALID), @"invalid type");
}

#[test]
fn channel_directions() {
    let mut ctx = TypeContext::new();
    let interner = Interner::new();
    let both = ctx.intern_chan(TYPE_INT, ChanDir::SendRecv);
    let send = ctx.intern_chan(TYPE_INT, ChanDir::SendOnly);
    let recv = ctx.intern_chan(TYPE_INT, ChanDir::RecvOnly);
    let of_recv = ctx.intern_chan(recv, ChanDir::SendRecv);
    let send_of_both = ctx.intern_chan(both, ChanDir::SendOnly);
    let p = TypePrinter::new(&ctx, &interner);

    insta::assert_snapshot!(p.render(both), @"chan int");
    insta::assert_snapshot!(p.render(send), @"chan<- int");
    insta::assert_snapshot!(p.render(recv), @"<-chan int");
    insta::assert_snapshot!(p.render(of_recv), @"chan (<-chan int)");
    insta::assert_snapshot!(p.render(send_of_both), @"chan<- chan int");
}

#[test]
fn composite_types() {
    let mut ctx = TypeContext::new();
    let mut interner = Interner::new();
    let bytes = ctx.intern_slice(TYPE_BYTE);
    let grid = ctx.intern_array(4, bytes);
    let ptr = ctx.intern_pointer(grid);
    let index = ctx.intern_map(TYPE_STRING, ptr);
    let point = ctx.intern_struct([
        Field::new(interner.intern("x"), TYPE_INT),
        Field::new(interner.intern("label"), TYPE_STRING),
    ]);
    let empty = ctx.intern_struct([]);
    let p = TypePrinter::new(&ctx, &interner);

    insta::assert_snapshot!(p.render(index), @"map[string]*[4][]uint8");
    insta::assert_snapshot!(p.render(point), @"struct{x int; label string}");
    insta::assert_snapshot!(p.render(empty), @"struct{}");
}

#[test]
fn function_signatures() {
    let mut ctx = TypeContext::new();
    let interner = Interner::new();
    let strings = ctx.intern_slice(TYPE_STRING);
    let nothing = ctx.intern_func(vec![], vec![], false);
    let printf = ctx.intern_func(vec![TYPE_STRING, strings], vec![TYPE_INT], true);
    let pair = ctx.intern_func(vec![strings], vec![TYPE_INT, TYPE_BOOL], false);
    let p = TypePrinter::new(&ctx, &interner);

    insta::assert_snapshot!(p.render(nothing), @"func()");
    insta::assert_snapshot!(p.render(printf), @"func(string, ...string) int");
    insta::assert_snapshot!(p.render(pair), @"func([]string) (int, bool)");
}

#[test]
fn declared_types_print_by_name() {
    let mut ctx = TypeContext::new();
    let mut interner = Interner::new();
    let named = ctx.declare_named(interner.intern("Celsius"));
    ctx.set_underlying(named, TYPE_FLOAT64);
    let param = ctx.declare_param(interner.intern("T"), TypeSet::All);
    let list = ctx.intern_slice(named);
    let p = TypePrinter::new(&ctx, &interner);

    insta::assert_snapshot!(p.render(list), @"[]Celsius");
    insta::assert_snapshot!(p.render(param), @"T");
}

#[test]
fn unknown_id_prints_placeholder() {
    let ctx = TypeContext::new();
    let interner = Interner::new();
    let p = TypePrinter::new(&ctx, &interner);

    assert_eq!(p.render(TypeId(9999)), "?");
}

#[test]
fn colors_wrap_names_only() {
    let mut ctx = TypeContext::new();
    let interner = Interner::new();
    let ints = ctx.intern_slice(TYPE_INT);
    let p = TypePrinter::new(&ctx, &interner).with_colors(Colors::ON);

    assert_eq!(p.display(ints).to_string(), "[]\x1b[34mint\x1b[0m");
}
