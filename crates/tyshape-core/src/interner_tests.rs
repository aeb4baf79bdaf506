use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("Bytes");
    let b = interner.intern("Bytes");
    let c = interner.intern("Chan");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_returns_original_name() {
    let mut interner = Interner::new();

    let sym = interner.intern("T");
    assert_eq!(interner.resolve(sym), "T");
    assert_eq!(interner.try_resolve(sym), Some("T"));
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    interner.intern("known");

    assert!(interner.get("known").is_some());
    assert!(interner.get("unknown").is_none());
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbols_ordered_by_intern_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
    let names: Vec<_> = interner.iter().map(|(_, s)| s).collect();
    assert_eq!(names, ["z", "a"]);
}

#[test]
fn try_resolve_foreign_symbol() {
    let mut big = Interner::new();
    big.intern("a");
    let b = big.intern("b");

    let small = Interner::new();
    assert!(small.is_empty());
    assert_eq!(small.try_resolve(b), None);
}
