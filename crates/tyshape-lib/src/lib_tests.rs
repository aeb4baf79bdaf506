use crate::types::TYPE_INT;
use crate::{ChanOp, Error, Result, Universe, core_type, ops};

fn recv_elem(json: &str, name: &str) -> Result<String> {
    let universe = Universe::from_json(json)?;
    let ty = universe.lookup(name).unwrap_or(TYPE_INT);
    let elem = ops::channel_elem(universe.ctx(), ty, ChanOp::Recv)?;
    Ok(universe.printer().render(elem))
}

#[test]
fn errors_convert_into_crate_error() {
    let json = r#"{ "params": [{ "name": "C", "terms": [{ "chan": { "elem": "string" } }] }] }"#;
    assert_eq!(recv_elem(json, "C").unwrap(), "string");

    let err = recv_elem("not json", "C").unwrap_err();
    assert!(matches!(err, Error::Universe(_)));

    let err = recv_elem(r#"{ "params": [{ "name": "C" }] }"#, "C").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no core type: type set is unrestricted");
}

#[test]
fn no_core_type_converts_directly() {
    let universe = Universe::from_json(r#"{ "params": [{ "name": "T", "terms": [] }] }"#).unwrap();
    let t = universe.lookup("T").unwrap();

    let err: Error = core_type::explain_core_type(universe.ctx(), t)
        .unwrap_err()
        .into();
    insta::assert_snapshot!(err.to_string(), @"type set is empty");
}
