//! Primitive Decoding Tests
//!
//! Scalars and nested dictionaries read from the `types` fixture.

use crate::*;

// =============================================================================
// SCALAR TESTS
// =============================================================================

#[test]
fn test_integer() {
    let doc = load_fixture("types");
    assert_eq!(doc.get("integer").decode::<i64>().unwrap(), 42);
    assert_eq!(doc.get("integer").decode::<u8>().unwrap(), 42);
}

#[test]
fn test_double() {
    let doc = load_fixture("types");
    assert_eq!(doc.get("double").decode::<f64>().unwrap(), 3.14);
}

#[test]
fn test_integer_reads_as_double() {
    let doc = load_fixture("types");
    assert_eq!(doc.get("integer").decode::<f64>().unwrap(), 42.0);
}

#[test]
fn test_double_does_not_read_as_integer() {
    let doc = load_fixture("types");
    let err = doc.get("double").decode::<i64>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("i64".into()));
}

#[test]
fn test_string() {
    let doc = load_fixture("types");
    assert_eq!(doc.get("string").decode::<String>().unwrap(), "hello, world");
}

#[test]
fn test_bool() {
    let doc = load_fixture("types");
    assert!(!doc.get("bool").decode::<bool>().unwrap());
}

#[test]
fn test_null_is_present_but_typed() {
    let doc = load_fixture("types");
    assert!(doc.get("null").decode::<Node>().unwrap().is_null());

    let err = doc.get("null").decode::<String>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("String".into()));
    assert_eq!(err.value(), Some(&Node::Null));
}

// =============================================================================
// DICTIONARY TESTS
// =============================================================================

#[test]
fn test_nested_dictionary() -> anyhow::Result<()> {
    let doc = load_fixture("types");
    let dictionary = doc.get("dictionary");

    assert_eq!(dictionary.get("integer").decode::<i64>()?, 64);
    assert_eq!(dictionary.get("string").decode::<String>()?, "apples");
    Ok(())
}

#[test]
fn test_dictionary_as_map() -> anyhow::Result<()> {
    let doc = load_fixture("types");
    let map: std::collections::HashMap<String, Node> = doc.get("dictionary").decode()?;

    assert_eq!(map.len(), 2);
    assert_eq!(map["integer"], Node::Int(64));
    assert_eq!(map["string"], Node::from("apples"));
    Ok(())
}

// =============================================================================
// NUMERIC RANGE TESTS
// =============================================================================

#[test]
fn test_u64_max_round_trips() {
    let doc = Document::parse_str("[18446744073709551615, 9223372036854775808]");

    assert_eq!(doc.get(0).decode::<u64>().unwrap(), u64::MAX);
    assert_eq!(doc.get(1).decode::<u64>().unwrap(), 1 << 63);

    let err = doc.get(0).decode::<i64>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("i64".into()));
}

#[test]
fn test_f32_overflow_is_incompatible() {
    let doc = Document::parse_str(r#"{"huge": 1e300, "fits": 0.25}"#);

    let err = doc.get("huge").decode::<f32>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("f32".into()));
    assert_eq!(doc.get("fits").decode::<f32>().unwrap(), 0.25);
}
