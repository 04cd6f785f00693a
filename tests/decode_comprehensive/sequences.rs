//! Sequence Tests
//!
//! Array decoding and the index-based view of a wrapper.

use crate::*;

// =============================================================================
// ARRAY DECODING
// =============================================================================

#[test]
fn test_array_of_strings() {
    let doc = load_fixture("types");
    let array: Vec<String> = doc.get("array").decode().unwrap();
    assert_eq!(array, vec!["hello", "world"]);
}

#[test]
fn test_nested_arrays() {
    let doc = load_fixture("types");
    let nested: Vec<Vec<i64>> = doc.get("nested").decode().unwrap();
    assert_eq!(nested, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_empty_array_decodes_to_empty_vec() {
    let doc = load_fixture("types");
    assert!(doc.get("empty_array").decode::<Vec<bool>>().unwrap().is_empty());
    assert!(doc.get("empty_array").decode::<Vec<Person>>().unwrap().is_empty());
}

#[test]
fn test_array_element_mismatch_fails_whole_decode() {
    let doc = Document::parse_str(r#"["hello", 2, "world"]"#);
    let err = doc.decode::<Vec<String>>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("String".into()));
    assert_eq!(err.value(), Some(&Node::Int(2)));
}

#[test]
fn test_object_is_not_an_array() {
    let doc = load_fixture("types");
    let err = doc.get("dictionary").decode::<Vec<Node>>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("array".into()));
}

// =============================================================================
// INDEX-BASED VIEW
// =============================================================================

#[test]
fn test_len_and_iteration_over_array() {
    let doc = load_fixture("array_person");
    let root = doc.root();
    assert_eq!(root.len(), 3);

    let ids: Vec<i64> = root
        .iter()
        .map(|person| person.get("id").decode())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_len_is_one_for_non_arrays() {
    let doc = load_fixture("types");
    assert_eq!(doc.get("integer").len(), 1);
    assert_eq!(doc.get("dictionary").len(), 1);
    assert_eq!(doc.get("missing").len(), 1);
}

#[test]
fn test_iterating_a_non_array_surfaces_the_failure() {
    let doc = load_fixture("types");
    let elements: Vec<_> = doc.get("string").iter().collect();

    assert_eq!(elements.len(), 1);
    assert_eq!(
        elements[0].error().map(|e| e.kind()),
        Some(&ErrorKind::IncompatibleType("array".into()))
    );
}

#[test]
fn test_iterating_a_failed_wrapper_carries_its_error() {
    let doc = load_fixture("types");
    let failed = doc.get("missing");

    for element in &failed {
        assert_eq!(element.error(), failed.error());
    }
}
