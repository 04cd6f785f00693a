//! Composite Decoding Tests
//!
//! User types implementing `Initializable`, built from nested fields.

use crate::*;

// =============================================================================
// PERSON MODEL
// =============================================================================

#[test]
fn test_array_of_people() -> anyhow::Result<()> {
    let doc = load_fixture("array_person");
    let people: Vec<Person> = doc.decode()?;

    assert_eq!(people.len(), 3);
    assert_eq!(people[0].name, "Ben");
    assert_eq!(
        people[0].website.as_ref().map(|u| u.as_str()),
        Some("http://bencochran.com/")
    );
    assert_eq!(people[1].id, 3);
    assert!(people[1].website.is_none());
    assert_eq!(people[2].id, 4);
    assert_eq!(people[2].name, "Kat");
    Ok(())
}

#[test]
fn test_single_person_by_negative_index() -> anyhow::Result<()> {
    let doc = load_fixture("array_person");
    let chris: Person = doc.get(-2).decode()?;

    assert_eq!(
        chris,
        Person {
            id: 3,
            name: "Chris".into(),
            website: None,
        }
    );
    Ok(())
}

#[test]
fn test_person_with_website() -> anyhow::Result<()> {
    let doc = Document::parse_str(r#"{"id": 1, "name": "Ben", "website": "http://example.com"}"#);
    let person: Person = doc.decode()?;

    assert_eq!(person.website, Some(url::Url::parse("http://example.com")?));
    Ok(())
}

#[test]
fn test_optional_field_swallows_wrong_type() {
    let doc = Document::parse_str(r#"{"id": 7, "name": "Ann", "website": 12}"#);
    let person: Person = doc.decode().unwrap();
    assert!(person.website.is_none());
}

#[test]
fn test_required_field_missing() {
    let doc = Document::parse_str(r#"{"name": "Ann"}"#);
    let err = doc.decode::<Person>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingKey("id".into()));
}

#[test]
fn test_required_field_wrong_type() {
    let doc = Document::parse_str(r#"{"id": "7", "name": "Ann"}"#);
    let err = doc.decode::<Person>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("i64".into()));
    assert_eq!(err.value(), Some(&Node::from("7")));
}

#[test]
fn test_one_bad_person_fails_the_array() {
    let doc = Document::parse_str(r#"[{"id": 1, "name": "Ben"}, {"id": 2}]"#);
    let err = doc.decode::<Vec<Person>>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingKey("name".into()));
}
