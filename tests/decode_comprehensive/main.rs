//! Decode Comprehensive Test Suite
//!
//! End-to-end tests from JSON text on disk through traversal to typed values.
//!
//! ## Key Verification Points
//!
//! 1. Every built-in decoder reads the shape it claims and rejects the rest
//! 2. Deferred chains report the error of their earliest failing step
//! 3. Negative indices address from the end of an array
//! 4. Parse failures surface as `UnableToParse` at the first terminal step
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test decode_comprehensive
//!
//! # Run traversal tests only
//! cargo test --test decode_comprehensive traversal::
//! ```

use std::path::PathBuf;

use minjson::prelude::*;

// Test modules
pub mod composite;
pub mod foundation;
pub mod primitives;
pub mod sequences;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Path to a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.json", name))
}

/// Parse a fixture into a document
pub fn load_fixture(name: &str) -> Document {
    init_tracing();
    let bytes = std::fs::read(fixture_path(name)).expect("fixture should be readable");
    Document::parse(&bytes)
}

/// Route tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// Test model: a person with an optional website.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub website: Option<url::Url>,
}

impl Initializable for Person {
    fn init(json: &JsonValue<'_>) -> Result<Self, DecodeError> {
        Ok(Person {
            id: json.get("id").decode()?,
            name: json.get("name").decode()?,
            website: json.get("website").decode_optional(),
        })
    }
}
