//! Domain-specific assertion macros for histload harnesses.
//!
//! These add context-rich failure messages that make it clear *which* record
//! invariant was violated.

use histload::EventRecord;

// ---------------------------------------------------------------------------
// Category assertions
// ---------------------------------------------------------------------------

/// Assert that a record carries `category1` with an expected value.
///
/// ```rust
/// assert_category!(record, "Wars");
/// ```
#[macro_export]
macro_rules! assert_category {
    ($record:expr, $value:expr) => {{
        let record: &histload::EventRecord = &$record;
        let expected = serde_json::json!($value);
        match &record.category1 {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_category! failed:\n  expected: {}\n  actual:   {}\n  record: {:?}",
                expected, actual, record
            ),
            None => panic!(
                "assert_category! failed: record has no category1.\n  record: {:?}",
                record
            ),
        }
    }};
}

/// Assert that a record has no `category1`, neither in the struct nor in its
/// serialized document.
#[macro_export]
macro_rules! assert_no_category {
    ($record:expr) => {{
        let record: &histload::EventRecord = &$record;
        if record.category1.is_some() {
            panic!(
                "assert_no_category! failed: category1 = {:?}",
                record.category1
            );
        }
        let doc = serde_json::to_value(record).expect("record serializes");
        if doc.get("category1").is_some() {
            panic!("assert_no_category! failed: serialized document has category1: {doc}");
        }
    }};
}

// ---------------------------------------------------------------------------
// Record invariants
// ---------------------------------------------------------------------------

/// Assert the invariants every emitted record must satisfy: non-null date,
/// a single-line trimmed description, and no falsy category.
pub fn assert_record_invariants(record: &EventRecord) {
    assert!(!record.date.is_null(), "record date must not be null: {record:?}");
    assert_eq!(
        record.description,
        record.description.trim(),
        "description must be trimmed: {record:?}"
    );
    assert!(
        !record
            .description
            .contains(|c: char| c.is_whitespace() && c != ' '),
        "description must be single-line: {record:?}"
    );
    assert!(
        !record.description.contains("  "),
        "description whitespace must be collapsed: {record:?}"
    );
    if let Some(category) = &record.category1 {
        assert!(
            histload::normalizer::is_truthy(category),
            "category1 must be truthy when present: {record:?}"
        );
    }
}
