//! Normalizer — turns raw [`Fragment`]s into [`EventRecord`]s.
//!
//! Each fragment is repaired (line breaks inside string literals are not
//! legal JSON), parsed, and reduced to the fixed set of event fields. A
//! fragment that fails any step is dropped and counted; it never aborts the
//! batch.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::cleaner::clean_description;
use crate::error::FragmentError;
use crate::extractor::extract;
use crate::types::{EventRecord, Fragment, NormalizedBatch};

/// Replace `\n` with a space and drop `\r`.
pub fn repair(fragment: &str) -> String {
    fragment.replace('\n', " ").replace('\r', "")
}

/// JavaScript truthiness for a JSON value: `null`, `false`, `0` and `""` are
/// falsy, everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse and reduce a single fragment.
pub fn normalize_fragment(fragment: &str) -> Result<EventRecord, FragmentError> {
    let value: Value = serde_json::from_str(&repair(fragment))?;
    let Value::Object(mut event) = value else {
        return Err(FragmentError::NotAnObject);
    };

    let date = match event.remove("date") {
        None | Some(Value::Null) => return Err(FragmentError::MissingField("date")),
        Some(date) => date,
    };
    let description = required_str(&mut event, "description")?;
    let lang = required_str(&mut event, "lang")?;
    let granularity = required_str(&mut event, "granularity")?;
    let category1 = event.remove("category1").filter(is_truthy);

    Ok(EventRecord {
        date,
        description: clean_description(&description),
        lang,
        granularity,
        category1,
    })
}

fn required_str(
    event: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, FragmentError> {
    match event.remove(field) {
        None | Some(Value::Null) => Err(FragmentError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(FragmentError::WrongType {
            field,
            expected: "string",
        }),
    }
}

/// Normalise every fragment, keeping source order. Failed fragments are
/// logged and counted in [`NormalizedBatch::skipped`].
pub fn normalize(fragments: &[Fragment<'_>]) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();
    for fragment in fragments {
        match normalize_fragment(fragment.text) {
            Ok(record) => batch.records.push(record),
            Err(err) => {
                warn!("skipping event record that failed to parse");
                debug!(
                    ordinal = fragment.ordinal,
                    offset = fragment.offset,
                    error = %err,
                    "fragment rejected"
                );
                batch.skipped += 1;
            }
        }
    }
    batch
}

/// Extract and normalise in one step.
pub fn normalize_text(text: &str) -> NormalizedBatch {
    normalize(&extract(text))
}
