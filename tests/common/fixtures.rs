//! Static source-text corpora used across harnesses.
//!
//! Each entry is a fragment of the kind found in the historical-event dumps,
//! including the awkward ones: line breaks inside strings, falsy categories,
//! wiki markup, and objects the extractor cuts short.

/// Fragments that normalise into a record.
pub const CORPUS_VALID: &[&str] = &[
    r#""event": {"date":"1815","description":"Battle of <a href=\"/wiki/Waterloo\">Waterloo</a>.","lang":"en","granularity":"year","category1":"Wars"}"#,
    r#""event": {"date":"-44/03/15","description":"Assassination of Julius Caesar","lang":"en","granularity":"year"}"#,
    r#""event" : {"date":"1969/07/20","description":"Apollo 11   lands on the Moon","lang":"en","granularity":"day","category1":""}"#,
    "\"event\":{\"date\":\"1492\",\"description\":\"Columbus reaches\r\nthe Americas\",\"lang\":\"en\",\"granularity\":\"year\",\"category1\":0}",
    r#""event": {"date":1066,"description":"Norman conquest of England begins","lang":"en","granularity":"year","category1":false}"#,
];

/// Fragments the extractor captures but the normalizer rejects.
pub const CORPUS_REJECTED: &[&str] = &[
    r#""event": {"date":"1900","meta":{"x":1},"description":"nested"}"#,
    r#""event": {"date":"1901","description":"cited {{cite|web}} here","lang":"en","granularity":"year"}"#,
    r#""event": {"date":"1902","lang":"en","granularity":"year"}"#,
    r#""event": {"date":"1903","description":"d","lang":"en","granularity":"year",}"#,
];

/// Join fragments into one source document.
pub fn corpus_text(corpus: &[&str]) -> String {
    let items: Vec<String> = corpus.iter().map(|f| format!("{{{f}}}")).collect();
    format!(r#"{{"result": {{"events": [{}]}}}}"#, items.join(",\n"))
}

// ---------------------------------------------------------------------------
// Fixture file helpers
// ---------------------------------------------------------------------------

/// Write `text` to `historicalEvents.json` inside `dir` and return its path.
pub fn write_source(dir: &std::path::Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("historicalEvents.json");
    std::fs::write(&path, text).expect("write fixture source file");
    path
}
