//! Extractor — cuts `"event": {...}` object literals out of the source text.
//!
//! The source files are only loosely JSON, so nothing is parsed here. Each
//! match of `"event" : {` is captured up to the *first* closing brace. Braces
//! do not nest: an event holding an inner object is cut short at the inner
//! object's `}` and will later fail to parse. Existing data files rely on
//! this shape, so the scan stays single-level.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Fragment;

fn event_re() -> &'static Regex {
    static EVENT_RE: OnceLock<Regex> = OnceLock::new();
    EVENT_RE.get_or_init(|| {
        Regex::new(r#""event"\s*:\s*(\{[^}]*\})"#).expect("valid event fragment regex")
    })
}

/// Every event fragment in `text`, in source order, without overlap.
pub fn extract(text: &str) -> Vec<Fragment<'_>> {
    event_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .enumerate()
        .map(|(ordinal, m)| Fragment {
            ordinal,
            offset: m.start(),
            text: m.as_str(),
        })
        .collect()
}
