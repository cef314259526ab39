//! Description cleaner.
//!
//! Strips the handful of markup shapes that show up in event descriptions.
//! Only these four are touched; any other template, tag or partial markup is
//! left as-is. Passes run in a fixed order; the template-tail pass assumes
//! whole `{{...}}` templates are already gone.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    template: Regex,
    anchor_open: Regex,
    template_tail: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        template: Regex::new(r"\{\{[^}]+\}\}").expect("valid template regex"),
        // Matches any tag starting with `<a`, attributes or not.
        anchor_open: Regex::new(r"<a[^>]*>").expect("valid anchor regex"),
        template_tail: Regex::new(r"\|[^}]*\}").expect("valid template tail regex"),
        // `\s` is Unicode White_Space, which leaves out U+FEFF.
        whitespace: Regex::new(r"[\s\x{FEFF}]+").expect("valid whitespace regex"),
    })
}

const ANCHOR_CLOSE: &str = "</a>";

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Clean a raw description into a single trimmed line.
pub fn clean_description(raw: &str) -> String {
    let p = patterns();
    let text = p.template.replace_all(raw, "");
    let text = p.anchor_open.replace_all(&text, "");
    let text = text.replace(ANCHOR_CLOSE, "");
    let text = p.template_tail.replace_all(&text, "");
    let text = p.whitespace.replace_all(&text, " ");
    text.trim_matches(is_space).to_string()
}
