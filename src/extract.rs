//! Discovery of JSON payloads inside prose-wrapped model output.
//!
//! The provider routinely wraps its JSON in explanation or markdown code
//! fences. Rather than regex fishing, scan the text once for balanced
//! `{...}`/`[...]` structures (string- and escape-aware) and hand each
//! candidate slice to serde, outermost first.

use serde::de::DeserializeOwned;
use tracing::debug;

/// Type of a JSON structure found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Object,
    Array,
}

/// Byte range of one balanced JSON structure within a larger text.
/// `end` is the inclusive index of the closing bracket/brace.
#[derive(Debug, Clone)]
pub struct JsonSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
    pub children: Vec<JsonSpan>,
}

#[derive(Debug)]
struct Frame {
    start: usize,
    kind: SpanKind,
    children: Vec<JsonSpan>,
}

/// Find all top-level JSON structures in the text, with nesting preserved.
/// Coordinates are byte indices. Unbalanced brackets are dropped silently.
pub fn find_json_spans(text: &str) -> Vec<JsonSpan> {
    let bytes = text.as_bytes();
    let mut roots: Vec<JsonSpan> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    let mut in_string = false;
    let mut escape = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escape {
                escape = false;
                continue;
            }
            match b {
                b'\\' => escape = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => stack.push(Frame {
                start: i,
                kind: SpanKind::Object,
                children: Vec::new(),
            }),
            b'[' => stack.push(Frame {
                start: i,
                kind: SpanKind::Array,
                children: Vec::new(),
            }),
            b'}' | b']' => {
                let expected = if b == b'}' {
                    SpanKind::Object
                } else {
                    SpanKind::Array
                };
                if let Some(frame) = stack.pop() {
                    if frame.kind != expected {
                        continue;
                    }
                    let span = JsonSpan {
                        start: frame.start,
                        end: i,
                        kind: frame.kind,
                        children: frame.children,
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(span),
                        None => roots.push(span),
                    }
                }
            }
            _ => {}
        }
    }

    debug!(count = roots.len(), "found root JSON structures");
    roots
}

/// Deserialize the first `T` found in the text.
///
/// Tries the whole (trimmed) text first, then every discovered structure
/// outermost-first, descending into children only when a parent fails.
pub fn first_match<T: DeserializeOwned>(text: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str::<T>(text.trim()) {
        return Some(value);
    }

    fn try_span<T: DeserializeOwned>(text: &str, span: &JsonSpan) -> Option<T> {
        let slice = &text[span.start..=span.end];
        if let Ok(value) = serde_json::from_str::<T>(slice) {
            return Some(value);
        }
        span.children
            .iter()
            .find_map(|child| try_span(text, child))
    }

    find_json_spans(text)
        .iter()
        .find_map(|span| try_span(text, span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        x: i32,
    }

    #[test]
    fn finds_object_in_prose() {
        let spans = find_json_spans(r#"before {"x": 1} after"#);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Object);
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        let spans = find_json_spans(r#"{"x": "a } b { c"}"#);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].children.is_empty());
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let spans = find_json_spans(r#"{"x": "say \"hi\" {"}"#);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn nested_structures_become_children() {
        let spans = find_json_spans(r#"[{"x":1},{"x":2}]"#);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Array);
        assert_eq!(spans[0].children.len(), 2);
    }

    #[test]
    fn unbalanced_brackets_yield_nothing() {
        assert!(find_json_spans(r#"{"x": 1"#).is_empty());
    }

    #[test]
    fn first_match_prefers_whole_text() {
        let item: Item = first_match(r#"{"x": 3}"#).unwrap();
        assert_eq!(item, Item { x: 3 });
    }

    #[test]
    fn first_match_descends_into_children() {
        let found: Vec<Item> = first_match(r#"{"payload": [{"x":1},{"x":2}]}"#).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn first_match_skips_non_matching_structures() {
        let item: Item = first_match(r#"{"y": true} then {"x": 7} end"#).unwrap();
        assert_eq!(item.x, 7);
    }
}
