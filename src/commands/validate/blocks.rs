//! Regex-based block location. No DOM is built: a block is the first element whose
//! `id` attribute equals the requested identifier, and its content runs to the first
//! matching closing tag after it.

use std::sync::LazyLock;

use regex::Regex;

use crate::contract::{BlockKind, BlockSpec};

static ATTRIBUTE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#).expect("valid attribute value regex")
});

static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?P<name>[a-z][a-z0-9-]*)(?P<attrs>\s[^>]*)?>").expect("valid opening tag regex")
});

static ID_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'>]+))"#)
        .expect("valid id attribute regex")
});

/// True when `id` appears as a quoted attribute value anywhere in the document.
/// This is a presence check only; the attribute need not sit on a well-formed element.
pub fn block_is_declared(document: &str, id: &str) -> bool {
    ATTRIBUTE_VALUE.captures_iter(document).any(|captures| {
        captures
            .name("dq")
            .or_else(|| captures.name("sq"))
            .is_some_and(|value| value.as_str() == id)
    })
}

/// Returns the trimmed inner text of the first element declaring `spec.id`, or `None`
/// when no such element exists or it is never closed.
pub fn extract_block(document: &str, spec: &BlockSpec) -> Option<String> {
    for captures in OPENING_TAG.captures_iter(document) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        let Some(name) = captures.name("name").map(|m| m.as_str()) else {
            continue;
        };
        let attrs = captures.name("attrs").map(|m| m.as_str()).unwrap_or_default();

        if !tag_kind_matches(name, spec.kind) || element_id(attrs) != Some(spec.id) {
            continue;
        }

        let body = &document[tag.end()..];
        let close = find_closing_tag(body, name)?;
        return Some(body[..close].trim().to_string());
    }

    None
}

fn tag_kind_matches(name: &str, kind: BlockKind) -> bool {
    let is_script = name.eq_ignore_ascii_case("script");
    match kind {
        BlockKind::Script => is_script,
        BlockKind::Container => !is_script,
    }
}

fn element_id(attrs: &str) -> Option<&str> {
    let captures = ID_ATTRIBUTE.captures(attrs)?;
    captures
        .name("dq")
        .or_else(|| captures.name("sq"))
        .or_else(|| captures.name("bare"))
        .map(|m| m.as_str())
}

/// Byte offset of the first `</name` (ASCII case-insensitive) that is followed by
/// whitespace or `>`.
fn find_closing_tag(body: &str, name: &str) -> Option<usize> {
    let haystack = body.to_ascii_lowercase();
    let needle = format!("</{}", name.to_ascii_lowercase());

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&needle) {
        let start = from + offset;
        let after = start + needle.len();
        match haystack.as_bytes().get(after) {
            Some(b'>') => return Some(start),
            Some(byte) if byte.is_ascii_whitespace() => return Some(start),
            _ => from = after,
        }
    }

    None
}
