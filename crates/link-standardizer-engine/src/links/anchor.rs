//! Single-element HTML anchor extraction.
//!
//! Only the first `<a>` element in a fragment is examined; there is no
//! document tree. Attribute values and text are entity-decoded.

use std::sync::OnceLock;

use regex::Regex;

use super::types::AnchorLinkFields;

fn open_tag_regex() -> &'static Regex {
    static OPEN_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    OPEN_TAG_REGEX
        .get_or_init(|| Regex::new(r"(?i)<a(\s[^>]*)?>").expect("Invalid anchor open tag regex"))
}

fn close_tag_regex() -> &'static Regex {
    static CLOSE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSE_TAG_REGEX
        .get_or_init(|| Regex::new(r"(?i)</a\s*>").expect("Invalid anchor close tag regex"))
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(r#"([^\s=/>"']+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+)))?"#)
            .expect("Invalid attribute regex")
    })
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Byte range of the first anchor element in `text`: from its start tag to
/// the end of its closing tag, or just the start tag when unclosed.
pub fn find_anchor(text: &str) -> Option<std::ops::Range<usize>> {
    let open = open_tag_regex().find(text)?;
    let end = close_tag_regex()
        .find(&text[open.end()..])
        .map_or(open.end(), |close| open.end() + close.end());
    Some(open.start()..end)
}

/// Extracts title, `href` and `class` from the first `<a>` element.
///
/// Returns `None` when `text` contains no anchor element.
pub fn split_anchor_link(text: &str) -> Option<AnchorLinkFields> {
    let open = open_tag_regex().captures(text)?;
    let whole = open.get(0)?;
    let attributes = open.get(1).map_or("", |m| m.as_str());

    let rest = &text[whole.end()..];
    let inner = close_tag_regex()
        .find(rest)
        .map_or(rest, |close| &rest[..close.start()]);
    let stripped = tag_regex().replace_all(inner, "");

    let url = attribute(attributes, "href").unwrap_or_default();
    let css_class = attribute(attributes, "class")
        .map(|class| class.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Some(AnchorLinkFields {
        title: html_escape::decode_html_entities(&stripped).into_owned(),
        url,
        css_class,
    })
}

/// Looks up attribute `name` (case-insensitive) in a start tag's attribute
/// text. The first occurrence wins; a bare attribute has an empty value.
fn attribute(attributes: &str, name: &str) -> Option<String> {
    attribute_regex()
        .captures_iter(attributes)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            html_escape::decode_html_entities(value).into_owned()
        })
}
