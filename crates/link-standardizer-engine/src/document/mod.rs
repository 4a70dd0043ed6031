//! # Document Rewriting
//!
//! Finds every link fragment in a markdown document and replaces it with
//! its standardized form, leaving all other bytes untouched.
//!
//! Fenced code blocks and inline code spans are raw zones: links inside
//! them are examples, not references, and are never rewritten.

pub mod cursor;
pub mod fence;
pub mod scanner;
pub mod span;

use serde::Serialize;

use crate::links::{LinkDialect, anylink_to_standardized_link, classify, split_internal_link};
use fence::{CodeFence, Fence};
pub use span::Span;

/// A link fragment located in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundLink {
    pub span: Span,
    pub dialect: LinkDialect,
}

/// One link that standardization changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkChange {
    /// Location in the original document.
    pub span: Span,
    pub dialect: LinkDialect,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizedDocument {
    pub content: String,
    pub changes: Vec<LinkChange>,
}

impl StandardizedDocument {
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Locates every link fragment outside raw zones, in source order.
pub fn find_links(text: &str) -> Vec<FoundLink> {
    let mut out = vec![];
    let mut fence: Option<Fence> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let base = offset;
        offset += line.len();

        if let Some(open) = fence {
            if CodeFence::closes(open, line) {
                fence = None;
            }
            continue;
        }
        if let Some(opened) = CodeFence::sig(line) {
            fence = Some(opened);
            continue;
        }

        let content = line.trim_end_matches(['\r', '\n']);
        for candidate in scanner::scan_line(base, content) {
            let span = candidate.span();
            let dialect = classify(span.slice(text));
            if dialect.is_link() {
                out.push(FoundLink { span, dialect });
            }
        }
    }

    out
}

/// Rewrites every link in `text` into its standardized form.
///
/// Links that are already canonical (or are URL and anchor links) produce
/// no change; a document without changes comes back byte-identical.
/// Internal links whose destination carries a `#fragment` are left as
/// written, since the fragment would otherwise be encoded into the filename.
pub fn standardize_document(text: &str) -> StandardizedDocument {
    let mut content = String::with_capacity(text.len());
    let mut changes = vec![];
    let mut copied_to = 0;

    for link in find_links(text) {
        let before = link.span.slice(text);
        if link.dialect == LinkDialect::InternalLink && has_fragment(before) {
            log::debug!("keeping fragment link {before}");
            continue;
        }
        let Some(after) = anylink_to_standardized_link(before) else {
            continue;
        };
        if after == before {
            continue;
        }

        log::debug!("{}: {before} -> {after}", link.dialect);
        content.push_str(&text[copied_to..link.span.start]);
        content.push_str(&after);
        copied_to = link.span.end;

        changes.push(LinkChange {
            span: link.span,
            dialect: link.dialect,
            before: before.to_string(),
            after,
        });
    }
    content.push_str(&text[copied_to..]);

    StandardizedDocument { content, changes }
}

fn has_fragment(link: &str) -> bool {
    split_internal_link(link).is_some_and(|fields| fields.destination().contains('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_links_in_place() {
        let doc = standardize_document("Read [A note](some file.md) and [[Other]].\n");
        assert_eq!(
            doc.content,
            "Read [[some file.md]](some%20file.md) and [[Other]](Other.md).\n"
        );
        assert_eq!(doc.changes.len(), 2);
        assert_eq!(doc.changes[0].dialect, LinkDialect::InternalLink);
        assert_eq!(doc.changes[0].span, Span { start: 5, end: 27 });
        assert_eq!(doc.changes[1].dialect, LinkDialect::WikiLink);
        assert_eq!(doc.changes[1].before, "[[Other]]");
    }

    #[test]
    fn canonical_document_is_unchanged() {
        let text = "[[Note]](Note.md)\r\n[site](https://example.com)\r\n<a href='x'>x</a>\r\n";
        let doc = standardize_document(text);
        assert!(!doc.is_changed());
        assert_eq!(doc.content, text);
    }

    #[test]
    fn fenced_code_is_untouched() {
        let text = "```\n[[inside]]\n~~~\n[[still inside]]\n```\n[[outside]]";
        let doc = standardize_document(text);
        assert_eq!(
            doc.content,
            "```\n[[inside]]\n~~~\n[[still inside]]\n```\n[[outside]](outside.md)"
        );
    }

    #[test]
    fn nested_fence_is_untouched() {
        let text = "````\n```markdown\n[[Example]]\n```\n````\n[[After]]\n";
        assert_eq!(
            standardize_document(text).content,
            "````\n```markdown\n[[Example]]\n```\n````\n[[After]](After.md)\n"
        );
    }

    #[test]
    fn fence_with_info_string_does_not_close() {
        let text = "```\n```rust\n[[inside]]\n```\n[[outside]]\n";
        assert_eq!(
            standardize_document(text).content,
            "```\n```rust\n[[inside]]\n```\n[[outside]](outside.md)\n"
        );
    }

    #[test]
    fn line_break_in_filename_is_left_alone() {
        let text = "see [t](a%0Ab.md) and [u](c%0Dd.md) here\n";
        let doc = standardize_document(text);
        assert!(!doc.is_changed());
        assert_eq!(doc.content, text);
    }

    #[test]
    fn unclosed_anchor_does_not_hide_later_links() {
        let doc = standardize_document("<a name=\"top\"> see [[Note]]\n");
        assert_eq!(doc.content, "<a name=\"top\"> see [[Note]](Note.md)\n");
    }

    #[test]
    fn fragment_links_are_kept() {
        let text = "[see](#intro) and [x](note.md#sec) and [y](y.md)\n";
        let doc = standardize_document(text);
        assert_eq!(
            doc.content,
            "[see](#intro) and [x](note.md#sec) and [[y.md]](y.md)\n"
        );
        assert_eq!(doc.changes.len(), 1);
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let text = "~~~\n[[inside]]\n";
        assert_eq!(standardize_document(text).content, text);
    }

    #[test]
    fn find_links_reports_dialects() {
        let found = find_links("[[a]] [b](c.md) [d](https://e.f) [[g]](g.md)");
        let dialects: Vec<_> = found.iter().map(|l| l.dialect).collect();
        assert_eq!(
            dialects,
            vec![
                LinkDialect::WikiLink,
                LinkDialect::InternalLink,
                LinkDialect::UrlLink,
                LinkDialect::StandardizedInternalLink,
            ]
        );
    }

    #[test]
    fn standardizing_twice_is_stable() {
        let text = "- [[Daily Log]]\n- ![photo](img/beach day.jpg)\n- [x](https://x.y)\n";
        let once = standardize_document(text);
        let twice = standardize_document(&once.content);
        assert!(once.is_changed());
        assert!(!twice.is_changed());
        assert_eq!(twice.content, once.content);
    }
}
