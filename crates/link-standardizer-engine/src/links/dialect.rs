use std::fmt;

use serde::Serialize;

/// The link syntax a text fragment is written in.
///
/// Exactly one variant applies to any string; see [`classify`](super::classify)
/// for the order in which overlapping shapes are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkDialect {
    /// `[title](scheme://...)`, optionally embedded with `!`.
    UrlLink,
    /// `[title](path/filename)` pointing at a local file.
    InternalLink,
    /// An internal link whose title is itself a wikilink: `[[name]](file)`.
    StandardizedInternalLink,
    /// `[[name]]` with nothing following.
    WikiLink,
    /// An HTML `<a>` element.
    AnchorLink,
    NotALink,
}

impl LinkDialect {
    pub fn is_link(self) -> bool {
        !matches!(self, LinkDialect::NotALink)
    }
}

impl fmt::Display for LinkDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkDialect::UrlLink => "url link",
            LinkDialect::InternalLink => "internal link",
            LinkDialect::StandardizedInternalLink => "standardized internal link",
            LinkDialect::WikiLink => "wikilink",
            LinkDialect::AnchorLink => "anchor link",
            LinkDialect::NotALink => "not a link",
        };
        f.write_str(name)
    }
}
