//! Structural splitters: each one either decomposes a whole fragment into
//! its record or returns `None` when the fragment is not that shape.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::types::{InternalLinkFields, MdLinkFields, UrlLinkFields, WikiLinkFields};

fn internal_link_regex() -> &'static Regex {
    static INTERNAL_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    INTERNAL_LINK_REGEX.get_or_init(|| {
        Regex::new(
            r"(?x)
            ^
            (!)?            # 1 embedded marker
            \[(.*)\]        # 2 title, may itself contain brackets
            \(
            (.*/)?          # 3 path, slash-terminated
            (.*)            # 4 filename
            \)
            $",
        )
        .expect("Invalid internal link regex")
    })
}

fn wikilink_regex() -> &'static Regex {
    static WIKILINK_REGEX: OnceLock<Regex> = OnceLock::new();
    WIKILINK_REGEX
        .get_or_init(|| Regex::new(r"^(!)?\[\[(.*)\]\]$").expect("Invalid wikilink regex"))
}

/// Splits `[title](path/filename)` (optionally `!`-prefixed) into its parts.
///
/// Any bracketed title followed by a parenthesised destination matches,
/// including links with a URL destination; use [`split_md_link`] to tell
/// those apart.
pub fn split_internal_link(text: &str) -> Option<InternalLinkFields> {
    let caps = internal_link_regex().captures(text)?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();

    Some(InternalLinkFields {
        embedded: caps.get(1).is_some(),
        title: group(2),
        path: group(3),
        filename: group(4),
    })
}

/// Splits a markdown link, folding the destination into a URL when it
/// carries a URI scheme.
pub fn split_md_link(text: &str) -> Option<MdLinkFields> {
    let fields = split_internal_link(text)?;
    let destination = fields.destination();

    if has_uri_scheme(&destination) {
        Some(MdLinkFields::Url(UrlLinkFields {
            embedded: fields.embedded,
            title: fields.title,
            url: destination,
        }))
    } else {
        Some(MdLinkFields::Internal(fields))
    }
}

/// Splits `[[name]]` (optionally `!`-prefixed) into its name.
///
/// The whole fragment must be the wikilink; a trailing `(...)` makes it a
/// markdown link instead.
pub fn split_wikilink(text: &str) -> Option<WikiLinkFields> {
    let caps = wikilink_regex().captures(text)?;

    Some(WikiLinkFields {
        embedded: caps.get(1).is_some(),
        name: caps.get(2).map_or("", |m| m.as_str()).to_string(),
    })
}

/// True when `title` reads as a wikilink once wrapped in one more pair of
/// brackets, i.e. the title is `[name]` and the link renders as `[[name]](...)`.
pub fn title_is_wikilink(title: &str) -> bool {
    split_wikilink(&format!("[{title}]")).is_some()
}

/// True when `destination` starts with a URI scheme (`https:`, `mailto:`...).
///
/// Any parse failure other than "relative URL" means a scheme was found and
/// the rest of the URL was malformed, which still makes it external.
pub fn has_uri_scheme(destination: &str) -> bool {
    match Url::parse(destination) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => false,
        Err(_) => true,
    }
}
