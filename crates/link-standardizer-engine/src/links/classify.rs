use super::{
    anchor::find_anchor,
    dialect::LinkDialect,
    split::{split_md_link, split_wikilink, title_is_wikilink},
    types::MdLinkFields,
};

/// Determines which link dialect `text` is written in.
///
/// The shapes overlap (`[[a]](a.md)` is also a plain markdown link with a
/// bracketed title), so they are tried as an ordered cascade and the first
/// match wins:
///
/// 1. A markdown link: `UrlLink` when the destination has a URI scheme,
///    otherwise `StandardizedInternalLink` when the title is itself a
///    wikilink, otherwise `InternalLink`.
/// 2. A bare `[[name]]`: `WikiLink`.
/// 3. Anything containing an `<a>` element: `AnchorLink`.
/// 4. `NotALink`.
pub fn classify(text: &str) -> LinkDialect {
    let dialect = if let Some(fields) = split_md_link(text) {
        match fields {
            MdLinkFields::Url(_) => LinkDialect::UrlLink,
            MdLinkFields::Internal(f) if title_is_wikilink(&f.title) => {
                LinkDialect::StandardizedInternalLink
            }
            MdLinkFields::Internal(_) => LinkDialect::InternalLink,
        }
    } else if split_wikilink(text).is_some() {
        LinkDialect::WikiLink
    } else if find_anchor(text).is_some() {
        LinkDialect::AnchorLink
    } else {
        LinkDialect::NotALink
    };

    log::trace!("classified {text:?} as {dialect}");
    dialect
}
