use super::{
    classify::classify,
    dialect::LinkDialect,
    encoding::{normalize_encoding, percent_decode, percent_encode},
    kinds::{MdLink, WikiLink},
    split::{split_internal_link, split_wikilink, title_is_wikilink},
};

/// Appends a markdown destination to a wikilink: `[[MD File]]` becomes
/// `[[MD File]](MD%20File.md)`.
///
/// A name without any `.` is taken to be another note and gets `.md`
/// appended. The filename is percent-encoded exactly once, so feeding the
/// output back in is not supported (it is no longer a wikilink anyway).
/// Returns `None` unless `wikilink` classifies as [`LinkDialect::WikiLink`].
pub fn wikilink_to_mdlink(wikilink: &str) -> Option<String> {
    if classify(wikilink) != LinkDialect::WikiLink {
        return None;
    }
    let fields = split_wikilink(wikilink)?;

    let mut filename = fields.name;
    if !filename.contains('.') {
        filename.push_str(WikiLink::NOTE_EXTENSION);
    }

    Some(format!(
        "{wikilink}{}{}{}",
        MdLink::DEST_OPEN as char,
        percent_encode(&filename),
        MdLink::DEST_CLOSE as char
    ))
}

/// Upgrades an internal link to the dual-compatible form:
/// `[A note](some file.md)` becomes `[[some file.md]](some%20file.md)`.
///
/// The human-authored title is replaced by the decoded filename wrapped in
/// brackets, and the filename is normalised to exactly one layer of
/// percent-encoding. The path is kept verbatim. Already-standardized links
/// and every other dialect return `None`, as do filenames that decode to a
/// line break (the title could no longer be read back as a link).
pub fn internal_link_to_standardized(text: &str) -> Option<String> {
    if classify(text) != LinkDialect::InternalLink {
        return None;
    }
    let mut fields = split_internal_link(text)?;

    if !title_is_wikilink(&fields.title) {
        let decoded = percent_decode(&fields.filename);
        if decoded.contains(['\n', '\r']) {
            return None;
        }
        fields.title = format!("[{decoded}]");
    }
    fields.filename = normalize_encoding(&fields.filename);

    Some(fields.to_markdown())
}

/// Converts any recognised link to its canonical form.
///
/// | dialect | result |
/// |---|---|
/// | `StandardizedInternalLink`, `UrlLink`, `AnchorLink` | input unchanged |
/// | `InternalLink` | [`internal_link_to_standardized`] |
/// | `WikiLink` | [`wikilink_to_mdlink`], then standardized again |
/// | `NotALink` | `None` |
pub fn anylink_to_standardized_link(text: &str) -> Option<String> {
    match classify(text) {
        LinkDialect::StandardizedInternalLink | LinkDialect::UrlLink | LinkDialect::AnchorLink => {
            Some(text.to_string())
        }
        LinkDialect::InternalLink => internal_link_to_standardized(text),
        LinkDialect::WikiLink => {
            let mdlink = wikilink_to_mdlink(text)?;
            anylink_to_standardized_link(&mdlink)
        }
        LinkDialect::NotALink => None,
    }
}
