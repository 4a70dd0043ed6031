use serde::Serialize;

use super::kinds::{MdLink, WikiLink};

/// Parts of a markdown link to a local file.
///
/// Fields are raw substrings of the source: nothing is percent-decoded.
/// Absent optional parts are empty strings, never missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalLinkFields {
    /// The fragment began with `!`.
    pub embedded: bool,
    pub title: String,
    /// Empty, or ends with `/`.
    pub path: String,
    pub filename: String,
}

impl InternalLinkFields {
    /// The full destination, `path + filename`.
    pub fn destination(&self) -> String {
        format!("{}{}", self.path, self.filename)
    }

    /// Rebuilds the link text.
    pub fn to_markdown(&self) -> String {
        format!(
            "{}[{}]({}{})",
            MdLink::marker(self.embedded),
            self.title,
            self.path,
            self.filename
        )
    }
}

/// Parts of a markdown link whose destination carries a URI scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlLinkFields {
    pub embedded: bool,
    pub title: String,
    pub url: String,
}

impl UrlLinkFields {
    pub fn to_markdown(&self) -> String {
        format!(
            "{}[{}]({})",
            MdLink::marker(self.embedded),
            self.title,
            self.url
        )
    }
}

/// A markdown link split into its parts, internal or external.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MdLinkFields {
    Internal(InternalLinkFields),
    Url(UrlLinkFields),
}

impl MdLinkFields {
    pub fn embedded(&self) -> bool {
        match self {
            MdLinkFields::Internal(f) => f.embedded,
            MdLinkFields::Url(f) => f.embedded,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MdLinkFields::Internal(f) => &f.title,
            MdLinkFields::Url(f) => &f.title,
        }
    }

    pub fn to_markdown(&self) -> String {
        match self {
            MdLinkFields::Internal(f) => f.to_markdown(),
            MdLinkFields::Url(f) => f.to_markdown(),
        }
    }
}

/// The name between the double brackets of `[[name]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiLinkFields {
    pub embedded: bool,
    pub name: String,
}

impl WikiLinkFields {
    pub fn to_markdown(&self) -> String {
        format!(
            "{}{}{}{}",
            MdLink::marker(self.embedded),
            WikiLink::OPEN,
            self.name,
            WikiLink::CLOSE
        )
    }
}

/// Text and attributes of a single HTML `<a>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorLinkFields {
    pub title: String,
    /// The `href` attribute, or empty when absent.
    pub url: String,
    /// Space-joined `class` values, or empty when absent.
    pub css_class: String,
}
