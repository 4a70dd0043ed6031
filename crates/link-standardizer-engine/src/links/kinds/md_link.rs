/// Markdown link delimiters: `[title](destination)`.
pub struct MdLink;

impl MdLink {
    /// Leading marker for images and transclusions.
    pub const EMBED: &'static str = "!";
    pub const TITLE_OPEN: u8 = b'[';
    pub const TITLE_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';

    /// Returns the embed marker for `embedded`, or the empty string.
    pub fn marker(embedded: bool) -> &'static str {
        if embedded { Self::EMBED } else { "" }
    }
}
