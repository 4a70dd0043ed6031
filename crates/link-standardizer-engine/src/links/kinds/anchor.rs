pub struct Anchor;

impl Anchor {
    /// Start of an `<a>` start tag, matched case-insensitively.
    pub const OPEN_PREFIX: &'static [u8; 2] = b"<a";
}
