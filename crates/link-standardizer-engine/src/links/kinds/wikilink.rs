pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    /// Extension assumed for wikilink targets that have none.
    pub const NOTE_EXTENSION: &'static str = ".md";
}
