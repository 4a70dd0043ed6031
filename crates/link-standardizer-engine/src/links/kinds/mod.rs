//! # Link Kinds
//!
//! Dialect-specific types that own their syntax delimiters. Parsers and
//! reassembly code refer to these constants; they never hardcode `[[`, `](`
//! or `!` themselves.
//!
//! - **`MdLink`**: `[title](destination)` with the shared `EMBED` marker
//! - **`WikiLink`**: `OPEN = "[["`, `CLOSE = "]]"`
//! - **`Anchor`**: `OPEN_PREFIX = "<a"` for spotting HTML anchors

pub mod anchor;
pub mod md_link;
pub mod wikilink;

pub use anchor::Anchor;
pub use md_link::MdLink;
pub use wikilink::WikiLink;
