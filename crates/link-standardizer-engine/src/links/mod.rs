//! # Link Recognition and Conversion
//!
//! Classifies a single text fragment into one of five link dialects and
//! converts between them.
//!
//! ## Dialects
//!
//! | dialect | shape |
//! |---|---|
//! | `UrlLink` | `[title](https://...)` |
//! | `InternalLink` | `[title](path/file.md)` |
//! | `StandardizedInternalLink` | `[[name]](path/file.md)` |
//! | `WikiLink` | `[[name]]` |
//! | `AnchorLink` | `<a href="...">title</a>` |
//!
//! Any of the markdown shapes may carry a leading `!` embed marker.
//!
//! ## Modules
//!
//! - **`kinds`**: Delimiter constants owned by each dialect
//! - **`split`**: Splitters that decompose a whole fragment or return `None`
//! - **`anchor`**: First-`<a>`-element extraction
//! - **`classify`**: The ordered classification cascade
//! - **`convert`**: Wikilink and internal link upgrades, plus top-level dispatch
//! - **`encoding`**: URI component percent-encoding
//!
//! ## No-match is not an error
//!
//! Text in a foreign dialect is normal when scanning real documents, so
//! every splitter and converter signals a mismatch with `None`.

pub mod anchor;
pub mod classify;
pub mod convert;
pub mod dialect;
pub mod encoding;
pub mod kinds;
pub mod split;
pub mod types;

pub use anchor::split_anchor_link;
pub use classify::classify;
pub use convert::{anylink_to_standardized_link, internal_link_to_standardized, wikilink_to_mdlink};
pub use dialect::LinkDialect;
pub use split::{split_internal_link, split_md_link, split_wikilink};
pub use types::{AnchorLinkFields, InternalLinkFields, MdLinkFields, UrlLinkFields, WikiLinkFields};
