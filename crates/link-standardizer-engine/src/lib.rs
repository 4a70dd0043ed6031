pub mod document;
pub mod io;
pub mod links;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{FoundLink, LinkChange, Span, StandardizedDocument, find_links, standardize_document};
pub use io::*;
pub use links::*;
