pub mod error;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::FormatError;
pub use io::{DocumentTemplate, IoError};
pub use models::{Book, Page, Paragraph};
pub use parsing::{MARKER_TABLE, Marker, MarkerDef, MarkerRecognizer, ParagraphKind, PrefixLen};
