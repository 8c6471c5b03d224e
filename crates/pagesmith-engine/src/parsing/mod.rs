//! # Paragraph Pipeline
//!
//! Raw line → [`MarkerRecognizer`] → [`transform`] → [`render`].
//!
//! ## Modules
//!
//! - **`markers`**: the ordered, data-only `MARKER_TABLE`
//! - **`recognize`**: first-match classification of a line against the table
//! - **`transform`**: marker stripping followed by the inline rewrites
//! - **`inline`**: italic expansion and widow joining
//! - **`render`**: template substitution for one paragraph

pub mod inline;
pub mod markers;
pub mod recognize;
pub mod render;
pub mod transform;

pub use markers::{MARKER_TABLE, MarkerDef, ParagraphKind, PrefixLen};
pub use recognize::{Marker, MarkerRecognizer};
pub use render::render;
pub use transform::transform;
