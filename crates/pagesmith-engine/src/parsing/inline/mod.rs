//! # Inline Rewrites
//!
//! Cursor-based text rewrites applied to a paragraph after its marker has been
//! stripped.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for char-by-char scanning with byte positions
//! - **`italic`**: `€text€` → `<i>text</i>`
//! - **`widow`**: joins single-letter words to the next word with `&nbsp;`
//!
//! ## Ordering
//!
//! Italics run before widow joining. Neither rewrite matches its own output,
//! so each is idempotent.

pub mod cursor;
pub mod italic;
pub mod widow;

pub use italic::expand_italics;
pub use widow::join_widows;
