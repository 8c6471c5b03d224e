//! # Marker Table
//!
//! The ordered catalog of paragraph kinds. Records here are plain data: the
//! recognizer and renderer are the only code that interprets them.
//!
//! Table order is match priority. The catch-all [`ParagraphKind::Continuation`]
//! comes first because it can only match lines that do not start with the
//! `$` sentinel, which every other marker requires.

/// Closed set of paragraph formatting roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    Continuation,
    Indent,
    RightAligned,
    ChapterHeader,
    IndentQuote,
    RightAlignedQuote,
    TopIndented,
}

/// How many leading characters a kind inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixLen {
    /// Exactly this many characters must fully match the pattern.
    Fixed(usize),
    /// The pattern is matched at the start of the line and defines its own length.
    Variable,
}

/// One row of the marker table.
#[derive(Debug, Clone, Copy)]
pub struct MarkerDef {
    pub kind: ParagraphKind,
    pub prefix_len: PrefixLen,
    /// Regex source; the recognizer anchors it on both ends.
    pub pattern: &'static str,
    /// Output template with a single `{content}` slot. Variable-length markers
    /// may also carry a `{units}` slot filled from the marker's digits.
    pub template: &'static str,
}

/// Slot in [`MarkerDef::template`] replaced by the paragraph text.
pub const CONTENT_SLOT: &str = "{content}";
/// Slot in [`MarkerDef::template`] replaced by the top-indent digits.
pub const UNITS_SLOT: &str = "{units}";

pub static MARKER_TABLE: [MarkerDef; 7] = [
    MarkerDef {
        kind: ParagraphKind::Continuation,
        prefix_len: PrefixLen::Fixed(1),
        pattern: r"[^$]",
        template: "<p>{content}</p>",
    },
    MarkerDef {
        kind: ParagraphKind::Indent,
        prefix_len: PrefixLen::Fixed(2),
        pattern: r"\$>",
        template: r#"<p class="a2">{content}</p>"#,
    },
    MarkerDef {
        kind: ParagraphKind::RightAligned,
        prefix_len: PrefixLen::Fixed(3),
        pattern: r"\$r>",
        template: r#"<p class="a2 r">{content}</p>"#,
    },
    MarkerDef {
        kind: ParagraphKind::ChapterHeader,
        prefix_len: PrefixLen::Fixed(4),
        pattern: r"\$h2>",
        template: "<h2>{content}</h2>",
    },
    MarkerDef {
        kind: ParagraphKind::IndentQuote,
        prefix_len: PrefixLen::Fixed(7),
        pattern: r"\$cyt>\$>",
        template: r#"<p class="cyt a2">{content}</p>"#,
    },
    MarkerDef {
        kind: ParagraphKind::RightAlignedQuote,
        prefix_len: PrefixLen::Fixed(8),
        pattern: r"\$cyt>\$r>",
        template: r#"<p class="cyt r">{content}</p>"#,
    },
    MarkerDef {
        kind: ParagraphKind::TopIndented,
        prefix_len: PrefixLen::Variable,
        pattern: r"\$t([0-9]+)>\$>",
        template: r#"<p class="t{units} a2">{content}</p>"#,
    },
];

impl ParagraphKind {
    /// Looks up this kind's row in [`MARKER_TABLE`].
    ///
    /// Variants are declared in table order, so the discriminant is the row index.
    pub fn def(self) -> &'static MarkerDef {
        &MARKER_TABLE[self as usize]
    }
}
