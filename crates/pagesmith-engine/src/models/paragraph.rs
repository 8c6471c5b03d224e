use crate::FormatError;
use crate::parsing::{Marker, MarkerRecognizer, ParagraphKind, render, transform};

/// One manuscript line, classified and transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    marker: Marker,
    content: String,
}

impl Paragraph {
    /// Builds a paragraph from a single raw line.
    ///
    /// Fails if the line contains a line break or carries no known marker.
    pub fn new(raw_text: &str) -> Result<Self, FormatError> {
        if raw_text.contains('\n') {
            return Err(FormatError::MultilineParagraph(raw_text.to_string()));
        }
        let marker = MarkerRecognizer.recognize(raw_text)?;
        let content = transform(raw_text, &marker);
        Ok(Self { marker, content })
    }

    pub fn kind(&self) -> ParagraphKind {
        self.marker.kind
    }

    /// The marker that classified this paragraph
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Transformed text, before template substitution
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The HTML fragment for this paragraph
    pub fn render(&self) -> String {
        render(&self.marker, &self.content)
    }
}
