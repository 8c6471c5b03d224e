use crate::FormatError;

use super::{
    Page,
    page::{PAGE_SENTINEL, is_page_digits},
};

/// A whole manuscript, split into pages at every page marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    /// Partitions the manuscript into page blocks and builds every page.
    ///
    /// The first malformed page aborts the whole book. Text that is not blank
    /// but holds no page marker at all is rejected.
    pub fn new(raw_text: &str) -> Result<Self, FormatError> {
        let blocks = page_blocks(raw_text);
        if blocks.is_empty() && !raw_text.trim().is_empty() {
            return Err(FormatError::NoPageMarkers);
        }
        let pages = blocks
            .into_iter()
            .map(Page::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

/// Whether a whole line is a page marker token such as `Str42`.
pub fn is_page_marker(line: &str) -> bool {
    line.strip_prefix(PAGE_SENTINEL).is_some_and(is_page_digits)
}

/// Splits `raw_text` into one slice per page.
///
/// Each block runs from a marker line to the next marker line (or end of
/// input), minus the newline directly before that boundary. Text before the
/// first marker belongs to no page.
pub fn page_blocks(raw_text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in raw_text.split('\n') {
        if is_page_marker(line) {
            starts.push(offset);
        }
        offset += line.len() + 1;
    }

    if let Some(&first) = starts.first()
        && !raw_text[..first].trim().is_empty()
    {
        log::warn!("ignoring {first} bytes before the first page marker");
    }

    let ends = starts.iter().skip(1).copied().chain([raw_text.len()]);
    starts
        .iter()
        .zip(ends)
        .map(|(&begin, end)| {
            let block = &raw_text[begin..end];
            block.strip_suffix('\n').unwrap_or(block)
        })
        .collect()
}
