/// Malformed manuscript input.
///
/// Every variant is fatal to the unit being built: a bad paragraph fails its
/// page, a bad page fails its book.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("paragraph contains a line break: {0:?}")]
    MultilineParagraph(String),
    #[error("{0} is not a page description")]
    NotPageDescription(String),
    #[error("{0} is not a page number")]
    NotPageNumber(String),
    #[error("no paragraph marker matches line: {0:?}")]
    UnrecognizedMarker(String),
    #[error("text contains no page marker line")]
    NoPageMarkers,
}
