use crate::FormatError;

use super::Paragraph;

/// Prefix of every page descriptor line, e.g. `Str42`.
pub const PAGE_SENTINEL: &str = "Str";
/// Maximum digits in a page number.
pub const MAX_PAGE_DIGITS: usize = 4;

/// A numbered page and its paragraphs, in manuscript order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: u16,
    paragraphs: Vec<Paragraph>,
}

impl Page {
    /// Builds a page from its raw block: a descriptor line followed by one
    /// line per paragraph. A block with only a descriptor is an empty page.
    pub fn new(raw_text: &str) -> Result<Self, FormatError> {
        let mut lines = raw_text.split('\n');
        let descriptor = lines.next().unwrap_or_default();
        let number = parse_page_number(descriptor)?;
        let paragraphs = lines.map(Paragraph::new).collect::<Result<Vec<_>, _>>()?;

        log::debug!("page {number}: {} paragraphs", paragraphs.len());
        Ok(Self { number, paragraphs })
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Rendered paragraphs joined by newlines
    pub fn dump(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Validates a descriptor line and extracts its number.
///
/// The sentinel is checked before the digits so the error names the first
/// check that failed.
pub fn parse_page_number(descriptor: &str) -> Result<u16, FormatError> {
    let Some(digits) = descriptor.strip_prefix(PAGE_SENTINEL) else {
        return Err(FormatError::NotPageDescription(descriptor.to_string()));
    };
    if !is_page_digits(digits) {
        return Err(FormatError::NotPageNumber(digits.to_string()));
    }
    digits
        .parse()
        .map_err(|_| FormatError::NotPageNumber(digits.to_string()))
}

/// Whether `s` is 1 to [`MAX_PAGE_DIGITS`] ASCII digits.
pub(crate) fn is_page_digits(s: &str) -> bool {
    (1..=MAX_PAGE_DIGITS).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ParagraphKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn builds_numbered_page_with_paragraphs() {
        let page = Page::new("Str42\nHello world.\n$>Indented line.").unwrap();

        assert_eq!(page.number(), 42);
        let kinds: Vec<_> = page.paragraphs().iter().map(Paragraph::kind).collect();
        assert_eq!(kinds, vec![ParagraphKind::Continuation, ParagraphKind::Indent]);
        assert_eq!(
            page.dump(),
            "<p>Hello world.</p>\n<p class=\"a2\">Indented line.</p>"
        );
    }

    #[test]
    fn descriptor_only_is_an_empty_page() {
        let page = Page::new("Str7").unwrap();
        assert_eq!(page.number(), 7);
        assert!(page.paragraphs().is_empty());
        assert_eq!(page.dump(), "");
    }

    #[rstest]
    #[case("Str0", 0)]
    #[case("Str007", 7)]
    #[case("Str500", 500)]
    #[case("Str9999", 9999)]
    fn accepts_one_to_four_digits(#[case] descriptor: &str, #[case] expected: u16) {
        assert_eq!(parse_page_number(descriptor).unwrap(), expected);
    }

    #[test]
    fn non_numeric_suffix_is_not_a_page_number() {
        let err = Page::new("StrXYZ\nText").unwrap_err();
        assert_eq!(err, FormatError::NotPageNumber("XYZ".to_string()));
        assert_eq!(err.to_string(), "XYZ is not a page number");
    }

    #[rstest]
    #[case("Str")]
    #[case("Str12345")]
    #[case("Str-1")]
    #[case("Str 12")]
    #[case("Str١٢")]
    fn rejects_bad_page_numbers(#[case] descriptor: &str) {
        assert!(matches!(
            parse_page_number(descriptor),
            Err(FormatError::NotPageNumber(_))
        ));
    }

    #[test]
    fn missing_sentinel_is_not_a_page_description() {
        let err = Page::new("Hello\nText").unwrap_err();
        assert_eq!(err, FormatError::NotPageDescription("Hello".to_string()));
        assert_eq!(err.to_string(), "Hello is not a page description");
    }

    #[test]
    fn bad_paragraph_fails_the_page() {
        let err = Page::new("Str3\nfine\n$?>broken").unwrap_err();
        assert_eq!(err, FormatError::UnrecognizedMarker("$?>broken".to_string()));
    }
}
