use super::{
    inline::{expand_italics, join_widows},
    markers::ParagraphKind,
    recognize::Marker,
};

/// Strips the recognized marker and applies the inline rewrites, in order:
/// marker stripping, italic expansion, widow joining.
pub fn transform(line: &str, marker: &Marker) -> String {
    let text = strip_marker(line, marker);
    let text = expand_italics(text);
    join_widows(&text)
}

/// Continuation lines carry no removable marker; every other kind drops
/// exactly its prefix and keeps the remainder verbatim.
pub fn strip_marker<'a>(line: &'a str, marker: &Marker) -> &'a str {
    if marker.kind == ParagraphKind::Continuation {
        return line;
    }
    line.get(marker.prefix_len..).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::MarkerRecognizer;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(line: &str) -> String {
        let marker = MarkerRecognizer.recognize(line).unwrap();
        transform(line, &marker)
    }

    #[rstest]
    #[case("Hello world.", "Hello world.")]
    #[case("$>Indented line.", "Indented line.")]
    #[case("$> leading space kept", " leading space kept")]
    #[case("$r>Right.", "Right.")]
    #[case("$h2>Chapter", "Chapter")]
    #[case("$cyt>$>Quote", "Quote")]
    #[case("$cyt>$r>Quote", "Quote")]
    #[case("$t3>$>Low", "Low")]
    #[case("$>", "")]
    fn strips_exactly_the_marker(#[case] line: &str, #[case] expected: &str) {
        let marker = MarkerRecognizer.recognize(line).unwrap();
        assert_eq!(strip_marker(line, &marker), expected);
    }

    #[test]
    fn strip_removes_prefix_len_chars() {
        for line in ["$>abc", "$r>abc", "$h2>abc", "$cyt>$>abc", "$cyt>$r>abc"] {
            let marker = MarkerRecognizer.recognize(line).unwrap();
            let stripped = strip_marker(line, &marker);
            assert_eq!(line.chars().count() - stripped.chars().count(), marker.prefix_len);
            assert_eq!(stripped, "abc");
        }
    }

    #[test]
    fn italics_on_continuation() {
        assert_eq!(run("€bright€ day"), "<i>bright</i> day");
    }

    #[test]
    fn widow_join_on_continuation() {
        assert_eq!(run("a cat sat"), "a&nbsp;cat sat");
    }

    #[test]
    fn rewrites_apply_after_stripping() {
        assert_eq!(run("$>i €on€ w domu"), "i&nbsp;<i>on</i> w&nbsp;domu");
        assert_eq!(run("$h2>€A€ b"), "<i>A</i> b");
    }

    #[test]
    fn marker_text_is_never_rewritten() {
        // The stripped `$>` is gone before widow joining sees the text.
        assert_eq!(run("$>a b"), "a&nbsp;b");
    }
}
