use super::{
    markers::{CONTENT_SLOT, UNITS_SLOT},
    recognize::Marker,
};

/// Wraps already-transformed text in the template of the marker's kind.
///
/// The text is embedded as is: no escaping, no trimming.
pub fn render(marker: &Marker, text: &str) -> String {
    let template = marker.kind.def().template;
    let template = match &marker.units {
        Some(units) => template.replace(UNITS_SLOT, units),
        None => template.to_string(),
    };

    match template.split_once(CONTENT_SLOT) {
        Some((head, tail)) => {
            let mut out = String::with_capacity(head.len() + text.len() + tail.len());
            out.push_str(head);
            out.push_str(text);
            out.push_str(tail);
            out
        }
        None => template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{MarkerRecognizer, ParagraphKind};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn marker(kind: ParagraphKind) -> Marker {
        Marker {
            kind,
            prefix_len: 0,
            units: None,
        }
    }

    #[rstest]
    #[case(ParagraphKind::Continuation, "<p>x</p>")]
    #[case(ParagraphKind::Indent, r#"<p class="a2">x</p>"#)]
    #[case(ParagraphKind::RightAligned, r#"<p class="a2 r">x</p>"#)]
    #[case(ParagraphKind::ChapterHeader, "<h2>x</h2>")]
    #[case(ParagraphKind::IndentQuote, r#"<p class="cyt a2">x</p>"#)]
    #[case(ParagraphKind::RightAlignedQuote, r#"<p class="cyt r">x</p>"#)]
    fn wraps_in_kind_template(#[case] kind: ParagraphKind, #[case] expected: &str) {
        assert_eq!(render(&marker(kind), "x"), expected);
    }

    #[test]
    fn top_indent_fills_units() {
        let m = MarkerRecognizer.recognize("$t12>$>Low").unwrap();
        assert_eq!(render(&m, "Low"), r#"<p class="t12 a2">Low</p>"#);
    }

    #[test]
    fn text_is_embedded_unaltered() {
        let text = "  {content} {units} <i>x</i>&nbsp;€ ";
        let out = render(&marker(ParagraphKind::ChapterHeader), text);
        assert_eq!(out, format!("<h2>{text}</h2>"));
    }

    #[test]
    fn empty_text_renders_empty_element() {
        assert_eq!(render(&marker(ParagraphKind::Indent), ""), r#"<p class="a2"></p>"#);
    }
}
