use std::sync::LazyLock;

use regex::Regex;

use super::IoError;

/// The template shipped with the engine, used when none is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../resources/template.xhtml");

/// `$name`, `${name}`, `$$`, or a `$` that starts none of these.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .expect("placeholder regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    PageNumber,
    Content,
}

/// A per-page document template with `page_number` and `content` slots.
///
/// Placeholders are written `$name` or `${name}`; `$$` is a literal `$`.
/// Any other `$` use is rejected when the template is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    segments: Vec<Segment>,
}

impl DocumentTemplate {
    pub fn parse(source: &str) -> Result<Self, IoError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            literal.push_str(&source[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                literal.push('$');
                continue;
            }
            let name = caps
                .name("named")
                .or_else(|| caps.name("braced"))
                .map(|m| m.as_str());
            let segment = match name {
                Some("page_number") => Segment::PageNumber,
                Some("content") => Segment::Content,
                Some(other) => {
                    return Err(IoError::Template(format!("unknown placeholder ${other}")));
                }
                None => {
                    return Err(IoError::Template(format!(
                        "invalid placeholder at byte {}",
                        whole.start()
                    )));
                }
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Substitutes one page into the template.
    pub fn fill(&self, page_number: u16, content: &str) -> String {
        let number = page_number.to_string();
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::PageNumber => number.as_str(),
                Segment::Content => content,
            })
            .collect()
    }
}
