use std::sync::LazyLock;

use regex::Regex;

use crate::FormatError;

use super::markers::{MARKER_TABLE, MarkerDef, ParagraphKind, PrefixLen};

/// The marker recognized at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub kind: ParagraphKind,
    /// Byte length of the matched prefix.
    pub prefix_len: usize,
    /// Digits captured by a top-indent marker, kept verbatim.
    pub units: Option<String>,
}

/// Table patterns compiled once, anchored so `is_match` is a full match.
static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MARKER_TABLE
        .iter()
        .map(|def| {
            let anchored = match def.prefix_len {
                PrefixLen::Fixed(_) => format!("^(?:{})$", def.pattern),
                PrefixLen::Variable => format!("^(?:{})", def.pattern),
            };
            Regex::new(&anchored).expect("marker table patterns are valid regexes")
        })
        .collect()
});

/// Classifies raw paragraph lines against [`MARKER_TABLE`].
pub struct MarkerRecognizer;

impl MarkerRecognizer {
    /// Returns the first table entry whose pattern matches the line's prefix.
    ///
    /// A line shorter than a fixed prefix length yields a shorter slice, which
    /// simply fails to match.
    pub fn recognize(&self, line: &str) -> Result<Marker, FormatError> {
        MARKER_TABLE
            .iter()
            .zip(COMPILED.iter())
            .find_map(|(def, re)| Self::try_match(def, re, line))
            .ok_or_else(|| FormatError::UnrecognizedMarker(line.to_string()))
    }

    fn try_match(def: &MarkerDef, re: &Regex, line: &str) -> Option<Marker> {
        match def.prefix_len {
            PrefixLen::Fixed(chars) => {
                let prefix = char_prefix(line, chars);
                re.is_match(prefix).then(|| Marker {
                    kind: def.kind,
                    prefix_len: prefix.len(),
                    units: None,
                })
            }
            PrefixLen::Variable => {
                let caps = re.captures(line)?;
                let whole = caps.get(0)?;
                Some(Marker {
                    kind: def.kind,
                    prefix_len: whole.end(),
                    units: caps.get(1).map(|m| m.as_str().to_string()),
                })
            }
        }
    }
}

/// The first `chars` characters of `s`, or all of `s` if it is shorter.
fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
