use super::cursor::Cursor;

/// Italic span type with owned delimiter constants.
pub struct Italic;

impl Italic {
    /// The paired delimiter marking an italic span in the manuscript.
    pub const DELIM: char = '€';
    /// A span may not contain this character; it would swallow emitted markup.
    pub const FORBIDDEN: char = '<';
    pub const OPEN: &'static str = "<i>";
    pub const CLOSE: &'static str = "</i>";
}

/// Rewrites every closed `€text€` span into `<i>text</i>`.
///
/// Spans are found left to right and never overlap. The inner text must be
/// non-empty and contain neither delimiter nor `<`; a delimiter that cannot
/// close such a span is kept as a literal character.
pub fn expand_italics(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());

    while !cur.eof() {
        if let Some(inner) = try_parse_italic(&mut cur) {
            out.push_str(Italic::OPEN);
            out.push_str(inner);
            out.push_str(Italic::CLOSE);
            continue;
        }
        if let Some(c) = cur.bump() {
            out.push(c);
        }
    }

    out
}

/// Attempts to parse an italic span starting at the current position.
///
/// Returns the inner text on success. On failure the cursor is restored.
fn try_parse_italic<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(Italic::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // €
    let inner_start = cur.i;

    while let Some(c) = cur.peek() {
        if c == Italic::DELIM || c == Italic::FORBIDDEN {
            break;
        }
        cur.bump();
    }
    let inner = cur.since(inner_start);

    if cur.peek() != Some(Italic::DELIM) || inner.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing €

    Some(inner)
}
