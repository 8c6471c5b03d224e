use super::cursor::Cursor;

/// Single-letter words that must not end a line, in rewrite order.
pub const WIDOW_LETTERS: [char; 6] = ['w', 'i', 'o', 'u', 'z', 'a'];

/// Replaces the space following a joined letter.
pub const NBSP: &str = "&nbsp;";

/// Joins every single-letter widow word to the word after it.
///
/// Runs [`join_letter`] once per entry of [`WIDOW_LETTERS`], in order.
pub fn join_widows(s: &str) -> String {
    WIDOW_LETTERS
        .iter()
        .fold(s.to_string(), |text, &letter| join_letter(&text, letter))
}

/// Joins one letter (and its capital) to the following word with `&nbsp;`.
///
/// A lowercase letter is joined when preceded by start of text, a space, or
/// the `;` ending an earlier `&nbsp;`. The capital is joined after start of
/// text or any non-alphanumeric character. In both cases the letter must be
/// followed by a plain space, so the rewrite never matches its own output.
pub fn join_letter(s: &str, letter: char) -> String {
    let upper = letter.to_ascii_uppercase();
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    while let Some(c) = cur.bump() {
        out.push(c);
        let boundary = if c == letter {
            prev.is_none_or(|p| p == ' ' || p == ';')
        } else if c == upper {
            prev.is_none_or(|p| !p.is_alphanumeric())
        } else {
            false
        };
        if boundary && cur.peek() == Some(' ') {
            cur.bump();
            out.push_str(NBSP);
            prev = Some(';');
        } else {
            prev = Some(c);
        }
    }

    out
}
