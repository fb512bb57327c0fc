/// Zero-width and word-joiner code points that survive copy-paste from the
/// source documents.
const INVISIBLE_CHARS: &[char] = &['\u{200c}', '\u{200d}', '\u{feff}', '\u{2060}'];

/// Canonical comparison form for heading triggers: invisible characters and
/// underscores removed, non-breaking spaces folded to plain spaces, every
/// remaining non-alphanumeric non-whitespace character dropped, upper-cased,
/// trimmed. Used only for matching, never for stored output.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.chars() {
        if INVISIBLE_CHARS.contains(&ch) || ch == '_' {
            continue;
        }

        let ch = if ch == '\u{a0}' { ' ' } else { ch };
        if ch.is_alphanumeric() || ch.is_whitespace() {
            folded.push(ch);
        }
    }

    folded.to_uppercase().trim().to_string()
}

/// Preprocessor for personnel lines: invisible characters out, non-breaking
/// spaces folded. Keeps underscores and punctuation so rank tokens like
/// "PW2" or "L/KPL" stay intact.
pub fn strip_invisible(text: &str) -> String {
    text.chars()
        .filter(|ch| !INVISIBLE_CHARS.contains(ch))
        .map(|ch| if ch == '\u{a0}' { ' ' } else { ch })
        .collect()
}
