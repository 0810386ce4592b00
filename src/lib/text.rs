//! Emptiness and blankness checks for optional strings.

/// Returns true if the string is absent or has zero length.
pub fn is_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

/// Returns true if the string is present and has at least one character,
/// whitespace included.
pub fn not_empty(s: Option<&str>) -> bool {
    !is_empty(s)
}

/// Returns true if the string contains at least one non-whitespace character.
pub fn has_text(s: &str) -> bool {
    s.chars().any(|c| !is_whitespace(c))
}

/// Returns true if the string is absent, empty, or whitespace only.
pub fn is_blank(s: Option<&str>) -> bool {
    is_empty(s) || !s.is_some_and(has_text)
}

/// Returns true if the string holds at least one non-whitespace character.
pub fn not_blank(s: Option<&str>) -> bool {
    not_empty(s) && s.is_some_and(has_text)
}

/// Whitespace as property values have always been classified: Unicode
/// separators except the non-breaking ones, plus the ASCII control
/// separators. U+0085 does not count.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' => true,
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
