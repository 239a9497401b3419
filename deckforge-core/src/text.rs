//! Character-bounded truncation
//!
//! The pipeline caps source text twice with independent limits: once before
//! embedding it in the generation prompt, and once (shorter) before storing
//! it on the project row. Both caps count characters, not bytes, so
//! multibyte input never gets split mid-codepoint.

/// Return at most the first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
