//! Emptiness and blankness checks for optional text.
//!
//! A piece of text is in one of four states: absent, empty, whitespace only,
//! or carrying visible text. The predicates here collapse those states into
//! two questions:
//!
//! - [`is_empty_or_absent`] - absent or zero length
//! - [`is_blank_or_absent`] - absent or no visible text
//!
//! Whitespace follows [`char::is_whitespace`].

/// Check if the text is absent or has length zero.
///
/// Whitespace-only text is not empty.
pub fn is_empty_or_absent(seq: Option<&str>) -> bool {
    seq.is_none_or(str::is_empty)
}

/// Check if the text is present with at least one character.
pub fn is_not_empty(seq: Option<&str>) -> bool {
    !is_empty_or_absent(seq)
}

/// Check if the text contains a non-whitespace character.
///
/// Scans left to right and stops at the first visible character, so long
/// inputs with early text are cheap. Empty text has no visible text.
pub fn has_visible_text(seq: &str) -> bool {
    seq.chars().any(|c| !c.is_whitespace())
}

/// Check if the text is absent or carries no visible text.
pub fn is_blank_or_absent(seq: Option<&str>) -> bool {
    !is_not_blank(seq)
}

/// Check if the text is present and carries visible text.
pub fn is_not_blank(seq: Option<&str>) -> bool {
    seq.is_some_and(has_visible_text)
}
