//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and
/// collapse whitespace.
///
/// This is what makes "Système CASA" and "systeme casa" meet in the middle:
/// - "café" → "cafe"
/// - "Spermaanalyse  \n " → "spermaanalyse"
/// - "OMS 6ª Edición" → "oms 6ª edicion"
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Truncate a string to at most `max` characters, respecting char
/// boundaries. Byte-slicing multilingual content panics mid-codepoint;
/// the article excerpts this guards are full of it.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// The final path component of a URL-ish path ("/a/b%20c.webp" → "b%20c.webp").
pub fn file_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}
