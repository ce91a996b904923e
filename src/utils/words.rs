//! Word and character counts for the status line.

/// Separator used between status line segments (a middle dot padded by two spaces).
pub const STATUS_SEPARATOR: &str = "  \u{b7}  ";

/// Count whitespace-separated words and characters of the trimmed text.
#[must_use]
pub fn word_count(text: &str) -> (usize, usize) {
    let trimmed = text.trim();
    (trimmed.split_whitespace().count(), trimmed.chars().count())
}

/// Render the word count the way the status line shows it.
#[must_use]
pub fn word_count_text(text: &str) -> String {
    let (words, chars) = word_count(text);
    if chars == 0 {
        return "0 words".to_string();
    }
    let plural = if words == 1 { "" } else { "s" };
    format!("{words} word{plural}{STATUS_SEPARATOR}{chars} chars")
}
