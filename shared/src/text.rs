//! Display helpers for free text.

/// First `max_chars` characters of `text`, with `...` appended when cut.
///
/// Counts characters, not bytes, so multi-byte text never splits.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", trimmed[..cut].trim_end()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(excerpt("  hello  ", 10), "hello");
        assert_eq!(excerpt("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(excerpt("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(excerpt("word word word", 5), "word...");
    }

    #[test]
    fn cuts_on_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll...");
        assert_eq!(excerpt("🎉🎉🎉", 2), "🎉🎉...");
    }
}
