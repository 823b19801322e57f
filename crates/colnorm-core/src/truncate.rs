//! Positional truncation measured in characters.

/// Return the first `max_chars` characters of `value`.
pub fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_is_noop() {
        assert_eq!(truncate("abc", 63), "abc");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn test_truncate_cuts_from_end() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééé", 2), "éé");
    }
}
