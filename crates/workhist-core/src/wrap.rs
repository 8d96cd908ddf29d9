//! Greedy word wrapping.

/// Wraps `text` into lines of at most `width` characters.
///
/// Words are separated by whitespace and joined with single spaces. A word
/// longer than `width` is split into `width`-sized pieces. A `width` of zero
/// is treated as one. Lengths are counted in `char`s, not terminal cells, so
/// wide characters overrun the width on screen.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        for piece in split_long_word(word, width) {
            let len = piece.chars().count();
            if current_len > 0 && current_len + 1 + len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(piece);
            current_len += len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = word;
    while let Some((split, _)) = rest.char_indices().nth(width) {
        let (head, tail) = rest.split_at(split);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap("fix bug one", 57), ["fix bug one"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            ["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_exact_width() {
        assert_eq!(wrap("abcde fghij", 5), ["abcde", "fghij"]);
        assert_eq!(wrap("ab cd", 5), ["ab cd"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("a  b\t c", 20), ["a b c"]);
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap("to abcdefgh", 4), ["to", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_multibyte() {
        assert_eq!(wrap("日本語テスト", 3), ["日本語", "テスト"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap("ab", 0), ["a", "b"]);
    }
}
