//! Whitespace-run tokenizer
//!
//! Splits text into maximal runs of whitespace and maximal runs of
//! non-whitespace. Whitespace is kept as first-class tokens, so the token
//! sequence concatenates back to the input byte for byte and a diff can be
//! rendered without losing spacing or line breaks.
//!
//! One rule serves both output shapes: no empty token is ever produced.
//! An empty input yields no tokens; leading and trailing whitespace are
//! ordinary whitespace tokens.

/// Whether a token is a whitespace run or a word run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Word,
}

/// Split `text` into borrowed tokens.
///
/// # Example
///
/// ```
/// use docdelta_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("A  B\n"), vec!["A", "  ", "B", "\n"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (offset, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match current {
            Some(prev) if prev != is_ws => {
                tokens.push(&text[start..offset]);
                start = offset;
            }
            _ => {}
        }
        current = Some(is_ws);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Classify a token produced by [`tokenize`].
///
/// Tokens are homogeneous, so the first character decides. An empty string
/// (never produced by the tokenizer) is reported as `Word`.
pub fn token_kind(token: &str) -> TokenKind {
    match token.chars().next() {
        Some(ch) if ch.is_whitespace() => TokenKind::Whitespace,
        _ => TokenKind::Word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_run_boundaries() {
        assert_eq!(tokenize("A B"), vec!["A", " ", "B"]);
        assert_eq!(tokenize("one  two\t\nthree"), vec!["one", "  ", "two", "\t\n", "three"]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace_are_tokens() {
        assert_eq!(tokenize("  lead"), vec!["  ", "lead"]);
        assert_eq!(tokenize("trail \n"), vec!["trail", " \n"]);
        assert_eq!(tokenize("   "), vec!["   "]);
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_unicode_whitespace_and_multibyte_words() {
        // U+00A0 NO-BREAK SPACE and U+3000 IDEOGRAPHIC SPACE are whitespace
        let text = "café\u{00A0}naïve\u{3000}日本";
        assert_eq!(tokenize(text), vec!["café", "\u{00A0}", "naïve", "\u{3000}", "日本"]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let text = "\n\nHeading\n\n  - item one\r\n  - item two  ";
        assert_eq!(tokenize(text).concat(), text);
    }

    #[test]
    fn test_token_kind() {
        assert_eq!(token_kind(" \t"), TokenKind::Whitespace);
        assert_eq!(token_kind("word"), TokenKind::Word);
        assert_eq!(token_kind(""), TokenKind::Word);
    }
}
