use super::token::Token;

/// Unicode whitespace plus U+FEFF, which files saved with a byte-order mark
/// carry in front of the first word.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Splits text on runs of whitespace into reading-order tokens.
///
/// Leading and trailing whitespace is ignored. Case, punctuation and Unicode
/// are left untouched, so whitespace-only input gives an empty vector.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    words(text).map(Token::new).collect()
}

/// Whitespace-collapsed form of `text`: what the tokens read back as.
pub fn collapse_whitespace(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}
