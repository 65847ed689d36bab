use crate::operation::{QueryScanner, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    QueryScanner::new(src).map(|t| t.kind).collect()
}

#[test]
fn tokens_cover_words_strings_and_punctuation() {
    // Arrange
    let src = r#"mutation { a(x: "y{") }"#;

    // Act
    let tokens: Vec<_> = QueryScanner::new(src).map(|t| t.text).collect();

    // Assert
    assert_eq!(tokens, vec!["mutation", "{", "a", "(", "x", ":", "\"y{\"", ")", "}"]);
}

#[test]
fn token_offsets_index_the_source() {
    let src = "query  { me }";

    for token in QueryScanner::new(src) {
        assert_eq!(&src[token.start..token.end], token.text);
    }
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(
        kinds(r#"{ "open"#),
        vec![TokenKind::Punct('{'), TokenKind::Str]
    );
}

#[test]
fn escaped_quote_does_not_close_string() {
    let texts: Vec<_> = QueryScanner::new(r#""a\"b" c"#).map(|t| t.text).collect();

    assert_eq!(texts, vec![r#""a\"b""#, "c"]);
}

#[test]
fn words_include_digits_underscores_and_unicode() {
    let texts: Vec<_> = QueryScanner::new("__type user_2 café").map(|t| t.text).collect();

    assert_eq!(texts, vec!["__type", "user_2", "café"]);
}

#[test]
fn keyword_match_ignores_case_without_word_boundary() {
    // Arrange
    let mut cursor = QueryScanner::new("QUERYfoo");

    // Act
    let matched = cursor.eat_keyword_ignore_case("query");

    // Assert
    assert!(matched);
    assert_eq!(cursor.take_word(), Some("foo"));
    assert!(cursor.is_at_end());
}

#[test]
fn keyword_match_is_safe_on_short_or_multibyte_input() {
    assert!(!QueryScanner::new("qu").eat_keyword_ignore_case("query"));
    assert!(!QueryScanner::new("ééé").eat_keyword_ignore_case("query"));
}
