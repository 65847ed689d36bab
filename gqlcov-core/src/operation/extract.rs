use crate::operation::{OperationName, QueryScanner, Token, TokenKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the operation name is located inside the query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Find the first `mutation` (else `query`) keyword anywhere in the
    /// document and take the first field of the selection set after it.
    #[default]
    Scan,
    /// Only match a first line of the form `query [Name] { field`.
    Anchored,
}

/// Extracts the invoked operation from a request body.
///
/// Returns [`OperationName::unknown`] when the body is not JSON, has no string
/// `query` field, or the query does not have the expected shape.
pub fn extract_operation(request_text: &str, mode: ExtractionMode) -> OperationName {
    let Some(query) = query_source(request_text) else {
        tracing::debug!("request carries no readable query");
        return OperationName::unknown();
    };

    let name = match mode {
        ExtractionMode::Scan => scan_operation(&query),
        ExtractionMode::Anchored => anchored_operation(&query),
    };

    match name {
        Some(name) => OperationName::new(name),
        None => {
            tracing::debug!(?mode, "no operation found in query");
            OperationName::unknown()
        }
    }
}

fn query_source(request_text: &str) -> Option<String> {
    let request: Value = serde_json::from_str(request_text).ok()?;
    request.get("query")?.as_str().map(str::to_string)
}

/// Returns the text between the first `{` following the root keyword and the
/// first `(` after it, or the first `}` when no argument list follows, trimmed.
///
/// Nested selection sets are not skipped, so a field without arguments keeps
/// the text up to its closing brace and is later filtered out as malformed.
///
/// `mutation` takes precedence over `query` regardless of position. Keywords
/// inside string literals or as part of longer identifiers do not count.
pub fn scan_operation(query: &str) -> Option<&str> {
    let tokens: Vec<Token<'_>> = QueryScanner::new(query).collect();

    let keyword = tokens
        .iter()
        .position(|t| t.is_word("mutation"))
        .or_else(|| tokens.iter().position(|t| t.is_word("query")))?;

    let open = keyword + tokens[keyword..].iter().position(|t| t.is_punct('{'))?;

    let after_open = &tokens[open + 1..];
    let close = after_open
        .iter()
        .find(|t| t.is_punct('('))
        .or_else(|| after_open.iter().find(|t| t.is_punct('}')))?;

    Some(query[tokens[open].end..close.start].trim())
}

/// Matches `(mutation|query) [Name] { field` at the very start of the
/// query's first non-blank line, ignoring keyword case.
pub fn anchored_operation(query: &str) -> Option<&str> {
    let line = query.trim().lines().next()?;
    let mut cursor = QueryScanner::new(line);

    if !(cursor.eat_keyword_ignore_case("mutation") || cursor.eat_keyword_ignore_case("query")) {
        return None;
    }

    cursor.skip_whitespace();
    cursor.take_word();
    cursor.skip_whitespace();

    if !cursor.eat('{') {
        return None;
    }

    cursor.skip_whitespace();
    cursor.take_word()
}
