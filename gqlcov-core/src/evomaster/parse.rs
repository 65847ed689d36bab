use crate::operation::{OperationName, QueryScanner};

const DECLARATION_START: &str = "public void ";
const TEST_PREFIX: &str = "test_";
const NULL_MATCHER: &str = "nullValue";

/// Operation reported for a generated test whose request names none.
pub const UNKNOWN_TEST_OPERATION: &str = "<unknown>";

/// One generated test method, from its declaration up to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Parses `test_<n>() throws Exception {` at the scanner position.
fn declaration_name<'a>(cursor: &mut QueryScanner<'a>) -> Option<&'a str> {
    let rest = cursor.rest();
    if !cursor.eat_str(TEST_PREFIX) {
        return None;
    }
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    let name = &rest[..TEST_PREFIX.len() + digits.len()];

    cursor.skip_whitespace();
    if !cursor.eat_str("()") {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat_str("throws Exception") {
        return None;
    }
    cursor.skip_whitespace();
    cursor.eat('{').then_some(name)
}

/// Splits a suite into its `public void test_<n>()` methods.
pub fn split_tests(source: &str) -> Vec<TestCase<'_>> {
    let declarations: Vec<(&str, usize)> = source
        .match_indices(DECLARATION_START)
        .filter_map(|(start, _)| {
            let mut cursor = QueryScanner::new(&source[start + DECLARATION_START.len()..]);
            declaration_name(&mut cursor).map(|name| (name, start))
        })
        .collect();

    declarations
        .iter()
        .enumerate()
        .map(|(i, &(name, start))| {
            let end = declarations
                .get(i + 1)
                .map_or(source.len(), |&(_, next)| next);
            TestCase {
                name,
                body: &source[start..end],
            }
        })
        .collect()
}

pub fn count_fault_tests(source: &str) -> usize {
    split_tests(source).len()
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Reads `"query" : "[mutation {] name` at the cursor, where the quotes may
/// carry Java escapes.
fn query_operation<'a>(cursor: &mut QueryScanner<'a>) -> Option<&'a str> {
    cursor.eat('\\');
    if !cursor.eat('"') {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    cursor.eat('\\');
    if !cursor.eat('"') {
        return None;
    }
    cursor.skip_whitespace();

    let mut inside_mutation = cursor.clone();
    if inside_mutation.eat_str("mutation") {
        inside_mutation.skip_whitespace();
        if inside_mutation.eat('{') {
            inside_mutation.skip_whitespace();
            if let Some(name) = identifier(&mut inside_mutation) {
                return Some(name);
            }
        }
    }

    identifier(cursor)
}

fn identifier<'a>(cursor: &mut QueryScanner<'a>) -> Option<&'a str> {
    if !cursor.rest().starts_with(is_identifier_start) {
        return None;
    }
    Some(cursor.take_while(is_identifier_char))
}

/// The operation named by the first `"query"` member of a test's request.
pub fn test_operation(body: &str) -> OperationName {
    body.match_indices("\"query")
        .find_map(|(start, needle)| {
            let mut cursor = QueryScanner::new(&body[start + needle.len()..]);
            query_operation(&mut cursor)
        })
        .map_or_else(|| OperationName::new(UNKNOWN_TEST_OPERATION), OperationName::new)
}

/// Reads `(<path>, <matcher>(<args>))` following a `.body` call and returns
/// the matcher expression.
fn body_matcher<'a>(cursor: &mut QueryScanner<'a>) -> Option<&'a str> {
    cursor.skip_whitespace();
    if !cursor.eat('(') {
        return None;
    }
    if cursor.take_while(|c| c != ',').is_empty() || !cursor.eat(',') {
        return None;
    }
    cursor.skip_whitespace();

    let rest = cursor.rest();
    let name = cursor.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if name.is_empty() || !cursor.eat('(') {
        return None;
    }
    cursor.take_while(|c| c != ')');
    if !cursor.eat(')') {
        return None;
    }
    let matcher = &rest[..rest.len() - cursor.rest().len()];

    cursor.skip_whitespace();
    cursor.eat(')').then_some(matcher)
}

/// Number of `.body(path, matcher(..))` assertions whose matcher is not
/// `nullValue`.
pub fn count_non_null_assertions(body: &str) -> usize {
    let mut count = 0;
    let mut offset = 0;

    while let Some(found) = body[offset..].find(".body") {
        let start = offset + found + ".body".len();
        let mut cursor = QueryScanner::new(&body[start..]);

        match body_matcher(&mut cursor) {
            Some(matcher) => {
                if !matcher.starts_with(NULL_MATCHER) {
                    count += 1;
                }
                offset = start + cursor.position();
            }
            None => offset = start,
        }
    }

    count
}
