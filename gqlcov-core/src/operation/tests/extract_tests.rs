use crate::operation::{
    ExclusionReason, ExtractionMode, OperationName, anchored_operation, extract_operation,
    scan_operation,
};
use pretty_assertions::assert_eq;

fn request(query: &str) -> String {
    serde_json::json!({ "query": query }).to_string()
}

fn scan(query: &str) -> OperationName {
    extract_operation(&request(query), ExtractionMode::Scan)
}

fn anchored(query: &str) -> OperationName {
    extract_operation(&request(query), ExtractionMode::Anchored)
}

//-----------------------------------------------------------------------------
// Scan mode
//-----------------------------------------------------------------------------

#[test]
fn scan_extracts_mutation_with_arguments() {
    let name = extract_operation(
        r#"{"query":"mutation { createWallet(input:{}) }"}"#,
        ExtractionMode::Scan,
    );

    assert_eq!(name, OperationName::new("createWallet"));
}

#[test]
fn scan_extracts_field_without_arguments() {
    assert_eq!(scan("query { me }"), OperationName::new("me"));
}

#[test]
fn scan_runs_through_nested_selection_without_arguments() {
    let name = scan("query GetUser { user { id name } }");

    assert_eq!(name, OperationName::new("user { id name"));
    assert!(!name.is_reportable());
}

#[test]
fn scan_prefers_any_later_argument_list_over_closing_brace() {
    let name = scan("query { a { b } c(x: 1) }");

    assert_eq!(name, OperationName::new("a { b } c"));
    assert!(!name.is_reportable());
}

#[test]
fn scan_nested_selection_is_excluded_for_whitespace() {
    // Arrange
    let name = scan("query { user { id } }");

    // Act
    let reason = name.exclusion();

    // Assert
    assert_eq!(name.as_str(), "user { id");
    assert_eq!(reason, Some(ExclusionReason::Whitespace));
}

#[test]
fn scan_skips_variable_definitions() {
    assert_eq!(
        scan("mutation Create($input: WalletInput!) { createWallet(input: $input) { id } }"),
        OperationName::new("createWallet")
    );
}

#[test]
fn scan_prefers_mutation_over_earlier_query() {
    assert_eq!(
        scan("query { a } mutation { b }"),
        OperationName::new("b")
    );
}

#[test]
fn scan_ignores_keywords_inside_identifiers_and_strings() {
    assert_eq!(
        scan("query GetLog { mutationLog(filter: \"mutation\") }"),
        OperationName::new("mutationLog")
    );
}

#[test]
fn scan_keeps_aliased_text_for_later_filtering() {
    let name = scan("query { first: user(id: 1) { id } }");

    assert_eq!(name, OperationName::new("first: user"));
    assert!(!name.is_reportable());
}

#[test]
fn scan_without_keyword_is_unknown() {
    assert_eq!(scan("{ me }"), OperationName::unknown());
}

#[test]
fn scan_without_brace_is_unknown() {
    assert_eq!(scan("query GetUser"), OperationName::unknown());
}

#[test]
fn scan_without_terminator_is_unknown() {
    assert_eq!(scan("mutation { createWallet"), OperationName::unknown());
}

#[test]
fn scan_empty_selection_yields_empty_name() {
    let name = scan("mutation { }");

    assert_eq!(name, OperationName::new(""));
    assert!(!name.is_reportable());
}

#[test]
fn scan_operation_works_on_raw_query_text() {
    assert_eq!(scan_operation("mutation {\n  login(u: 1)\n}"), Some("login"));
}

//-----------------------------------------------------------------------------
// Anchored mode
//-----------------------------------------------------------------------------

#[test]
fn anchored_matches_anonymous_operation() {
    assert_eq!(anchored("query { users { id } }"), OperationName::new("users"));
}

#[test]
fn anchored_matches_named_operation() {
    assert_eq!(
        anchored("mutation AddUser {addUser(name: \"x\") { id }}"),
        OperationName::new("addUser")
    );
}

#[test]
fn anchored_ignores_keyword_case() {
    assert_eq!(anchored("QUERY { Users }"), OperationName::new("Users"));
}

#[test]
fn anchored_uses_first_line_only() {
    assert_eq!(anchored("query Q\n{ users }"), OperationName::unknown());
    assert_eq!(anchored("\n  query {\n users }"), OperationName::unknown());
    assert_eq!(anchored_operation("  query { a\n b }"), Some("a"));
}

#[test]
fn anchored_requires_leading_keyword() {
    assert_eq!(anchored("{ users }"), OperationName::unknown());
    assert_eq!(anchored("fragment F on User { id }"), OperationName::unknown());
}

#[test]
fn anchored_requires_field_after_brace() {
    assert_eq!(anchored("query { }"), OperationName::unknown());
    assert_eq!(anchored("query { ...F }"), OperationName::unknown());
}

//-----------------------------------------------------------------------------
// Malformed requests
//-----------------------------------------------------------------------------

#[test]
fn malformed_requests_are_unknown_in_both_modes() {
    for body in ["", "not json", "[1,2]", r#"{"query": 5}"#, r#"{"variables":{}}"#] {
        assert_eq!(
            extract_operation(body, ExtractionMode::Scan),
            OperationName::unknown(),
            "scan: {body}"
        );
        assert_eq!(
            extract_operation(body, ExtractionMode::Anchored),
            OperationName::unknown(),
            "anchored: {body}"
        );
    }
}
