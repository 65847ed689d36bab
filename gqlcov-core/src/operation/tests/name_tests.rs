use crate::operation::{ExclusionReason, OperationName};

#[test]
fn plain_names_are_reportable() {
    assert!(OperationName::new("createWallet").is_reportable());
    assert!(OperationName::new("queryUsers").is_reportable());
    assert!(OperationName::new("_private").is_reportable());
}

#[test]
fn exclusions_are_classified() {
    assert_eq!(
        OperationName::new("").exclusion(),
        Some(ExclusionReason::Empty)
    );
    assert_eq!(
        OperationName::new("a b").exclusion(),
        Some(ExclusionReason::Whitespace)
    );
    assert_eq!(
        OperationName::new("alias:\tfield").exclusion(),
        Some(ExclusionReason::Whitespace)
    );
    assert_eq!(
        OperationName::new("__schema").exclusion(),
        Some(ExclusionReason::Introspection)
    );
    assert_eq!(
        OperationName::new("query").exclusion(),
        Some(ExclusionReason::RootKeyword)
    );
    assert_eq!(
        OperationName::new("mutation").exclusion(),
        Some(ExclusionReason::RootKeyword)
    );
}

#[test]
fn root_keyword_match_is_exact() {
    assert_eq!(OperationName::new("Query").exclusion(), None);
    assert_eq!(OperationName::new("mutations").exclusion(), None);
}

#[test]
fn unknown_is_not_reportable_but_not_excluded() {
    let name = OperationName::unknown();

    assert!(name.is_unknown());
    assert_eq!(name.exclusion(), None);
    assert!(!name.is_reportable());
}

#[test]
fn serializes_as_plain_string() {
    let json = serde_json::to_string(&OperationName::new("me")).unwrap();

    assert_eq!(json, "\"me\"");
}
