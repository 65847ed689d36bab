use gqlcov_core::capture::decode_blocks_file;
use gqlcov_core::cli::{BlocksArgs, write_blocks};
use gqlcov_core::conf::FormatProfile;
use gqlcov_core::coverage::{OperationStats, aggregate, classify_entries};
use gqlcov_core::operation::OperationName;
use integration_tests::harness::{MessageLogBuilder, Workspace};
use pretty_assertions::assert_eq;

fn scan_log() -> String {
    MessageLogBuilder::new()
        .exchange("query { wallets { id } }", r#"{"data":{"wallets":[{"id":"w1"}]}}"#)
        .exchange("query { wallets { id } }", r#"{"data":{"wallets":[]}}"#)
        .exchange(
            "query ByOwner { walletsByOwner(owner: 1) { id } }",
            r#"{"data":null,"errors":[{"message":"owner not found"}]}"#,
        )
        .exchange(
            "mutation { transfer(amount: 5) { ok } }",
            r#"{"data":{"transfer":{"ok":true}},"errors":null}"#,
        )
        .exchange("{ shorthand }", r#"{"data":{"shorthand":1}}"#)
        .build()
}

#[test]
fn block_log_is_aggregated_without_windows() {
    // Arrange
    let workspace = Workspace::new();
    let path = workspace.write("wallets-messages.txt", scan_log());

    // Act
    let entries = decode_blocks_file(&path).unwrap();
    let report = aggregate(&classify_entries(&entries, &FormatProfile::blocks()), None);

    // Assert
    assert_eq!(entries.len(), 5);
    assert_eq!(report.window, None);
    assert_eq!(
        report.operations.get(&OperationName::new("wallets")),
        Some(&OperationStats { pass: 1, fail: 1 })
    );
    assert_eq!(
        report.operations.get(&OperationName::new("walletsByOwner")),
        Some(&OperationStats { pass: 0, fail: 1 })
    );
    assert_eq!(
        report.operations.get(&OperationName::new("transfer")),
        Some(&OperationStats { pass: 0, fail: 1 })
    );
    assert_eq!(report.unknown, OperationStats { pass: 1, fail: 0 });
}

#[test]
fn blocks_command_matches_library_report() {
    // Arrange
    let workspace = Workspace::new();
    let path = workspace.write("wallets-messages.txt", scan_log());
    let args = BlocksArgs {
        file: path,
        config: None,
        json: true,
    };
    let mut out = Vec::new();

    // Act
    write_blocks(&args, &mut out).unwrap();

    // Assert
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["operations_with_pass"], 1);
    assert_eq!(json["operations_with_fail"], 3);
    assert_eq!(json["operations"]["unknown"]["pass"], 1);
}
