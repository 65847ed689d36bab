use crate::cli::tests::fixtures::{output_string, sample_capture};
use crate::cli::{DecodeArgs, decoded_path, write_decode};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn decoded_path_sits_next_to_input() {
    assert_eq!(
        decoded_path(Path::new("/data/run-1.csv")),
        PathBuf::from("/data/run-1-decoded.csv")
    );
}

#[test]
fn write_decode_emits_readable_csv() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("run.csv");
    fs::write(&input, sample_capture()).unwrap();
    let args = DecodeArgs {
        input: input.clone(),
        output: None,
        config: None,
    };
    let mut out = Vec::new();

    // Act
    write_decode(&args, &mut out).unwrap();

    // Assert
    let written = dir.path().join("run-decoded.csv");
    assert_eq!(
        output_string(out),
        format!("Decoded 3 entries to {}\n", written.display())
    );

    let mut reader = csv::Reader::from_path(&written).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(
        headers,
        vec!["Time", "Status code", "Operation", "Request", "Response"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "2024-03-01T10:00:00+00:00");
    assert_eq!(&records[0][1], "200");
    assert_eq!(&records[0][2], "getUser");
    assert_eq!(&records[2][2], "addUser");
    assert_eq!(&records[2][4], r#"{"data":{"addUser":{"id":2}}}"#);
}

#[test]
fn write_decode_honours_explicit_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("run.csv");
    let output = dir.path().join("plain.csv");
    fs::write(&input, sample_capture()).unwrap();
    let args = DecodeArgs {
        input,
        output: Some(output.clone()),
        config: None,
    };

    write_decode(&args, &mut Vec::new()).unwrap();

    assert!(output.is_file());
    assert!(!dir.path().join("run-decoded.csv").exists());
}
