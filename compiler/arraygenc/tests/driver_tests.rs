//! End-to-end tests for the driver: destinations, `--check`, and the
//! all-or-nothing guarantee on configuration errors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use arraygen_codegen::{generate_standard, GenError};
use arraygenc::{list_catalog, run, CheckOutcome, DriverError, GenerateOptions};
use pretty_assertions::assert_eq;

#[test]
fn writes_to_stdout_by_default() {
    let mut stdout = Vec::<u8>::new();
    let outcome = run(&GenerateOptions::default(), &mut stdout).unwrap();

    assert_eq!(outcome, CheckOutcome::Written);
    assert_eq!(String::from_utf8(stdout).unwrap(), generate_standard().unwrap());
}

#[test]
fn writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vec.hpp");
    let options = GenerateOptions {
        container_name: "Vec".to_string(),
        output: Some(path.clone()),
        check: None,
    };

    let mut stdout = Vec::<u8>::new();
    run(&options, &mut stdout).unwrap();

    assert!(stdout.is_empty());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("template<typename T, int N>\nstruct Vec {"));
}

#[test]
fn invalid_name_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.hpp");
    let options = GenerateOptions {
        container_name: "not-an-ident".to_string(),
        output: Some(path.clone()),
        check: None,
    };

    let mut stdout = Vec::<u8>::new();
    let err = run(&options, &mut stdout).unwrap_err();

    assert!(matches!(
        err,
        DriverError::Generation(GenError::InvalidContainerName { .. })
    ));
    assert!(stdout.is_empty());
    assert!(!path.exists());
}

#[test]
fn check_reports_each_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("array.hpp");
    let options = GenerateOptions {
        check: Some(path.clone()),
        ..GenerateOptions::default()
    };
    let mut stdout = Vec::<u8>::new();

    assert_eq!(run(&options, &mut stdout).unwrap(), CheckOutcome::Missing);

    fs::write(&path, "stale\n").unwrap();
    assert_eq!(run(&options, &mut stdout).unwrap(), CheckOutcome::Stale);

    fs::write(&path, generate_standard().unwrap()).unwrap();
    assert_eq!(run(&options, &mut stdout).unwrap(), CheckOutcome::UpToDate);

    assert!(stdout.is_empty());
    assert!(CheckOutcome::UpToDate.is_success());
    assert!(!CheckOutcome::Stale.is_success());
    assert!(!CheckOutcome::Missing.is_success());
}

#[test]
fn write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        output: Some(dir.path().join("missing").join("array.hpp")),
        ..GenerateOptions::default()
    };

    let err = run(&options, &mut Vec::<u8>::new()).unwrap_err();
    assert!(err.to_string().starts_with("failed to write `"));
}

#[test]
fn list_prints_catalog_in_order() {
    let mut out = Vec::<u8>::new();
    list_catalog(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 18);
    assert_eq!(lines[0], "+   arithmetic-binary, arithmetic-unary");
    assert_eq!(lines[8], "~   arithmetic-unary");
    assert_eq!(lines[11], "==  logical-binary");
    assert_eq!(lines[17], "!   logical-unary");
}
