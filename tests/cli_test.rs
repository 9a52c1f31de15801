//! End-to-end command execution against layout files.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use karytree::cli::args::Cli;
use karytree::cli::commands::execute_command;
use karytree::cli::CliError;
use karytree::exitcode;
use karytree::util::testing;
use karytree::TreeError;
use rstest::rstest;
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

const BINARY: &str = r#"
[root]
value = 1.0
children = [
    { value = 2.0, children = [{ value = 4.0 }, { value = 5.0 }] },
    { value = 3.0, children = [{ value = 6.0 }] },
]
"#;

fn write_layout(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write layout");
    path
}

fn run(args: &[&str]) -> Result<(), CliError> {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    execute_command(&cli)
}

#[rstest]
#[case("show")]
#[case("heapify")]
fn given_binary_layout_when_running_then_succeeds(#[case] command: &str) {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    run(&["karytree", command, path.to_str().unwrap()]).unwrap();
}

#[test]
fn given_ternary_arity_when_showing_then_in_order_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    run(&["karytree", "--arity", "3", "show", path.to_str().unwrap()]).unwrap();
}

#[test]
fn given_present_value_when_finding_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    run(&["karytree", "find", path.to_str().unwrap(), "2"]).unwrap();
}

#[test]
fn given_absent_value_when_finding_then_data_error() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    let err = run(&["karytree", "find", path.to_str().unwrap(), "42"]).unwrap_err();
    assert!(matches!(err, CliError::Tree(TreeError::NotFound(_))));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_layout_exceeding_arity_when_showing_then_capacity_error() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    let err = run(&["karytree", "-k", "1", "show", path.to_str().unwrap()]).unwrap_err();
    assert!(matches!(
        err,
        CliError::Tree(TreeError::CapacityExceeded { arity: 1, .. })
    ));
}

#[test]
fn given_unsupported_arity_when_showing_then_usage_error() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(&dir, "tree.toml", BINARY);
    let err = run(&["karytree", "-k", "9", "show", path.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_complex_layout_when_finding_then_complex_literal_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_layout(
        &dir,
        "complex.toml",
        r#"
[root]
value = { re = 3.4, im = 5.2 }
children = [{ value = { re = 1.2, im = 3.4 } }]
"#,
    );
    run(&["karytree", "--complex", "find", path.to_str().unwrap(), "1.2+3.4i"]).unwrap();
    run(&["karytree", "--complex", "heapify", path.to_str().unwrap()]).unwrap();
}

#[test]
fn given_missing_layout_when_showing_then_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = run(&["karytree", "show", missing.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::IOERR);
}
