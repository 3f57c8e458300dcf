//! Integration tests for the wayfind CLI
//!
//! These tests run the wayfind binary against real graph files on disk
//! and verify output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for wayfind
fn wayfind() -> Command {
    cargo_bin_cmd!("wayfind")
}

/// Write the documentation example graph: A-B=2, A-C=4, B-C=1, C-D=3,
/// B-D=5, D-E=6, D-F=8.
fn write_sample_graph(dir: &Path) -> PathBuf {
    let path = dir.join("graph.txt");
    fs::write(
        &path,
        "6\nA\nB\nC\nD\nE\nF\n7\nA B 2\nA C 4\nB C 1\nC D 3\nB D 5\nD E 6\nD F 8\n",
    )
    .unwrap();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    wayfind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wayfind"))
        .stdout(predicate::str::contains("graph description file"));
}

#[test]
fn test_version_flag() {
    wayfind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfind"));
}

// ============================================================================
// Shortest-distance queries
// ============================================================================

#[test]
fn test_shortest_distance_multi_hop() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    // A→B→C→D→F = 2+1+3+8
    wayfind()
        .args([graph.to_str().unwrap(), "A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::diff("14\n"));
}

#[test]
fn test_shortest_distance_is_symmetric() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args([graph.to_str().unwrap(), "F", "A"])
        .assert()
        .success()
        .stdout(predicate::str::diff("14\n"));
}

#[test]
fn test_distance_to_self_is_zero() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args([graph.to_str().unwrap(), "A", "A"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_unknown_node_reports_no_path_with_exit_0() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args([graph.to_str().unwrap(), "A", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No path between nodes\n"));
}

#[test]
fn test_disconnected_nodes_report_no_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("islands.txt");
    fs::write(&path, "4\na\nb\nc\nd\n2\na b 1\nc d 1\n").unwrap();

    wayfind()
        .args([path.to_str().unwrap(), "a", "d"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No path between nodes\n"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_output_for_reachable_pair() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args(["--format", "json", graph.to_str().unwrap(), "B", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"distance\":10"))
        .stdout(predicate::str::contains("\"reachable\":true"));
}

#[test]
fn test_json_output_for_unreachable_pair() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args(["--format", "json", graph.to_str().unwrap(), "X", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"distance\":null"))
        .stdout(predicate::str::contains("\"reachable\":false"));
}

// ============================================================================
// Usage errors (exit code 2)
// ============================================================================

#[test]
fn test_missing_file_exit_code_2() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent.txt");

    wayfind()
        .args([absent.to_str().unwrap(), "A", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_non_numeric_node_count_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "two\na\nb\n0\n").unwrap();

    wayfind()
        .args([path.to_str().unwrap(), "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid graph file"));
}

#[test]
fn test_wrong_edge_arity_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2\na\nb\n1\na b\n").unwrap();

    wayfind()
        .args([path.to_str().unwrap(), "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid graph file"));
}

#[test]
fn test_negative_weight_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2\na\nb\n1\na b -3\n").unwrap();

    wayfind()
        .args([path.to_str().unwrap(), "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_truncated_file_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "3\na\nb\n").unwrap();

    wayfind()
        .args([path.to_str().unwrap(), "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected end of file"));
}

#[test]
fn test_missing_arguments_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind().args([graph.to_str().unwrap(), "A"]).assert().code(2);
}

#[test]
fn test_empty_node_id_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args([graph.to_str().unwrap(), "", "B"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    wayfind()
        .args(["--format", "records", graph.to_str().unwrap(), "A", "B"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    wayfind()
        .args(["--format", "json", "graph.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_malformed_file_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "nope\n").unwrap();

    wayfind()
        .args(["--format", "json", path.to_str().unwrap(), "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_graph_file\""));
}
