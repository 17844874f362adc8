//! Tests for reading input files and rendering the result.

use std::fs;

use pagesim::{read_input, render_table, Algorithm, Error, TableStyle};
use tempfile::tempdir;

fn write_input(contents: &str) -> (std::path::PathBuf, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).unwrap();
    (path, dir)
}

#[test]
fn test_read_and_run_fifo() {
    let (path, _dir) = write_input("F,3,1,2,3,4,1,2,5,1,2,3,4,5\n");

    let input = read_input(&path).unwrap();
    assert_eq!(input.algorithm, Algorithm::Fifo);
    assert_eq!(input.frames, 3);
    assert_eq!(input.references.len(), 12);

    let trace = input.run().unwrap();
    let table = render_table(&input.references, &trace, TableStyle::Sparse);

    assert!(table.starts_with("    1    2    3    4"));
    assert!(table.ends_with("Total Page Faults = 9\n"));
    // Header, rule, three frame rows, blank line, total.
    assert_eq!(table.lines().count(), 7);
}

#[test]
fn test_read_only_first_line() {
    let (path, _dir) = write_input("O,3,1,2,3,4,1,2,5,1,2,3,4,5\nF,1,1\n");

    let input = read_input(&path).unwrap();
    assert_eq!(input.algorithm, Algorithm::Opt);
    assert_eq!(input.run().unwrap().total_faults(), 7);
}

#[test]
fn test_read_empty_file() {
    let (path, _dir) = write_input("");
    assert!(matches!(read_input(&path), Err(Error::EmptyInput)));
}

#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    assert!(matches!(read_input(&path), Err(Error::Io(_))));
}

#[test]
fn test_read_unsupported_algorithm() {
    let (path, _dir) = write_input("L,3,1,2,3\n");
    assert!(matches!(
        read_input(&path),
        Err(Error::UnsupportedAlgorithm(_))
    ));
}

#[test]
fn test_held_table_fills_hit_columns() {
    let (path, _dir) = write_input("F,1,1,1\n");

    let input = read_input(&path).unwrap();
    let trace = input.run().unwrap();

    let sparse = render_table(&input.references, &trace, TableStyle::Sparse);
    let held = render_table(&input.references, &trace, TableStyle::Held);

    assert_eq!(sparse.lines().nth(2), Some("    1     "));
    assert_eq!(held.lines().nth(2), Some("    1    1"));
}
