// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::generator::PulseLabel;

fn rows() -> Vec<PulseSequence> {
    vec![
        PulseSequence(vec![PulseLabel::X90p, PulseLabel::Ym]),
        PulseSequence(vec![PulseLabel::QId]),
    ]
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rb_sequences_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch directory should be creatable");
    dir
}

#[test]
fn rows_are_comma_separated_without_header() {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &rows()).expect("write to memory");
    assert_eq!(
        String::from_utf8(buffer).expect("utf-8"),
        "X90p,Ym\r\nQId\r\n"
    );
}

#[test]
fn no_rows_write_nothing() {
    assert!(render_rows(&[]).is_empty());
}

#[test]
fn files_read_back_unchanged() {
    let dir = scratch_dir("read_back");
    let paths = OutputPaths {
        i_sequences: dir.join("RB_ISeqs.txt"),
        x_sequences: dir.join("RB_XSeqs.txt"),
    };
    let x_rows = vec![PulseSequence(vec![PulseLabel::Xp])];
    write_files(&paths, &rows(), &x_rows).expect("files should be written");

    assert_eq!(read_rows(&paths.i_sequences).expect("readable"), rows());
    assert_eq!(read_rows(&paths.x_sequences).expect("readable"), x_rows);
    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = scratch_dir("missing").join("does_not_exist");
    let paths = OutputPaths {
        i_sequences: dir.join("i.txt"),
        x_sequences: dir.join("x.txt"),
    };
    let error = write_files(&paths, &rows(), &rows()).expect_err("directory is missing");
    match error {
        Error::Io { path, .. } => assert_eq!(path, paths.i_sequences),
        other => panic!("unexpected error {other:?}"),
    }
}
