// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{Error, Result},
    pulse::PulseSequence,
};

/// Row terminator of the sequence files, matching the CSV dialect read by the
/// pulse sequencer.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Writes one comma-separated row per sequence, without a header.
pub fn write_rows<W: Write>(writer: &mut W, rows: &[PulseSequence]) -> io::Result<()> {
    for row in rows {
        write!(writer, "{row}{LINE_TERMINATOR}")?;
    }
    Ok(())
}

fn render_rows(rows: &[PulseSequence]) -> Vec<u8> {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_rows(&mut buffer, rows);
    buffer
}

/// Destination of the identity-flavored and X-flavored sequence files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub i_sequences: PathBuf,
    pub x_sequences: PathBuf,
}

/// Writes both sequence files. Both files are rendered in full before either
/// is created.
pub fn write_files(
    paths: &OutputPaths,
    i_rows: &[PulseSequence],
    x_rows: &[PulseSequence],
) -> Result<()> {
    let i_contents = render_rows(i_rows);
    let x_contents = render_rows(x_rows);
    write_file(&paths.i_sequences, &i_contents)?;
    write_file(&paths.x_sequences, &x_contents)?;
    info!(
        "wrote {} rows to {} and {} rows to {}",
        i_rows.len(),
        paths.i_sequences.display(),
        x_rows.len(),
        paths.x_sequences.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a sequence file back, one [`PulseSequence`] per row.
pub fn read_rows(path: &Path) -> Result<Vec<PulseSequence>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    contents
        .split_terminator(LINE_TERMINATOR)
        .map(str::parse::<PulseSequence>)
        .collect()
}
