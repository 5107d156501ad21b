// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::{clifford::Clifford, sequence::Flavor};

/// Errors raised while building the group tables, validating a configuration
/// or writing sequence files. None of them are recoverable: the run aborts
/// before any output is written.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error("Clifford id {0} is out of range, expected a value below 24")]
    #[diagnostic(code("Rb.Argument.CliffordOutOfRange"))]
    CliffordOutOfRange(usize),

    #[error("generator id {id} is out of range for a catalogue of {count} generators")]
    #[diagnostic(code("Rb.Argument.GeneratorOutOfRange"))]
    GeneratorOutOfRange { id: usize, count: usize },

    #[error("unknown pulse label `{0}`")]
    #[diagnostic(code("Rb.Argument.UnknownPulseLabel"))]
    UnknownPulseLabel(String),

    #[error("unitary overlaps {first} and {second} equally well ({best} vs {runner_up})")]
    #[diagnostic(
        code("Rb.Group.DegenerateOverlap"),
        help("the Clifford matrices must be pairwise distinguishable up to global phase")
    )]
    DegenerateOverlap {
        first: Clifford,
        second: Clifford,
        best: f64,
        runner_up: f64,
    },

    #[error("{clifford} followed by its listed inverse {inverse} gives {product}, not the identity")]
    #[diagnostic(code("Rb.Group.InverseMismatch"))]
    InverseMismatch {
        clifford: Clifford,
        inverse: Clifford,
        product: Clifford,
    },

    #[error("the generator catalogue is empty")]
    #[diagnostic(code("Rb.Generator.Empty"))]
    EmptyGeneratorSet,

    #[error("generator {0} has no pulse labels")]
    #[diagnostic(code("Rb.Generator.NoLabels"))]
    GeneratorWithoutLabels(usize),

    #[error("generator {generator} has {count} pulse labels, at most two are supported")]
    #[diagnostic(code("Rb.Generator.TooManyLabels"))]
    TooManyLabels { generator: usize, count: usize },

    #[error("pulse label {label} of generator {generator} implements {actual}, expected {expected}")]
    #[diagnostic(code("Rb.Generator.LabelMismatch"))]
    LabelMismatch {
        generator: usize,
        label: &'static str,
        expected: Clifford,
        actual: Clifford,
    },

    #[error("{clifford} cannot be reached by any generator word of length {max_length} or less")]
    #[diagnostic(
        code("Rb.Decomposition.Unreachable"),
        help("the generator set is incomplete for randomized benchmarking")
    )]
    UnreachableClifford { clifford: Clifford, max_length: usize },

    #[error(
        "{flavor}-sequence {randomization} of length {length} composes to {product} instead of its target"
    )]
    #[diagnostic(code("Rb.Sequence.Unsound"))]
    UnsoundSequence {
        flavor: Flavor,
        length: usize,
        randomization: usize,
        product: Clifford,
    },

    #[error("sequence length must be at least 1, got {0}")]
    #[diagnostic(code("Rb.Config.InvalidSequenceLength"))]
    InvalidSequenceLength(usize),

    #[error("could not parse configuration file {}", path.display())]
    #[diagnostic(code("Rb.Config.Parse"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", path.display())]
    #[diagnostic(code("Rb.Io"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
