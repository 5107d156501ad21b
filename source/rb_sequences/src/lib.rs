// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pulse sequences for single-qubit randomized benchmarking.
//!
//! Random sequences of single-qubit Clifford elements are terminated by the
//! element that undoes them (or that leaves a π rotation about X), and every
//! element is then expanded into the shortest word over a small set of
//! physical pulses.

pub mod clifford;
pub mod config;
pub mod context;
pub mod decomposition;
pub mod error;
pub mod generator;
pub mod multiplication;
pub mod pulse;
pub mod sequence;
pub mod writer;

pub use clifford::{CLIFFORD_COUNT, Clifford};
pub use config::RbConfig;
pub use context::RbContext;
pub use decomposition::{Decomposition, Enumeration};
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorSet, PulseLabel};
pub use pulse::PulseSequence;
pub use sequence::{Flavor, SequencePair, SequencePlan};

use rand::Rng;

/// Every sequence of a run together with its pulse expansion, in row order.
#[derive(Clone, Debug, Default)]
pub struct RbSequences {
    /// Average number of generators per Clifford of the decomposition used.
    pub mean_word_length: f64,
    pub pairs: Vec<SequencePair>,
    pub i_pulses: Vec<PulseSequence>,
    pub x_pulses: Vec<PulseSequence>,
}

/// Draws every sequence of `plan`, checks that it composes to its target and
/// expands it into pulses.
pub fn generate<R: Rng + ?Sized>(
    context: &RbContext,
    plan: &SequencePlan,
    rng: &mut R,
) -> Result<RbSequences> {
    let pairs = sequence::synthesize(context, plan, rng);
    for pair in &pairs {
        pair.verify(context.table())?;
    }

    let i_pulses = pairs
        .iter()
        .map(|pair| pulse::emit(context, &pair.i_sequence, rng))
        .collect();
    let x_pulses = pairs
        .iter()
        .map(|pair| pulse::emit(context, &pair.x_sequence, rng))
        .collect();

    Ok(RbSequences {
        mean_word_length: context.decomposition().mean_length(),
        pairs,
        i_pulses,
        x_pulses,
    })
}

/// Builds the context, generates the sequences of `config` and writes both
/// sequence files.
pub fn run(config: &RbConfig) -> Result<RbSequences> {
    let plan = config.plan()?;
    let context = RbContext::new(config.enumeration)?;
    let mut rng = config.rng();
    let sequences = generate(&context, &plan, &mut rng)?;
    writer::write_files(
        &config.output_paths(),
        &sequences.i_pulses,
        &sequences.x_pulses,
    )?;
    Ok(sequences)
}
