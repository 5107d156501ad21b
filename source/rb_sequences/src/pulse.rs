// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

use itertools::Itertools;
use rand::Rng;
use serde::Serialize;

use crate::{
    clifford::Clifford,
    context::RbContext,
    error::{Error, Result},
    generator::PulseLabel,
};

/// The pulses played for one sequence, in order. Displays as one
/// comma-separated row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PulseSequence(pub Vec<PulseLabel>);

impl Deref for PulseSequence {
    type Target = [PulseLabel];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PulseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(","))
    }
}

impl FromStr for PulseSequence {
    type Err = Error;

    fn from_str(row: &str) -> Result<Self> {
        let row = row.trim_end_matches(['\r', '\n']);
        if row.is_empty() {
            return Ok(Self::default());
        }
        row.split(',')
            .map(str::parse::<PulseLabel>)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

/// Expands every element of `sequence` into the pulses of its generator
/// word. Generators with two equivalent pulses pick one independently at
/// every position.
pub fn emit<R: Rng + ?Sized>(
    context: &RbContext,
    sequence: &[Clifford],
    rng: &mut R,
) -> PulseSequence {
    let generators = context.generators();
    let decomposition = context.decomposition();
    PulseSequence(
        sequence
            .iter()
            .flat_map(|&clifford| decomposition.word(clifford))
            .map(|&generator| generators.choose_label(generator, rng))
            .collect(),
    )
}

/// The element implemented by playing `pulses` in order.
#[must_use]
pub fn compose_pulses(context: &RbContext, pulses: &[PulseLabel]) -> Clifford {
    context
        .table()
        .compose(pulses.iter().map(|label| label.clifford()))
}
