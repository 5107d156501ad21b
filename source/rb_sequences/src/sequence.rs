// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{self, Display};

use rand::{Rng, distributions::Standard};
use serde::Serialize;

use crate::{
    clifford::Clifford,
    context::RbContext,
    error::{Error, Result},
    multiplication::MultiplicationTable,
};

/// The element a whole sequence is expected to compose to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Flavor {
    /// The sequence undoes itself.
    Identity,
    /// The sequence ends in a π rotation about X.
    X,
}

impl Flavor {
    #[must_use]
    pub fn target(self) -> Clifford {
        match self {
            Self::Identity => Clifford::IDENTITY,
            Self::X => Clifford::X,
        }
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("I"),
            Self::X => f.write_str("X"),
        }
    }
}

/// Which sequences to draw: `randomizations` independent sequences for each
/// length, visited in ascending length order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePlan {
    lengths: Vec<usize>,
    randomizations: usize,
}

impl SequencePlan {
    /// Sorts and de-duplicates `lengths`. Every length counts the terminating
    /// element, so it must be at least 1.
    pub fn new(lengths: impl IntoIterator<Item = usize>, randomizations: usize) -> Result<Self> {
        let mut lengths: Vec<usize> = lengths.into_iter().collect();
        if lengths.contains(&0) {
            return Err(Error::InvalidSequenceLength(0));
        }
        lengths.sort_unstable();
        lengths.dedup();
        Ok(Self {
            lengths,
            randomizations,
        })
    }

    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    #[must_use]
    pub fn randomizations(&self) -> usize {
        self.randomizations
    }

    /// Total number of sequence pairs in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lengths.len() * self.randomizations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(length, randomization)` for every draw, in output row order.
    pub fn draws(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lengths
            .iter()
            .flat_map(|&length| (0..self.randomizations).map(move |index| (length, index)))
    }
}

/// Two sequences sharing one random prefix: one terminated by the inverse of
/// the prefix and one terminated by that inverse followed by X.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequencePair {
    pub length: usize,
    pub randomization: usize,
    pub i_sequence: Vec<Clifford>,
    pub x_sequence: Vec<Clifford>,
}

impl SequencePair {
    /// Appends both terminating elements to `prefix`.
    #[must_use]
    pub fn from_prefix(
        table: &MultiplicationTable,
        randomization: usize,
        prefix: Vec<Clifford>,
    ) -> Self {
        let inverse = table.compose(prefix.iter().copied()).inverse();
        let inverse_x = table.apply(inverse, Clifford::X);

        let mut i_sequence = prefix;
        let mut x_sequence = i_sequence.clone();
        i_sequence.push(inverse);
        x_sequence.push(inverse_x);

        Self {
            length: i_sequence.len(),
            randomization,
            i_sequence,
            x_sequence,
        }
    }

    #[must_use]
    pub fn sequence(&self, flavor: Flavor) -> &[Clifford] {
        match flavor {
            Flavor::Identity => &self.i_sequence,
            Flavor::X => &self.x_sequence,
        }
    }

    /// Checks that both sequences compose to their flavor's target.
    pub fn verify(&self, table: &MultiplicationTable) -> Result<()> {
        for flavor in [Flavor::Identity, Flavor::X] {
            let product = table.compose(self.sequence(flavor).iter().copied());
            if product != flavor.target() {
                return Err(Error::UnsoundSequence {
                    flavor,
                    length: self.length,
                    randomization: self.randomization,
                    product,
                });
            }
        }
        Ok(())
    }
}

/// Draws `length - 1` uniformly random elements and terminates them.
pub fn synthesize_pair<R: Rng + ?Sized>(
    context: &RbContext,
    length: usize,
    randomization: usize,
    rng: &mut R,
) -> SequencePair {
    let prefix = (1..length).map(|_| rng.sample(Standard)).collect();
    SequencePair::from_prefix(context.table(), randomization, prefix)
}

/// Draws every pair of `plan`, in row order.
pub fn synthesize<R: Rng + ?Sized>(
    context: &RbContext,
    plan: &SequencePlan,
    rng: &mut R,
) -> Vec<SequencePair> {
    plan.draws()
        .map(|(length, randomization)| synthesize_pair(context, length, randomization, rng))
        .collect()
}
