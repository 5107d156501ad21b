// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use std::fmt::{self, Display};
use std::str::FromStr;

use enum_iterator::Sequence;
use itertools::Itertools;
use rand::Rng;
use serde::Serialize;

use crate::{
    clifford::Clifford,
    error::{Error, Result},
};

/// A physical pulse understood by the waveform sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize)]
pub enum PulseLabel {
    QId,
    X90p,
    X90m,
    Y90p,
    Y90m,
    Xp,
    Xm,
    Yp,
    Ym,
}

impl PulseLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QId => "QId",
            Self::X90p => "X90p",
            Self::X90m => "X90m",
            Self::Y90p => "Y90p",
            Self::Y90m => "Y90m",
            Self::Xp => "Xp",
            Self::Xm => "Xm",
            Self::Yp => "Yp",
            Self::Ym => "Ym",
        }
    }

    /// The group element this pulse implements. `Xp` and `Xm` rotate in
    /// opposite directions but agree up to global phase, likewise `Yp`/`Ym`.
    #[must_use]
    pub const fn clifford(self) -> Clifford {
        let id = match self {
            Self::QId => 0,
            Self::X90p => 1,
            Self::Xp | Self::Xm => 2,
            Self::X90m => 3,
            Self::Y90p => 4,
            Self::Yp | Self::Ym => 5,
            Self::Y90m => 6,
        };
        Clifford::from_const(id)
    }
}

impl Display for PulseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PulseLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        enum_iterator::all::<PulseLabel>()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Error::UnknownPulseLabel(s.to_string()))
    }
}

/// Index of a generator in its [`GeneratorSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generator(usize);

impl Generator {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry of the generator catalogue: the element it implements and the
/// interchangeable pulses that realize it.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorSpec {
    pub clifford: Clifford,
    pub labels: &'static [PulseLabel],
}

impl GeneratorSpec {
    #[must_use]
    pub const fn new(clifford: Clifford, labels: &'static [PulseLabel]) -> Self {
        Self { clifford, labels }
    }
}

const fn spec(clifford: usize, labels: &'static [PulseLabel]) -> GeneratorSpec {
    GeneratorSpec::new(Clifford::from_const(clifford), labels)
}

/// The physical generator set. The π rotations appear twice each; the
/// duplicate entries take part in the decomposition search like any other.
const STANDARD: [GeneratorSpec; 9] = [
    spec(0, &[PulseLabel::QId]),
    spec(1, &[PulseLabel::X90p]),
    spec(3, &[PulseLabel::X90m]),
    spec(4, &[PulseLabel::Y90p]),
    spec(6, &[PulseLabel::Y90m]),
    spec(2, &[PulseLabel::Xp, PulseLabel::Xm]),
    spec(2, &[PulseLabel::Xp, PulseLabel::Xm]),
    spec(5, &[PulseLabel::Yp, PulseLabel::Ym]),
    spec(5, &[PulseLabel::Yp, PulseLabel::Ym]),
];

/// An ordered catalogue of generators. Catalogue order fixes the order of the
/// decomposition search and therefore which of several equally short words
/// is chosen.
#[derive(Clone, Debug)]
pub struct GeneratorSet {
    specs: Vec<GeneratorSpec>,
}

impl Default for GeneratorSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl GeneratorSet {
    /// Builds a catalogue, rejecting empty catalogues, generators without
    /// labels or with more than two, and labels that do not implement their
    /// generator's element.
    pub fn new(specs: Vec<GeneratorSpec>) -> Result<Self> {
        let set = Self { specs };
        set.validate()?;
        Ok(set)
    }

    /// `QId, X90p, X90m, Y90p, Y90m, Xp|Xm, Xp|Xm, Yp|Ym, Yp|Ym`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            specs: STANDARD.to_vec(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.specs.is_empty() {
            return Err(Error::EmptyGeneratorSet);
        }
        for (generator, entry) in self.specs.iter().enumerate() {
            match entry.labels.len() {
                0 => return Err(Error::GeneratorWithoutLabels(generator)),
                1 | 2 => {}
                count => return Err(Error::TooManyLabels { generator, count }),
            }
            for label in entry.labels {
                if label.clifford() != entry.clifford {
                    return Err(Error::LabelMismatch {
                        generator,
                        label: label.as_str(),
                        expected: entry.clifford,
                        actual: label.clifford(),
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, id: usize) -> Result<Generator> {
        if id < self.specs.len() {
            Ok(Generator(id))
        } else {
            Err(Error::GeneratorOutOfRange {
                id,
                count: self.specs.len(),
            })
        }
    }

    /// All generators in catalogue order.
    pub fn generators(&self) -> impl ExactSizeIterator<Item = Generator> + Clone {
        (0..self.specs.len()).map(Generator)
    }

    #[must_use]
    pub fn clifford(&self, generator: Generator) -> Clifford {
        self.specs[generator.0].clifford
    }

    #[must_use]
    pub fn labels(&self, generator: Generator) -> &'static [PulseLabel] {
        self.specs[generator.0].labels
    }

    /// Picks one of the generator's pulses, uniformly at random when it has
    /// two. Single-label generators do not consume randomness.
    pub fn choose_label<R: Rng + ?Sized>(&self, generator: Generator, rng: &mut R) -> PulseLabel {
        match self.labels(generator) {
            [label] => *label,
            labels => labels[rng.gen_range(0..labels.len())],
        }
    }

    /// Renders a generator as its labels joined by `|`.
    #[must_use]
    pub fn describe(&self, generator: Generator) -> String {
        self.labels(generator).iter().join("|")
    }
}
