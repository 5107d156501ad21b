// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::Write;

use clap::ValueEnum;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    clifford::{CLIFFORD_COUNT, Clifford},
    error::{Error, Result},
    generator::{Generator, GeneratorSet},
    multiplication::MultiplicationTable,
};

/// Longest generator word considered by the search.
pub const MAX_WORD_LENGTH: usize = 4;

/// A sequence of generators, applied in order.
pub type GeneratorWord = SmallVec<[Generator; MAX_WORD_LENGTH]>;

/// Order in which candidate words of one length are visited. Words are always
/// visited shortest first; among equally long words the first one reaching an
/// element wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Enumeration {
    /// Every ordered tuple of catalogue entries, repeats allowed, in
    /// lexicographic order of catalogue positions.
    #[default]
    WithRepetition,
    /// Ordered tuples that use each catalogue position at most once, in
    /// lexicographic order. Entries sharing an element (the two `Xp|Xm`
    /// slots) can still appear together. Reproduces the decompositions of
    /// the legacy pulse tables.
    DistinctSlots,
}

impl Enumeration {
    fn admits(self, word: &[Generator]) -> bool {
        match self {
            Self::WithRepetition => true,
            Self::DistinctSlots => word.iter().all_unique(),
        }
    }
}

/// The chosen generator word for every group element.
#[derive(Clone, Debug)]
pub struct Decomposition {
    words: Vec<GeneratorWord>,
    enumeration: Enumeration,
}

impl Decomposition {
    /// Visits words of length 1 through [`MAX_WORD_LENGTH`] and keeps, for
    /// each element, the first word whose product is that element.
    pub fn search(
        table: &MultiplicationTable,
        generators: &GeneratorSet,
        enumeration: Enumeration,
    ) -> Result<Self> {
        let mut found: Vec<Option<GeneratorWord>> = vec![None; CLIFFORD_COUNT];
        let mut remaining = CLIFFORD_COUNT;

        'search: for length in 1..=MAX_WORD_LENGTH {
            let words = std::iter::repeat_n(generators.generators(), length)
                .multi_cartesian_product()
                .filter(|word| enumeration.admits(word));
            for word in words {
                let product = table.compose(word.iter().map(|g| generators.clifford(*g)));
                let slot = &mut found[product.index()];
                if slot.is_none() {
                    *slot = Some(GeneratorWord::from_vec(word));
                    remaining -= 1;
                    if remaining == 0 {
                        break 'search;
                    }
                }
            }
        }

        let words = found
            .into_iter()
            .zip(Clifford::all())
            .map(|(word, clifford)| {
                word.ok_or(Error::UnreachableClifford {
                    clifford,
                    max_length: MAX_WORD_LENGTH,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let decomposition = Self { words, enumeration };
        debug!(
            "decomposed {CLIFFORD_COUNT} Cliffords ({enumeration:?}):\n{}",
            decomposition.describe(generators)
        );
        Ok(decomposition)
    }

    #[must_use]
    pub fn word(&self, clifford: Clifford) -> &[Generator] {
        &self.words[clifford.index()]
    }

    #[must_use]
    pub fn enumeration(&self) -> Enumeration {
        self.enumeration
    }

    /// Average number of generators per element.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_length(&self) -> f64 {
        let total: usize = self.words.iter().map(SmallVec::len).sum();
        total as f64 / CLIFFORD_COUNT as f64
    }

    /// One line per element: its id followed by the pulses of its word.
    #[must_use]
    pub fn describe(&self, generators: &GeneratorSet) -> String {
        let mut out = String::new();
        for clifford in Clifford::all() {
            let word = self
                .word(clifford)
                .iter()
                .map(|generator| generators.describe(*generator))
                .join(" ");
            let _ = writeln!(out, "{clifford}: {word}");
        }
        out
    }
}
