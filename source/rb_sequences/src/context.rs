// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::info;

use crate::{
    clifford::CliffordGroup,
    decomposition::{Decomposition, Enumeration},
    error::Result,
    generator::GeneratorSet,
    multiplication::MultiplicationTable,
};

/// The immutable tables shared by sequence synthesis and pulse emission.
///
/// Built once per run and passed by reference; nothing in it changes after
/// construction.
#[derive(Clone, Debug)]
pub struct RbContext {
    group: CliffordGroup,
    table: MultiplicationTable,
    generators: GeneratorSet,
    decomposition: Decomposition,
}

impl RbContext {
    /// Builds the context for the standard generator catalogue.
    pub fn new(enumeration: Enumeration) -> Result<Self> {
        Self::with_generators(GeneratorSet::standard(), enumeration)
    }

    pub fn with_generators(generators: GeneratorSet, enumeration: Enumeration) -> Result<Self> {
        generators.validate()?;
        let group = CliffordGroup::new();
        let table = MultiplicationTable::build(&group)?;
        let decomposition = Decomposition::search(&table, &generators, enumeration)?;
        info!(
            "Mean number of generators per Clifford is {}",
            decomposition.mean_length()
        );
        Ok(Self {
            group,
            table,
            generators,
            decomposition,
        })
    }

    #[must_use]
    pub fn group(&self) -> &CliffordGroup {
        &self.group
    }

    #[must_use]
    pub fn table(&self) -> &MultiplicationTable {
        &self.table
    }

    #[must_use]
    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    #[must_use]
    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }
}
