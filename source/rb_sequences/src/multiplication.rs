// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::debug;

use crate::{
    clifford::{CLIFFORD_COUNT, Clifford, CliffordGroup, OverlapResolver},
    error::{Error, Result},
};

/// The group multiplication table.
///
/// Arguments are in temporal order: `apply(first, second)` is the element
/// obtained by applying `first` and then `second`, whose unitary is
/// `U(second) · U(first)`.
#[derive(Clone, Debug)]
pub struct MultiplicationTable {
    products: [[Clifford; CLIFFORD_COUNT]; CLIFFORD_COUNT],
}

impl MultiplicationTable {
    /// Resolves every pairwise product of the group and checks the result
    /// against the inverse map.
    pub fn build(group: &CliffordGroup) -> Result<Self> {
        let resolver = OverlapResolver::new(group);
        let mut products = [[Clifford::IDENTITY; CLIFFORD_COUNT]; CLIFFORD_COUNT];
        for first in Clifford::all() {
            for second in Clifford::all() {
                products[first.index()][second.index()] =
                    resolver.resolve(&group.product(first, second))?;
            }
        }

        let table = Self { products };
        table.check_inverses()?;
        debug!("built {CLIFFORD_COUNT}x{CLIFFORD_COUNT} Clifford multiplication table");
        Ok(table)
    }

    fn check_inverses(&self) -> Result<()> {
        for clifford in Clifford::all() {
            let inverse = clifford.inverse();
            let product = self.apply(clifford, inverse);
            if product != Clifford::IDENTITY {
                return Err(Error::InverseMismatch {
                    clifford,
                    inverse,
                    product,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn apply(&self, first: Clifford, second: Clifford) -> Clifford {
        self.products[first.index()][second.index()]
    }

    /// Folds `apply` over `sequence` in temporal order. An empty sequence
    /// composes to the identity.
    pub fn compose(&self, sequence: impl IntoIterator<Item = Clifford>) -> Clifford {
        sequence
            .into_iter()
            .fold(Clifford::IDENTITY, |acc, next| self.apply(acc, next))
    }
}
