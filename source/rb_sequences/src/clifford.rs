// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The single-qubit Clifford group as 24 rotations of the Bloch sphere.
//!
//! Each element is backed by a 2×2 unitary `U(n, θ) = cos(θ/2)·I − i·sin(θ/2)·(n·σ)`.
//! Two unitaries that differ only by a global phase describe the same physical
//! operation, so element identity is decided by [`OverlapResolver`] rather than
//! by comparing matrix entries.

#[cfg(test)]
mod tests;

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{self, Display};

use ndarray::{Array2, array};
use num_complex::Complex;
use rand::{
    Rng,
    distributions::{Distribution, Standard},
};
use serde::Serialize;

use crate::error::{Error, Result};

/// Number of elements in the single-qubit Clifford group.
pub const CLIFFORD_COUNT: usize = 24;

/// The inverse of each element, indexed by element id.
const INVERSE_MAP: [usize; CLIFFORD_COUNT] = [
    0, 3, 2, 1, 6, 5, 4, 9, 8, 7, 10, 11, 12, 13, 14, 15, 17, 16, 19, 18, 21, 20, 23, 22,
];

/// Overlaps closer than this are treated as a tie.
const OVERLAP_TOLERANCE: f64 = 1e-6;

/// An element of the single-qubit Clifford group, identified by its id in `[0, 24)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Clifford(usize);

impl Clifford {
    pub const IDENTITY: Self = Self(0);

    /// The π rotation about X, the reference element of X-flavored sequences.
    pub const X: Self = Self(2);

    /// Element with a literal id, checked at compile time in const contexts.
    pub(crate) const fn from_const(id: usize) -> Self {
        assert!(id < CLIFFORD_COUNT, "Clifford id out of range");
        Self(id)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self(INVERSE_MAP[self.0])
    }

    /// Iterates over all 24 elements in id order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..CLIFFORD_COUNT).map(Self)
    }
}

impl TryFrom<usize> for Clifford {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < CLIFFORD_COUNT {
            Ok(Self(value))
        } else {
            Err(Error::CliffordOutOfRange(value))
        }
    }
}

impl Display for Clifford {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Uniform sampling over the whole group.
impl Distribution<Clifford> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Clifford {
        Clifford(rng.gen_range(0..CLIFFORD_COUNT))
    }
}

/// A rotation by `angle` radians about `axis` (not necessarily normalized).
#[derive(Clone, Copy, Debug)]
struct Rotation {
    axis: [f64; 3],
    angle: f64,
}

impl Rotation {
    const fn new(axis: [f64; 3], angle: f64) -> Self {
        Self { axis, angle }
    }

    fn unitary(self) -> Array2<Complex<f64>> {
        let [x, y, z] = self.axis;
        let norm = (x * x + y * y + z * z).sqrt();
        let (x, y, z) = (x / norm, y / norm, z / norm);
        let (sin, cos) = (self.angle / 2.0).sin_cos();
        array![
            [Complex::new(cos, -sin * z), Complex::new(-sin * y, -sin * x)],
            [Complex::new(sin * y, -sin * x), Complex::new(cos, sin * z)],
        ]
    }
}

const X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];
const Y_AXIS: [f64; 3] = [0.0, 1.0, 0.0];
const Z_AXIS: [f64; 3] = [0.0, 0.0, 1.0];
const THIRD_TURN: f64 = 2.0 * PI / 3.0;

/// Rotation defining each element, indexed by element id.
const ROTATIONS: [Rotation; CLIFFORD_COUNT] = [
    Rotation::new(X_AXIS, 0.0),
    // Quarter turns about the Pauli axes.
    Rotation::new(X_AXIS, FRAC_PI_2),
    Rotation::new(X_AXIS, PI),
    Rotation::new(X_AXIS, 3.0 * FRAC_PI_2),
    Rotation::new(Y_AXIS, FRAC_PI_2),
    Rotation::new(Y_AXIS, PI),
    Rotation::new(Y_AXIS, 3.0 * FRAC_PI_2),
    Rotation::new(Z_AXIS, FRAC_PI_2),
    Rotation::new(Z_AXIS, PI),
    Rotation::new(Z_AXIS, 3.0 * FRAC_PI_2),
    // Half turns about the face diagonals.
    Rotation::new([1.0, 1.0, 0.0], PI),
    Rotation::new([1.0, -1.0, 0.0], PI),
    Rotation::new([1.0, 0.0, 1.0], PI),
    Rotation::new([1.0, 0.0, -1.0], PI),
    Rotation::new([0.0, 1.0, 1.0], PI),
    Rotation::new([0.0, 1.0, -1.0], PI),
    // Third turns about the body diagonals.
    Rotation::new([1.0, 1.0, 1.0], THIRD_TURN),
    Rotation::new([1.0, 1.0, 1.0], 2.0 * THIRD_TURN),
    Rotation::new([1.0, -1.0, 1.0], THIRD_TURN),
    Rotation::new([1.0, -1.0, 1.0], 2.0 * THIRD_TURN),
    Rotation::new([1.0, 1.0, -1.0], THIRD_TURN),
    Rotation::new([1.0, 1.0, -1.0], 2.0 * THIRD_TURN),
    Rotation::new([-1.0, 1.0, 1.0], THIRD_TURN),
    Rotation::new([-1.0, 1.0, 1.0], 2.0 * THIRD_TURN),
];

/// The canonical unitary of every group element.
#[derive(Clone, Debug)]
pub struct CliffordGroup {
    unitaries: Vec<Array2<Complex<f64>>>,
}

impl Default for CliffordGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CliffordGroup {
    #[must_use]
    pub fn new() -> Self {
        Self {
            unitaries: ROTATIONS.iter().map(|rotation| rotation.unitary()).collect(),
        }
    }

    #[must_use]
    pub fn unitary(&self, clifford: Clifford) -> &Array2<Complex<f64>> {
        &self.unitaries[clifford.0]
    }

    /// The unitary of applying `first` and then `second`.
    #[must_use]
    pub fn product(&self, first: Clifford, second: Clifford) -> Array2<Complex<f64>> {
        self.unitary(second).dot(self.unitary(first))
    }
}

/// Resolves a unitary to the group element it equals up to global phase.
///
/// The candidate maximizing `|trace(M† · U)|` wins. The resolver assumes the
/// maximum is unique; when the two best candidates are within tolerance of
/// each other it reports [`Error::DegenerateOverlap`] instead of picking one.
pub struct OverlapResolver<'a> {
    group: &'a CliffordGroup,
}

impl<'a> OverlapResolver<'a> {
    #[must_use]
    pub fn new(group: &'a CliffordGroup) -> Self {
        Self { group }
    }

    /// Phase-insensitive overlap `|trace(M† · U)|` between two unitaries.
    #[must_use]
    pub fn overlap(unitary: &Array2<Complex<f64>>, candidate: &Array2<Complex<f64>>) -> f64 {
        let adjoint = unitary.t().map(Complex::<f64>::conj);
        adjoint.dot(candidate).diag().sum().norm()
    }

    pub fn resolve(&self, unitary: &Array2<Complex<f64>>) -> Result<Clifford> {
        let mut best = (Clifford::IDENTITY, f64::NEG_INFINITY);
        let mut runner_up = (Clifford::IDENTITY, f64::NEG_INFINITY);
        for candidate in Clifford::all() {
            let overlap = Self::overlap(unitary, self.group.unitary(candidate));
            if overlap > best.1 {
                runner_up = best;
                best = (candidate, overlap);
            } else if overlap > runner_up.1 {
                runner_up = (candidate, overlap);
            }
        }

        if best.1 - runner_up.1 < OVERLAP_TOLERANCE {
            return Err(Error::DegenerateOverlap {
                first: best.0,
                second: runner_up.0,
                best: best.1,
                runner_up: runner_up.1,
            });
        }
        Ok(best.0)
    }
}
