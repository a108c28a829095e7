#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sphere Distance Engine
//!
//! Edge-to-edge distance matrices for a set of equal-radius spheres.
//!
//! Given centre coordinates `x`, `y`, `z` of `N` spheres and a shared radius,
//! every engine produces an `N x N` [`DistanceMatrix`] whose entry `(i, j)` is
//! the Euclidean distance between the two centres minus twice the radius. A
//! negative entry therefore means the two spheres overlap.
//!
//! ## Variants
//!
//! Six [`Variant`]s compute the same matrix and differ only in technique:
//!
//! | # | Variant                          | Technique                                       |
//! |---|----------------------------------|-------------------------------------------------|
//! | 1 | [`Variant::FullLoop`]            | scalar double loop, every ordered pair          |
//! | 2 | [`Variant::TriangularLoop`]      | scalar double loop, `j < i` only                |
//! | 3 | [`Variant::RowFull`]             | one bulk array expression per row               |
//! | 4 | [`Variant::RowDeferredSqrt`]     | bulk rows of squares, one square root at the end |
//! | 5 | [`Variant::RowTriangular`]       | bulk expression over `j < i` per row            |
//! | 6 | [`Variant::RowTriangularPowf`]   | as 5, squaring through an explicit power call   |
//!
//! All of them agree on the strict lower triangle (`j < i`) and report `0` on
//! the diagonal. The triangular variants leave the upper triangle at zero.
//!
//! ## Usage
//!
//! ```rust
//! use distance::{DistanceEngine, SphereSet, Timed, Variant};
//! use ndarray::array;
//!
//! let spheres = SphereSet::new(array![0.0, 3.0], array![0.0, 0.0], array![0.0, 4.0], 1.0);
//! let d = Timed::new(Variant::RowTriangular).distances(&spheres)?;
//! assert_eq!(d[[1, 0]], 3.0);
//! # Ok::<(), distance::DistanceError>(())
//! ```

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod engine;
pub mod kernels;
pub mod timing;

pub use engine::DistanceEngine;
pub use timing::{timed, Timed};

/// `N x N` matrix of edge-to-edge distances.
pub type DistanceMatrix = Array2<f64>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("coordinate shape mismatch: x has {x} elements, y has {y}, z has {z}")]
    ShapeMismatch { x: usize, y: usize, z: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown distance variant `{0}` (expected 1-6 or a variant name)")]
pub struct ParseVariantError(pub String);

/// Centres of a set of spheres sharing a single radius.
///
/// Construction does not check the coordinate lengths; every engine does so
/// through [`SphereSet::checked_len`] before computing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSet {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub z: Array1<f64>,
    pub radius: f64,
}

impl SphereSet {
    #[must_use]
    pub fn new(x: Array1<f64>, y: Array1<f64>, z: Array1<f64>, radius: f64) -> Self {
        Self { x, y, z, radius }
    }

    /// Builds a set from `[x, y, z]` centre triples.
    #[must_use]
    pub fn from_centres(centres: &[[f64; 3]], radius: f64) -> Self {
        let x = centres.iter().map(|c| c[0]).collect();
        let y = centres.iter().map(|c| c[1]).collect();
        let z = centres.iter().map(|c| c[2]).collect();
        Self { x, y, z, radius }
    }

    /// Number of spheres.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ShapeMismatch`] when the three coordinate
    /// arrays disagree in length.
    pub fn checked_len(&self) -> Result<usize, DistanceError> {
        let (x, y, z) = (self.x.len(), self.y.len(), self.z.len());
        if x == y && y == z {
            Ok(x)
        } else {
            Err(DistanceError::ShapeMismatch { x, y, z })
        }
    }

    /// Euclidean distance between the centres of spheres `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for any coordinate array.
    #[must_use]
    pub fn centre_distance(&self, i: usize, j: usize) -> f64 {
        let dx = self.x[i] - self.x[j];
        let dy = self.y[i] - self.y[j];
        let dz = self.z[i] - self.z[j];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance between two surfaces that just touch: twice the radius.
    #[must_use]
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    FullLoop,
    TriangularLoop,
    RowFull,
    RowDeferredSqrt,
    RowTriangular,
    RowTriangularPowf,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::FullLoop,
        Variant::TriangularLoop,
        Variant::RowFull,
        Variant::RowDeferredSqrt,
        Variant::RowTriangular,
        Variant::RowTriangularPowf,
    ];

    /// 1-based position in the optimisation sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Variant::FullLoop => 1,
            Variant::TriangularLoop => 2,
            Variant::RowFull => 3,
            Variant::RowDeferredSqrt => 4,
            Variant::RowTriangular => 5,
            Variant::RowTriangularPowf => 6,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.index() == index)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::FullLoop => "full_loop",
            Variant::TriangularLoop => "triangular_loop",
            Variant::RowFull => "row_full",
            Variant::RowDeferredSqrt => "row_deferred_sqrt",
            Variant::RowTriangular => "row_triangular",
            Variant::RowTriangularPowf => "row_triangular_powf",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Variant::FullLoop => "Naive scalar double loop over every pair, diagonal branch included.",
            Variant::TriangularLoop => {
                "Scalar double loop over j < i only; no branch and no redundant half."
            }
            Variant::RowFull => "One bulk array expression per row over every sphere.",
            Variant::RowDeferredSqrt => {
                "Bulk squared distances per row, a single square root over the whole matrix."
            }
            Variant::RowTriangular => "One bulk array expression per row over j < i only.",
            Variant::RowTriangularPowf => {
                "Row-triangular bulk expression squaring through an explicit power call."
            }
        }
    }

    /// Whether the variant writes the upper triangle. Triangular variants
    /// leave it at zero.
    #[must_use]
    pub const fn fills_upper_triangle(self) -> bool {
        matches!(
            self,
            Variant::FullLoop | Variant::RowFull | Variant::RowDeferredSqrt
        )
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParseVariantError(s.to_owned()));
        }
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}
