use crate::{CollisionConfig, HarnessError};
use distance::{DistanceEngine, DistanceMatrix, SphereSet, Variant};
use ndarray::Array2;

/// Overlapping spheres found in a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    /// `true` wherever the distance entry is negative.
    pub overlaps: Array2<bool>,
    /// `(i, j)` of every `true` entry, in row-major order.
    pub pairs: Vec<(usize, usize)>,
}

impl CollisionReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Marks every negative entry of `d` as a collision. `d` is only read.
///
/// Triangular matrices report each colliding pair once, as `(i, j)` with
/// `j < i`; full matrices report it in both orders.
#[must_use]
pub fn detect_collisions(d: &DistanceMatrix) -> CollisionReport {
    let overlaps = d.mapv(|v| v < 0.0);
    let pairs = overlaps
        .indexed_iter()
        .filter_map(|(index, &hit)| hit.then_some(index))
        .collect();
    CollisionReport { overlaps, pairs }
}

#[derive(Debug, Clone)]
pub struct CollisionRun {
    pub spheres: SphereSet,
    pub variant: Variant,
    pub distances: DistanceMatrix,
    pub report: CollisionReport,
}

/// Draws the configured scenario, computes its distances and lists the
/// colliding pairs.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] or the engine's error.
pub fn run_collision(config: &CollisionConfig) -> Result<CollisionRun, HarnessError> {
    config.validate()?;
    let spheres = config.scenario.spheres();
    let distances = config.variant.distances(&spheres)?;
    let report = detect_collisions(&distances);
    tracing::info!(
        variant = %config.variant,
        spheres = config.scenario.num_spheres,
        collisions = report.len(),
        "collision scan finished"
    );
    Ok(CollisionRun {
        spheres,
        variant: config.variant,
        distances,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn negative_entries_become_pairs() {
        let d = array![
            [0.0, 0.0, 0.0],
            [-0.5, 0.0, 0.0],
            [0.0, -1e-9, 0.0],
        ];
        let report = detect_collisions(&d);
        assert_eq!(report.pairs, vec![(1, 0), (2, 1)]);
        assert_eq!(
            report.overlaps,
            array![[false, false, false], [true, false, false], [false, true, false]]
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn zero_is_touching_not_overlapping() {
        let report = detect_collisions(&array![[0.0, 0.0], [0.0, 0.0]]);
        assert!(report.is_empty());
    }

    #[test]
    fn full_matrix_reports_both_orders() {
        let d = array![[0.0, -1.0], [-1.0, 0.0]];
        assert_eq!(detect_collisions(&d).pairs, vec![(0, 1), (1, 0)]);
    }
}
