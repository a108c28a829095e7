use crate::{HarnessError, ValidationConfig};
use distance::{DistanceEngine, DistanceMatrix, SphereSet, Variant};

/// Largest absolute difference between `a` and `b` over entries with `j < i`.
///
/// Upper triangle and diagonal are ignored since variants populate them
/// differently. A NaN anywhere in the compared region yields NaN, and so do
/// matrices of different shapes.
#[must_use]
pub fn max_lower_triangle_diff(a: &DistanceMatrix, b: &DistanceMatrix) -> f64 {
    if a.dim() != b.dim() {
        return f64::NAN;
    }
    let mut max = 0.0_f64;
    for ((i, j), &value) in a.indexed_iter() {
        if j >= i {
            continue;
        }
        let diff = (value - b[[i, j]]).abs();
        if diff.is_nan() {
            return f64::NAN;
        }
        max = max.max(diff);
    }
    max
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantComparison {
    pub first: Variant,
    pub second: Variant,
    pub max_abs_diff: f64,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub spheres: SphereSet,
    pub matrices: Vec<(Variant, DistanceMatrix)>,
    pub comparisons: Vec<VariantComparison>,
    pub tolerance: f64,
}

/// Compares every pair of matrices, failing on the first pair whose
/// difference is not below `tolerance`.
///
/// # Errors
///
/// Returns [`HarnessError::MatrixShape`] if two matrices differ in shape, or
/// [`HarnessError::ToleranceViolation`] naming the offending pair.
pub fn compare_all(
    matrices: &[(Variant, DistanceMatrix)],
    tolerance: f64,
) -> Result<Vec<VariantComparison>, HarnessError> {
    let mut comparisons = Vec::with_capacity(matrices.len() * matrices.len().saturating_sub(1) / 2);
    for (index, (first, a)) in matrices.iter().enumerate() {
        for (second, b) in &matrices[index + 1..] {
            if a.dim() != b.dim() {
                return Err(HarnessError::MatrixShape {
                    first: *first,
                    second: *second,
                    first_dim: a.dim(),
                    second_dim: b.dim(),
                });
            }
            let max_abs_diff = max_lower_triangle_diff(a, b);
            if max_abs_diff.is_nan() || max_abs_diff >= tolerance {
                tracing::error!(%first, %second, max_abs_diff, tolerance, "variants disagree");
                return Err(HarnessError::ToleranceViolation {
                    first: *first,
                    second: *second,
                    max_abs_diff,
                    tolerance,
                });
            }
            comparisons.push(VariantComparison {
                first: *first,
                second: *second,
                max_abs_diff,
            });
        }
    }
    Ok(comparisons)
}

/// Runs all six variants on the configured scenario and cross-checks them.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`], an engine error, or
/// [`HarnessError::ToleranceViolation`] if any two variants disagree.
pub fn run_validation(config: &ValidationConfig) -> Result<ValidationReport, HarnessError> {
    config.validate()?;
    let spheres = config.scenario.spheres();

    let matrices = Variant::ALL
        .iter()
        .map(|&variant| Ok((variant, variant.distances(&spheres)?)))
        .collect::<Result<Vec<_>, HarnessError>>()?;
    let comparisons = compare_all(&matrices, config.tolerance)?;
    tracing::info!(
        pairs = comparisons.len(),
        tolerance = config.tolerance,
        "all variants agree"
    );

    Ok(ValidationReport {
        spheres,
        matrices,
        comparisons,
        tolerance: config.tolerance,
    })
}
