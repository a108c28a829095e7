use crate::{kernels, DistanceError, DistanceMatrix, SphereSet, Variant};

/// Anything that turns a [`SphereSet`] into a [`DistanceMatrix`].
pub trait DistanceEngine {
    /// Stable identifier, used in timing and validation output.
    fn name(&self) -> &'static str;

    /// One-line summary of the technique.
    fn description(&self) -> &'static str;

    /// Computes the edge-to-edge distance matrix.
    ///
    /// The strict lower triangle holds `|c_i - c_j| - 2r` and the diagonal is
    /// zero. Whether the upper triangle is populated depends on the engine.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ShapeMismatch`] if the coordinate arrays have
    /// different lengths. Nothing is computed in that case.
    fn distances(&self, spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError>;
}

impl DistanceEngine for Variant {
    fn name(&self) -> &'static str {
        Variant::name(*self)
    }

    fn description(&self) -> &'static str {
        Variant::description(*self)
    }

    fn distances(&self, spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
        tracing::debug!(variant = self.name(), spheres = spheres.x.len(), "dispatching");
        match self {
            Variant::FullLoop => kernels::handle_full_loop(spheres),
            Variant::TriangularLoop => kernels::handle_triangular_loop(spheres),
            Variant::RowFull => kernels::handle_row_full(spheres),
            Variant::RowDeferredSqrt => kernels::handle_row_deferred_sqrt(spheres),
            Variant::RowTriangular => kernels::handle_row_triangular(spheres),
            Variant::RowTriangularPowf => kernels::handle_row_triangular_powf(spheres),
        }
    }
}

impl<E: DistanceEngine + ?Sized> DistanceEngine for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }

    fn distances(&self, spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
        (**self).distances(spheres)
    }
}
