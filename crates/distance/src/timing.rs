//! Wall-clock timing for distance engines.
//!
//! [`timed`] measures any closure; [`Timed`] wraps a [`DistanceEngine`] so that
//! every call logs how long it took while still looking like the wrapped
//! engine (same name, same description, same output).

use crate::{DistanceEngine, DistanceError, DistanceMatrix, SphereSet};
use std::time::{Duration, Instant};

/// Runs `f`, logs `label` with the elapsed seconds and hands back both the
/// untouched result and the elapsed time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    let seconds = elapsed.as_secs_f64();
    tracing::info!(function = label, seconds, "Function={label}, Time={seconds} sec");
    (result, elapsed)
}

/// A [`DistanceEngine`] that reports its own run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timed<E> {
    inner: E,
}

impl<E: DistanceEngine> Timed<E> {
    pub const fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Like [`DistanceEngine::distances`], also returning the elapsed time.
    ///
    /// Failed calls are timed and logged too; the error is propagated after.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped engine's error unchanged.
    pub fn distances_timed(
        &self,
        spheres: &SphereSet,
    ) -> Result<(DistanceMatrix, Duration), DistanceError> {
        let (result, elapsed) = timed(self.inner.name(), || self.inner.distances(spheres));
        Ok((result?, elapsed))
    }
}

impl<E: DistanceEngine> DistanceEngine for Timed<E> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn description(&self) -> &'static str {
        self.inner.description()
    }

    fn distances(&self, spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
        self.distances_timed(spheres).map(|(d, _)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use ndarray::array;

    #[test]
    fn timed_returns_closure_result_unchanged() {
        let (value, elapsed) = timed("answer", || 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed <= Duration::from_secs(1));
    }

    #[test]
    fn wrapper_preserves_identity() {
        let wrapped = Timed::new(Variant::RowDeferredSqrt);
        assert_eq!(wrapped.name(), "row_deferred_sqrt");
        assert_eq!(wrapped.description(), Variant::RowDeferredSqrt.description());
        assert_eq!(*wrapped.inner(), Variant::RowDeferredSqrt);
        assert_eq!(wrapped.into_inner(), Variant::RowDeferredSqrt);
    }

    #[test]
    fn wrapper_output_matches_bare_engine() {
        let spheres = SphereSet::from_centres(&[[0.0, 0.0, 0.0], [1.0, 2.0, 2.0], [4.0, 0.0, 3.0]], 0.5);
        for variant in Variant::ALL {
            let bare = variant.distances(&spheres).unwrap();
            let (wrapped, _) = Timed::new(variant).distances_timed(&spheres).unwrap();
            assert_eq!(bare, wrapped, "{variant} changed under the timing wrapper");
        }
    }

    #[test]
    fn timed_reports_the_elapsed_time_it_measured() {
        let (value, elapsed) = timed("sleep", || {
            std::thread::sleep(Duration::from_millis(5));
            "done"
        });
        assert_eq!(value, "done");
        assert!(elapsed >= Duration::from_millis(5));

        let spheres = SphereSet::from_centres(&[[0.0, 0.0, 0.0]; 200], 1.0);
        let (d, elapsed) = Timed::new(Variant::FullLoop).distances_timed(&spheres).unwrap();
        assert_eq!(d.dim(), (200, 200));
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn wrapper_propagates_shape_errors() {
        let spheres = SphereSet::new(array![0.0], array![0.0, 1.0], array![0.0], 1.0);
        let err = Timed::new(Variant::FullLoop).distances(&spheres).unwrap_err();
        assert_eq!(err, DistanceError::ShapeMismatch { x: 1, y: 2, z: 1 });
    }
}
