use crate::{DistanceError, DistanceMatrix, SphereSet};
use ndarray::Axis;

/// Bulk rows of squared distances, then one square root over the matrix.
///
/// Moves the square root out of the per-row work so it is applied in a
/// single pass. As with [`super::handle_row_full`] the diagonal comes out as
/// `-2r` and is reset to zero.
pub fn handle_row_deferred_sqrt(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for (i, mut row) in d.axis_iter_mut(Axis(0)).enumerate() {
        row.assign(
            &((x[i] - x).mapv_into(|v| v.powi(2))
                + (y[i] - y).mapv_into(|v| v.powi(2))
                + (z[i] - z).mapv_into(|v| v.powi(2))),
        );
    }
    d.mapv_inplace(|squared| squared.sqrt() - contact);
    d.diag_mut().fill(0.0);
    Ok(d)
}
