use crate::{DistanceError, DistanceMatrix, SphereSet};
use ndarray::Axis;

/// One bulk array expression per row, over every sphere.
///
/// The bulk formula yields `-2r` on the diagonal, so the diagonal is reset to
/// zero once all rows are written.
pub fn handle_row_full(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for (i, mut row) in d.axis_iter_mut(Axis(0)).enumerate() {
        let squared = (x[i] - x).mapv_into(|v| v.powi(2))
            + (y[i] - y).mapv_into(|v| v.powi(2))
            + (z[i] - z).mapv_into(|v| v.powi(2));
        row.assign(&(squared.mapv_into(f64::sqrt) - contact));
    }
    d.diag_mut().fill(0.0);
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rows_cover_the_whole_matrix() {
        let spheres = SphereSet::from_centres(&[[1.0, 1.0, 1.0], [1.0, 1.0, 4.0], [1.0, -3.0, 1.0]], 1.0);
        let d = handle_row_full(&spheres).unwrap();

        assert_abs_diff_eq!(d[[0, 1]], 1.0);
        assert_abs_diff_eq!(d[[1, 0]], 1.0);
        assert_abs_diff_eq!(d[[2, 0]], 2.0);
        assert_abs_diff_eq!(d[[0, 2]], 2.0);
        assert_abs_diff_eq!(d[[2, 1]], 3.0);
        assert_abs_diff_eq!(d[[1, 2]], 3.0);
    }

    #[test]
    fn diagonal_is_zero_not_minus_contact() {
        let spheres = SphereSet::from_centres(&[[0.0, 0.0, 0.0], [9.0, 9.0, 9.0]], 3.0);
        let d = handle_row_full(&spheres).unwrap();
        assert_eq!(d[[0, 0]], 0.0);
        assert_eq!(d[[1, 1]], 0.0);
    }
}
