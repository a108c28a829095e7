use crate::{DistanceError, DistanceMatrix, SphereSet};
use ndarray::s;

/// One bulk array expression per row, over the spheres before it (`j < i`).
pub fn handle_row_triangular(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for i in 0..n {
        let squared = (x[i] - &x.slice(s![..i])).mapv_into(|v| v.powi(2))
            + (y[i] - &y.slice(s![..i])).mapv_into(|v| v.powi(2))
            + (z[i] - &z.slice(s![..i])).mapv_into(|v| v.powi(2));
        d.slice_mut(s![i, ..i]).assign(&(squared.mapv_into(f64::sqrt) - contact));
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_strict_lower_triangle_is_written() {
        let spheres = SphereSet::from_centres(
            &[[0.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, 0.0, 2.0], [1.0, 0.0, 0.0]],
            0.5,
        );
        let d = handle_row_triangular(&spheres).unwrap();

        assert_eq!(d[[1, 0]], 4.0);
        assert_eq!(d[[2, 0]], 1.0);
        assert_eq!(d[[3, 0]], 0.0);
        assert_eq!(d.row(0).sum(), 0.0);
        assert_eq!(d[[1, 2]], 0.0);
        assert_eq!(d[[2, 3]], 0.0);
    }
}
