use crate::{DistanceError, DistanceMatrix, SphereSet};

/// Scalar double loop restricted to `j < i`.
///
/// The diagonal and the upper triangle are never visited and keep the zero
/// the matrix was allocated with.
pub fn handle_triangular_loop(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for i in 0..n {
        for j in 0..i {
            d[[i, j]] = ((x[i] - x[j]).powi(2) + (y[i] - y[j]).powi(2) + (z[i] - z[j]).powi(2))
                .sqrt()
                - contact;
        }
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_upper_triangle_at_zero() {
        let spheres = SphereSet::from_centres(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 12.0, 0.0]], 1.0);
        let d = handle_triangular_loop(&spheres).unwrap();

        assert_eq!(d[[1, 0]], 3.0);
        assert_eq!(d[[2, 0]], 11.0);
        assert_eq!(d[[2, 1]], 10.0);
        for i in 0..3 {
            for j in i..3 {
                assert_eq!(d[[i, j]], 0.0, "entry ({i}, {j}) should be untouched");
            }
        }
    }

    #[test]
    fn empty_set_gives_empty_matrix() {
        let spheres = SphereSet::from_centres(&[], 1.0);
        let d = handle_triangular_loop(&spheres).unwrap();
        assert_eq!(d.dim(), (0, 0));
    }
}
