use crate::{DistanceError, DistanceMatrix, SphereSet};

/// Scalar double loop over every ordered pair `(i, j)`.
///
/// Evaluates both halves of the symmetric matrix and branches on the
/// diagonal, which is written as zero rather than computed.
pub fn handle_full_loop(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if i == j {
                d[[i, j]] = 0.0;
            } else {
                d[[i, j]] = ((x[i] - x[j]).powi(2) + (y[i] - y[j]).powi(2) + (z[i] - z[j]).powi(2))
                    .sqrt()
                    - contact;
            }
        }
    }
    Ok(d)
}
