use crate::{DistanceError, DistanceMatrix, SphereSet};
use ndarray::s;

/// Same traversal as [`super::handle_row_triangular`], with the squares
/// written as explicit `powf(2.0)` calls instead of an integer power.
pub fn handle_row_triangular_powf(spheres: &SphereSet) -> Result<DistanceMatrix, DistanceError> {
    let n = spheres.checked_len()?;
    let (x, y, z) = (&spheres.x, &spheres.y, &spheres.z);
    let contact = spheres.contact_distance();

    let mut d = DistanceMatrix::zeros((n, n));
    for i in 0..n {
        let squared = (x[i] - &x.slice(s![..i])).mapv_into(|v| v.powf(2.0))
            + (y[i] - &y.slice(s![..i])).mapv_into(|v| v.powf(2.0))
            + (z[i] - &z.slice(s![..i])).mapv_into(|v| v.powf(2.0));
        d.slice_mut(s![i, ..i]).assign(&(squared.mapv_into(f64::sqrt) - contact));
    }
    Ok(d)
}
