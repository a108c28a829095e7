use approx::assert_abs_diff_eq;
use distance::{DistanceEngine, DistanceError, SphereSet, Timed, Variant};
use ndarray::array;

/// Five spheres on integer coordinates chosen so most distances are exact.
fn grid_spheres() -> SphereSet {
    SphereSet::from_centres(
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [3.0, 4.0, 0.0],
        ],
        1.0,
    )
}

#[test]
fn grid_layout_gives_known_lower_triangle() {
    let expected = array![
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [2.0, 17.0_f64.sqrt() - 2.0, 3.0, 0.0, 0.0],
        [3.0, 20.0_f64.sqrt() - 2.0, 2.0, 1.0, 0.0],
    ];
    for variant in Variant::ALL {
        let d = variant.distances(&grid_spheres()).unwrap();
        for i in 0..5 {
            for j in 0..i {
                assert_abs_diff_eq!(d[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn touching_spheres_are_exactly_zero_apart() {
    for variant in Variant::ALL {
        let d = variant.distances(&grid_spheres()).unwrap();
        assert_eq!(d[[2, 1]], 0.0, "{variant}");
    }
}

#[test]
fn full_variants_are_symmetric_and_triangular_ones_are_not_populated_above() {
    let spheres = grid_spheres();
    for variant in Variant::ALL {
        let d = variant.distances(&spheres).unwrap();
        for i in 0..5 {
            for j in 0..i {
                if variant.fills_upper_triangle() {
                    assert_abs_diff_eq!(d[[j, i]], d[[i, j]], epsilon = 1e-12);
                } else {
                    assert_eq!(d[[j, i]], 0.0, "{variant} wrote ({j}, {i})");
                }
            }
        }
    }
}

#[test]
fn centre_distance_is_symmetric() {
    let spheres = SphereSet::from_centres(
        &[[0.1, 2.3, 4.5], [6.7, 8.9, 1.2], [3.4, 5.6, 7.8]],
        0.5,
    );
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(spheres.centre_distance(i, j), spheres.centre_distance(j, i));
        }
        assert_eq!(spheres.centre_distance(i, i), 0.0);
    }
}

#[test]
fn overlapping_pair_is_negative_and_separated_pair_is_not() {
    let overlapping = SphereSet::from_centres(&[[0.0, 0.0, 0.0], [1.5, 0.0, 0.0]], 1.0);
    let separated = SphereSet::from_centres(&[[0.0, 0.0, 0.0], [0.0, 2.5, 0.0]], 1.0);
    for variant in Variant::ALL {
        assert!(variant.distances(&overlapping).unwrap()[[1, 0]] < 0.0);
        assert!(variant.distances(&separated).unwrap()[[1, 0]] >= 0.0);
    }
}

#[test]
fn shape_mismatch_fails_before_computing() {
    let spheres = SphereSet::new(
        array![0.0, 1.0, 2.0, 3.0, 4.0],
        array![0.0, 1.0, 2.0, 3.0, 4.0],
        array![0.0, 1.0, 2.0, 3.0],
        1.0,
    );
    for variant in Variant::ALL {
        assert_eq!(
            Timed::new(variant).distances(&spheres),
            Err(DistanceError::ShapeMismatch { x: 5, y: 5, z: 4 })
        );
    }
}

#[test]
fn single_sphere_gives_single_zero() {
    let spheres = SphereSet::from_centres(&[[1.0, 2.0, 3.0]], 1.0);
    for variant in Variant::ALL {
        assert_eq!(variant.distances(&spheres).unwrap(), array![[0.0]]);
    }
}
