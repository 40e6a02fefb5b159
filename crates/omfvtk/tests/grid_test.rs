//! Property tests for the grid builders.

use omfvtk::*;
use proptest::prelude::*;

fn tensors() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    let axis = proptest::collection::vec(0.1..10.0f64, 1..6);
    (axis.clone(), axis.clone(), axis)
}

proptest! {
    #[test]
    fn prop_representations_share_counts((tu, tv, tw) in tensors()) {
        let axis_aligned = VolumeGridGeometry {
            tensor_u: tu.clone(),
            tensor_v: tv.clone(),
            tensor_w: tw.clone(),
            ..Default::default()
        };
        let rotated = VolumeGridGeometry {
            axis_u: DVec3::new(1.0, 1.0, 0.0),
            axis_v: DVec3::new(0.0, 0.0, 1.0),
            axis_w: DVec3::new(1.0, -1.0, 0.0),
            tensor_u: tu,
            tensor_v: tv,
            tensor_w: tw,
            ..Default::default()
        };

        let a = volume_grid_geom_to_vtk(&axis_aligned, DVec3::ZERO).unwrap();
        let b = volume_grid_geom_to_vtk(&rotated, DVec3::ZERO).unwrap();

        prop_assert!(matches!(a, DataSet::RectilinearGrid(_)));
        prop_assert!(matches!(b, DataSet::StructuredGrid(_)));
        prop_assert_eq!(a.num_points(), b.num_points());
        prop_assert_eq!(a.num_cells(), b.num_cells());
    }

    #[test]
    fn prop_cell_reorder_is_a_permutation(
        nu in 1usize..5,
        nv in 1usize..5,
        nw in 1usize..5,
    ) {
        let values: Vec<f64> = (0..nu * nv * nw).map(|i| i as f64).collect();
        let reordered = reorder_cell_values(&values, (nu, nv, nw));

        let mut sorted = reordered.clone();
        sorted.sort_by(f64::total_cmp);
        prop_assert_eq!(sorted, values);
    }

    #[test]
    fn prop_grid_coordinates_spacing(origin in -100.0..100.0f64, widths in proptest::collection::vec(0.0..10.0f64, 1..32)) {
        let coords = grid_coordinates(origin, &widths);
        for (i, w) in widths.iter().enumerate() {
            prop_assert!((coords[i + 1] - coords[i] - w).abs() < 1e-9);
        }
    }
}
