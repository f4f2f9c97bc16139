use std::collections::HashSet;

use mask_outlines::{LatticeTransform, MaskOutliner, OccupancyGrid};

#[test]
fn test_point_offset_outside_margin_is_none() {
    let grid = OccupancyGrid::new(100, 2);
    assert_eq!(grid.point_offset(-10, -10), None);
    assert_eq!(grid.point_offset(-3, 50), None);
    assert_eq!(grid.point_offset(50, 102), None);
}

#[test]
fn test_point_offset_is_unique_in_range() {
    let grid = OccupancyGrid::new(10, 1);
    let side = grid.side() as usize;

    let mut seen = HashSet::new();
    for y in -1..11 {
        for x in -1..11 {
            let offset = grid
                .point_offset(x, y)
                .unwrap_or_else(|| panic!("({x}, {y}) should be in range"));
            assert!(offset < side * side);
            assert!(seen.insert(offset), "offset collision at ({x}, {y})");
        }
    }
    assert_eq!(seen.len(), side * side);
}

#[test]
fn test_bit_round_trip_through_offsets() {
    let mut grid = OccupancyGrid::new(10, 2);
    let offset = grid.point_offset(-2, -2).unwrap();

    assert!(!grid.get(offset));
    grid.set(offset, true);
    assert!(grid.get(offset));
    assert!(grid.is_occupied(-2, -2));
    grid.set(offset, false);
    assert!(!grid.is_occupied(-2, -2));
}

#[test]
fn test_fill_rect_skips_out_of_range_cells() {
    let mut grid = OccupancyGrid::new(10, 2);
    grid.fill_rect(-1000, 1000, 5, 6);
    // One full padded row of cells, nothing more.
    assert_eq!(grid.occupied_cells(), grid.side() as usize);
}

#[test]
fn test_default_transform_rounds_halves_away_from_zero() {
    let mask = MaskOutliner::new(10, 1);
    assert_eq!(mask.map_coord(0.5, 1.5), (1, 2));
    assert_eq!(mask.map_coord(-0.5, -1.5), (-1, -2));
    assert_eq!(mask.map_coord(3.49, -3.49), (3, -3));
}

#[test]
fn test_transform_feeds_lattice_painting() {
    struct Decimeters;
    impl LatticeTransform for Decimeters {
        fn map_to_lattice(&self, x: f64, y: f64) -> (i32, i32) {
            ((x * 10.0).round() as i32, (y * 10.0).round() as i32)
        }
    }

    let mut mask = MaskOutliner::with_transform(100, 2, Box::new(Decimeters));
    let (x, y) = mask.map_coord(1.23, 4.56);
    assert_eq!((x, y), (12, 46));

    let offset = mask.point_offset(x, y).unwrap();
    mask.grid_mut().set(offset, true);
    assert_eq!(mask.trace_outlines().len(), 1);
}
