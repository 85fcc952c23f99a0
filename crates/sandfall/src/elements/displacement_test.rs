//! Regression tests: hold-or-displace must conserve displaced material.

use crate::material::MaterialKind::{self, Empty, Rock, Sand, Steam, Water};
use crate::Grid;

/// Helper: print the grid for debugging.
fn dump(grid: &Grid) {
    for y in 0..grid.height() as i32 {
        let mut row = String::new();
        for x in 0..grid.width() as i32 {
            row.push(match grid.kind_at(x, y) {
                Empty => '.',
                Water => '~',
                Sand => 'S',
                Rock => '#',
                MaterialKind::Lava => 'L',
                Steam => '*',
            });
        }
        eprintln!("y={y:2}: {row}");
    }
}

#[test]
fn sand_sinks_to_the_bottom_of_a_water_column() {
    let mut grid = Grid::with_seed(1, 4, 51).unwrap();
    grid.place(0, 1, Sand);
    grid.place(0, 2, Water);
    grid.place(0, 3, Water);
    for _ in 0..3 {
        grid.tick();
        assert_eq!(grid.count(Water), 2, "water lost during displacement");
        assert_eq!(grid.count(Sand), 1);
    }
    dump(&grid);
    assert_eq!(grid.kind_at(0, 1), Water);
    assert_eq!(grid.kind_at(0, 2), Water);
    assert_eq!(grid.kind_at(0, 3), Sand);
}

#[test]
fn water_tower_collapses_into_the_bottom_row() {
    let mut grid = Grid::with_seed(5, 4, 52).unwrap();
    for y in 1..4 {
        grid.place(2, y, Water);
    }
    for _ in 0..10 {
        grid.tick();
        assert_eq!(grid.count(Water), 3);
    }
    dump(&grid);
    let bottom = (0..5).filter(|&x| grid.kind_at(x, 3) == Water).count();
    assert_eq!(bottom, 3, "all water should end in the bottom row");
}

#[test]
fn grain_dropped_into_a_full_pool_displaces_without_loss() {
    // Rows 2 and 3 are a full pool; the extra grain forces one displaced
    // water up to row 1. Nothing may be pushed into the vanishing top row.
    let mut grid = Grid::with_seed(3, 4, 53).unwrap();
    for y in 2..4 {
        for x in 0..3 {
            grid.place(x, y, Water);
        }
    }
    grid.place(1, 1, Sand);
    for _ in 0..15 {
        grid.tick();
        assert_eq!(grid.count(Water), 6);
        assert_eq!(grid.count(Sand), 1);
    }
    dump(&grid);
    let sand_row = (0..4)
        .find(|&y| (0..3).any(|x| grid.kind_at(x, y) == Sand))
        .unwrap();
    assert!(sand_row >= 2, "grain should sink into the pool");
}

#[test]
fn rock_floor_keeps_a_mixed_stack_stable() {
    let mut grid = Grid::with_seed(4, 6, 54).unwrap();
    for x in 0..4 {
        grid.place(x, 5, Rock);
    }
    grid.place(1, 4, Sand);
    grid.place(2, 4, Water);
    for _ in 0..20 {
        grid.tick();
        assert_eq!(grid.count(Rock), 4);
        assert_eq!(grid.count(Sand), 1);
        assert_eq!(grid.count(Water), 1);
    }
    dump(&grid);
    // Everything still rests on or above the floor.
    for x in 0..4 {
        assert_eq!(grid.kind_at(x, 5), Rock);
    }
}
