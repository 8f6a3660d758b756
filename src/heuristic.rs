//! Distance estimates for A*.
//!
//! A heuristic is any `Fn(&Coordinate, &Coordinate) -> f64` returning a
//! non-negative estimate of the remaining cost. It must never overestimate the
//! true least cost for A* to return optimal paths. Entry surcharges only make
//! paths more expensive, so the plain distances below stay admissible on
//! weighted grids.
use crate::grid::{Coordinate, Grid};
use crate::{C, D};

/// Admissible and consistent on 4-neighbour grids.
pub fn manhattan(a: &Coordinate, b: &Coordinate) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Straight-line distance. Admissible for any movement model, but looser than
/// [octile] on 8-neighbour grids.
pub fn euclidean(a: &Coordinate, b: &Coordinate) -> f64 {
    ((a.x - b.x) as f64).hypot((a.y - b.y) as f64)
}

/// Cost of the path taking as many diagonal steps as possible before going
/// straight. Admissible and consistent on 8-neighbour grids with diagonal cost √2.
pub fn octile(a: &Coordinate, b: &Coordinate) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    C * (dx + dy) + (D - 2.0 * C) * dx.min(dy)
}

/// Multiplies the estimate of `h` by `factor`.
pub fn scaled<H>(h: H, factor: f64) -> impl Fn(&Coordinate, &Coordinate) -> f64
where
    H: Fn(&Coordinate, &Coordinate) -> f64,
{
    move |a, b| factor * h(a, b)
}

/// Octile distance on diagonal grids and Manhattan distance otherwise, scaled by
/// the grid's minimum step cost.
pub fn heuristic_for(grid: &Grid) -> impl Fn(&Coordinate, &Coordinate) -> f64 {
    let base: fn(&Coordinate, &Coordinate) -> f64 = if grid.diagonal_enabled {
        octile
    } else {
        manhattan
    };
    scaled(base, grid.min_step_cost())
}
