use crate::error::SearchOutcome;
use crate::grid::Grid;
use crate::solver::{best_first_search, Algorithm, GridSolver};

/// Uniform-cost search. Works on any grid, weighted or diagonal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn solve(&self, grid: &Grid) -> SearchOutcome {
        dijkstra(grid)
    }
}

/// Runs Dijkstra's algorithm from `grid.start` to `grid.goal`: a best-first
/// search keyed on the tentative distance alone.
pub fn dijkstra(grid: &Grid) -> SearchOutcome {
    best_first_search(grid, Algorithm::Dijkstra, |_, _| 0.0)
}
