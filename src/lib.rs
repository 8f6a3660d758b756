//! # grid_search_bench
//!
//! Instrumented shortest-path searches on a 2D grid graph, built to compare
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on identical grids and
//! start/goal pairs.
//!
//! A [Grid] supports optional diagonal movement (without cutting between two
//! blocking walls) and per-cell entry surcharges. Every search returns a
//! [SearchResult] carrying the path, its cost and comparable counters (expanded
//! cells, peak frontier size, wall-clock time), or a [SearchError] if the grid is
//! not configured for the chosen algorithm.
//!
//! ```
//! use grid_search_bench::{astar, heuristic_for, Coordinate, Grid};
//!
//! let mut grid = Grid::new(5, 5, true);
//! grid.start = Some(Coordinate::new(0, 0));
//! grid.goal = Some(Coordinate::new(4, 4));
//! let result = astar(&grid, heuristic_for(&grid)).unwrap();
//! assert!(result.found());
//! assert_eq!(result.path_length(), 4);
//! ```
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod result;
pub mod solver;
pub mod timer;

pub use error::{SearchError, SearchOutcome};
pub use grid::{Coordinate, Grid};
pub use heuristic::{euclidean, heuristic_for, manhattan, octile, scaled};
pub use result::SearchResult;
pub use solver::astar::{astar, AstarSolver};
pub use solver::bfs::{bfs, BfsSolver};
pub use solver::dijkstra::{dijkstra, DijkstraSolver};
pub use solver::{Algorithm, GridSolver};

/// Cost of a cardinal (straight) move.
pub const C: f64 = 1.0;
/// Cost of a diagonal move.
pub const D: f64 = std::f64::consts::SQRT_2;
/// Surcharge used by callers that do not pick their own weight value.
pub const DEFAULT_WEIGHT_VALUE: u32 = 5;

pub(crate) const N_SMALLVEC_SIZE: usize = 8;
