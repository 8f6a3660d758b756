use crate::error::SearchOutcome;
use crate::grid::{Coordinate, Grid};
use crate::heuristic::{heuristic_for, scaled};
use crate::solver::{best_first_search, Algorithm, GridSolver};

/// A* using the grid's default heuristic (octile on 8-neighbour grids,
/// Manhattan otherwise) multiplied by `heuristic_factor`.
///
/// With the default factor of 1.0 the heuristic is admissible and consistent
/// and the returned cost equals Dijkstra's. Larger factors give Weighted A*,
/// which usually expands fewer cells but may return a costlier path.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn solve(&self, grid: &Grid) -> SearchOutcome {
        astar(grid, scaled(heuristic_for(grid), self.heuristic_factor))
    }
}

/// Runs A* from `grid.start` to `grid.goal`, popping cells in order of
/// `g + heuristic(cell, goal)`.
///
/// The returned path is optimal when `heuristic` is admissible and consistent
/// for the grid's movement model; choosing one is up to the caller (see
/// [heuristic_for]). Ties between equal priorities go to the cell pushed first.
pub fn astar<H>(grid: &Grid, heuristic: H) -> SearchOutcome
where
    H: Fn(&Coordinate, &Coordinate) -> f64,
{
    best_first_search(grid, Algorithm::AStar, heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{euclidean, manhattan, octile};
    use crate::solver::dijkstra::dijkstra;
    use crate::D;

    fn p(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn corner_grid(n: usize, diagonal: bool) -> Grid {
        let mut grid = Grid::new(n, n, diagonal);
        grid.start = Some(p(0, 0));
        grid.goal = Some(p(n as i32 - 1, n as i32 - 1));
        grid
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for diagonal in [false, true] {
            let mut grid = Grid::new(1, 1, diagonal);
            grid.start = Some(p(0, 0));
            grid.goal = Some(p(0, 0));
            let result = AstarSolver::new().solve(&grid).unwrap();
            assert!(result.found());
            assert_eq!(result.path().len(), 1);
            assert_eq!(result.total_cost(), 0.0);
        }
    }

    #[test]
    fn diagonal_path_on_open_grid() {
        let grid = corner_grid(5, true);
        let result = astar(&grid, scaled(octile, grid.min_step_cost())).unwrap();
        assert!(result.found());
        assert_eq!(result.path_length(), 4);
        assert!((result.total_cost() - 4.0 * D).abs() < 1e-9);
        assert_eq!(
            result.path(),
            &[p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]
        );
    }

    /// Asserts that the optimal solution is found around a single obstacle.
    #[test]
    fn solve_simple_problem() {
        for (diagonal, expected) in [(false, 5), (true, 4)] {
            let mut grid = corner_grid(3, diagonal);
            grid.set_obstacle(p(1, 1), true);
            let result = AstarSolver::new().solve(&grid).unwrap();
            assert_eq!(result.path().len(), expected);
        }
    }

    #[test]
    fn test_complex() {
        for (diagonal, expected) in [(false, 15), (true, 9)] {
            let mut grid = Grid::new(10, 10, diagonal);
            grid.set_rect_obstacles(1, 1, 1, 1);
            grid.set_rect_obstacles(5, 0, 1, 1);
            grid.set_rect_obstacles(0, 5, 1, 1);
            grid.set_rect_obstacles(8, 8, 1, 1);
            grid.start = Some(p(0, 0));
            grid.goal = Some(p(7, 7));
            let result = AstarSolver::new().solve(&grid).unwrap();
            let reference = dijkstra(&grid).unwrap();
            assert_eq!(result.path().len(), expected);
            assert!((result.total_cost() - reference.total_cost()).abs() < 1e-9);
        }
    }

    #[test]
    fn expands_no_more_than_dijkstra() {
        for diagonal in [false, true] {
            let mut grid = corner_grid(20, diagonal);
            grid.randomize_obstacles(0.2, 3);
            grid.randomize_weights(0.1, 5, 4);
            let a = AstarSolver::new().solve(&grid).unwrap();
            let d = dijkstra(&grid).unwrap();
            assert_eq!(a.found(), d.found());
            if a.found() {
                assert!((a.total_cost() - d.total_cost()).abs() < 1e-9);
                assert!(a.path_cost_consistent(&grid));
            }
            assert!(a.expanded_count() <= d.expanded_count());
        }
    }

    #[test]
    fn looser_heuristics_stay_optimal() {
        let mut grid = corner_grid(15, true);
        grid.randomize_obstacles(0.25, 21);
        let reference = dijkstra(&grid).unwrap();
        let tight = astar(&grid, octile).unwrap();
        let loose = astar(&grid, euclidean).unwrap();
        assert_eq!(tight.found(), reference.found());
        if reference.found() {
            assert!((tight.total_cost() - reference.total_cost()).abs() < 1e-9);
            assert!((loose.total_cost() - reference.total_cost()).abs() < 1e-9);
        }
    }

    #[test]
    fn weighted_astar_still_finds_a_path() {
        let mut grid = corner_grid(30, false);
        grid.set_rect_obstacles(8, 8, 8, 8);
        grid.set_rect_obstacles(0, 3, 6, 6);
        grid.set_rect_obstacles(10, 0, 6, 6);
        let solver = AstarSolver {
            heuristic_factor: 1.3,
        };
        let greedy = solver.solve(&grid).unwrap();
        let optimal = astar(&grid, manhattan).unwrap();
        assert!(greedy.found());
        assert!(greedy.total_cost() >= optimal.total_cost() - 1e-9);
        assert!(greedy.path_cost_consistent(&grid));
    }

    #[test]
    fn frontier_peak_counts_open_cells() {
        let mut grid = Grid::new(3, 3, false);
        grid.start = Some(p(1, 1));
        grid.goal = Some(p(0, 0));
        let result = AstarSolver::new().solve(&grid).unwrap();
        assert!(result.found());
        assert_eq!(result.frontier_peak(), 5);
        assert_eq!(result.explored_order().first(), Some(&p(1, 1)));
        assert_eq!(result.explored_order().last(), Some(&p(0, 0)));
        assert_eq!(result.predecessor_map()[&p(1, 1)], None);
        assert!(result.time_s().is_finite() && result.time_s() >= 0.0);
    }
}
