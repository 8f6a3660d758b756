use fxhash::FxHashSet;
use std::collections::VecDeque;

use crate::error::{SearchError, SearchOutcome};
use crate::grid::Grid;
use crate::result::PredecessorMap;
use crate::solver::{endpoints, finish, Algorithm, GridSolver, SearchStats};
use crate::timer::Timer;

/// Breadth-first search. Only optimal when every move costs the same, so it
/// refuses weighted and diagonal grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn solve(&self, grid: &Grid) -> SearchOutcome {
        bfs(grid)
    }
}

/// Runs breadth-first search from `grid.start` to `grid.goal`.
///
/// Cells are marked visited when enqueued, so each enters the queue at most
/// once and keeps the predecessor it was first discovered from. Both
/// `visited_count` and `expanded_count` count dequeued cells. The path cost is
/// summed from the grid afterwards.
pub fn bfs(grid: &Grid) -> SearchOutcome {
    let ends = endpoints(grid)?;
    if grid.is_weighted() || grid.diagonal_enabled {
        return Err(SearchError::UnsupportedConfiguration {
            weighted: grid.is_weighted(),
            diagonal: grid.diagonal_enabled,
        });
    }
    let (start, goal) = ends;
    let mut time_s = 0.0;
    let (predecessor_map, explored_order, frontier_peak) = {
        let _timer = Timer::start(&mut time_s);
        let mut visited: FxHashSet<_> = FxHashSet::default();
        let mut predecessor_map = PredecessorMap::default();
        let mut queue = VecDeque::new();
        let mut explored_order = Vec::new();
        let mut frontier_peak = 1;

        visited.insert(start);
        predecessor_map.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            explored_order.push(current);
            if current == goal {
                break;
            }
            for next in grid.neighbors(current) {
                if visited.insert(next) {
                    predecessor_map.insert(next, Some(current));
                    queue.push_back(next);
                    frontier_peak = frontier_peak.max(queue.len());
                }
            }
        }
        (predecessor_map, explored_order, frontier_peak)
    };
    let stats = SearchStats {
        visited_count: explored_order.len(),
        expanded_count: explored_order.len(),
        frontier_peak,
        time_s,
    };
    Ok(finish(
        Algorithm::Bfs,
        grid,
        ends,
        predecessor_map,
        explored_order,
        None,
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;

    fn p(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn open_grid(n: usize) -> Grid {
        let mut grid = Grid::new(n, n, false);
        grid.start = Some(p(0, 0));
        grid.goal = Some(p(n as i32 - 1, n as i32 - 1));
        grid
    }

    #[test]
    fn shortest_hop_count_on_open_grid() {
        let result = bfs(&open_grid(5)).unwrap();
        assert!(result.found());
        assert_eq!(result.path_length(), 8);
        assert_eq!(result.total_cost(), 8.0);
        assert_eq!(result.path().first(), Some(&p(0, 0)));
        assert_eq!(result.path().last(), Some(&p(4, 4)));
        assert_eq!(result.visited_count(), result.expanded_count());
        assert_eq!(result.explored_order().len(), result.expanded_count());
        assert_eq!(result.explored_order().last(), Some(&p(4, 4)));
        assert_eq!(result.algorithm(), Algorithm::Bfs);
    }

    #[test]
    fn rejects_weighted_and_diagonal_grids() {
        let mut weighted = open_grid(3);
        weighted.entry_weights.insert(p(1, 1), 5);
        assert_eq!(
            bfs(&weighted).unwrap_err(),
            SearchError::UnsupportedConfiguration {
                weighted: true,
                diagonal: false
            }
        );
        let mut diagonal = open_grid(3);
        diagonal.diagonal_enabled = true;
        assert_eq!(
            bfs(&diagonal).unwrap_err(),
            SearchError::UnsupportedConfiguration {
                weighted: false,
                diagonal: true
            }
        );
    }

    #[test]
    fn missing_endpoints_are_reported_first() {
        let mut grid = Grid::new(3, 3, true);
        grid.start = Some(p(0, 0));
        assert!(matches!(
            bfs(&grid),
            Err(SearchError::MissingEndpoints { .. })
        ));
    }

    #[test]
    fn start_equals_goal() {
        let mut grid = open_grid(3);
        grid.goal = grid.start;
        let result = bfs(&grid).unwrap();
        assert!(result.found());
        assert_eq!(result.path(), &[p(0, 0)]);
        assert_eq!(result.total_cost(), 0.0);
        assert_eq!(result.expanded_count(), 1);
        assert_eq!(result.effective_branching_factor(), 1.0);
    }

    #[test]
    fn frontier_peak_tracks_queue() {
        // A corridor never holds more than one queued cell.
        let mut corridor = Grid::new(6, 1, false);
        corridor.start = Some(p(0, 0));
        corridor.goal = Some(p(5, 0));
        let result = bfs(&corridor).unwrap();
        assert_eq!(result.frontier_peak(), 1);
        assert_eq!(result.expanded_count(), 6);

        let open = bfs(&open_grid(5)).unwrap();
        assert!(open.frontier_peak() > 1);
    }
}
