use core::fmt;
use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use crate::error::{SearchError, SearchOutcome};
use crate::frontier::Frontier;
use crate::grid::{Coordinate, Grid};
use crate::result::{PredecessorMap, SearchResult};
use crate::timer::Timer;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        })
    }
}

/// A search algorithm that can be run on any configured [Grid].
pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Searches from `grid.start` to `grid.goal`. Fails only on configuration
    /// errors; an unreachable goal gives a result with `found() == false`.
    fn solve(&self, grid: &Grid) -> SearchOutcome;
}

/// Start and goal of `grid`, or [SearchError::MissingEndpoints].
pub(crate) fn endpoints(grid: &Grid) -> Result<(Coordinate, Coordinate), SearchError> {
    match (grid.start, grid.goal) {
        (Some(start), Some(goal)) => Ok((start, goal)),
        (start, goal) => Err(SearchError::MissingEndpoints {
            start_set: start.is_some(),
            goal_set: goal.is_some(),
        }),
    }
}

/// Walks the predecessor links back from `goal` and returns the cells in
/// start-to-goal order. The walk stops at `start`, at a cell without an entry,
/// or after as many steps as the map has entries, so a broken map cannot make
/// it loop. The result only starts at `start` if the links were complete.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    start: Coordinate,
    goal: Coordinate,
) -> Vec<Coordinate> {
    let mut path: Vec<Coordinate> = std::iter::successors(Some(goal), |c| {
        if *c == start {
            None
        } else {
            predecessors.get(c).copied().flatten()
        }
    })
    .take_while(|c| predecessors.contains_key(c))
    .take(predecessors.len())
    .collect();
    path.reverse();
    path
}

/// Counters gathered while a search runs.
pub(crate) struct SearchStats {
    pub visited_count: usize,
    pub expanded_count: usize,
    pub frontier_peak: usize,
    pub time_s: f64,
}

/// Packages a finished search. `goal_cost` is the cost the search itself
/// computed for the goal; without one the path cost is summed from the grid.
pub(crate) fn finish(
    algorithm: Algorithm,
    grid: &Grid,
    (start, goal): (Coordinate, Coordinate),
    predecessor_map: PredecessorMap,
    explored_order: Vec<Coordinate>,
    goal_cost: Option<f64>,
    stats: SearchStats,
) -> SearchResult {
    let mut path = reconstruct_path(&predecessor_map, start, goal);
    let found = path.first() == Some(&start) && path.last() == Some(&goal);
    let total_cost = if found {
        goal_cost.unwrap_or_else(|| grid.path_cost(&path))
    } else {
        path.clear();
        f64::INFINITY
    };
    debug!(
        "{} from {} to {}: found={} cost={} expanded={} frontier_peak={}",
        algorithm, start, goal, found, total_cost, stats.expanded_count, stats.frontier_peak
    );
    SearchResult {
        algorithm,
        path,
        found,
        visited_count: stats.visited_count,
        expanded_count: stats.expanded_count,
        frontier_peak: stats.frontier_peak,
        time_s: stats.time_s,
        total_cost,
        explored_order,
        predecessor_map,
    }
}

/// Lazy-deletion best-first search shared by Dijkstra and A*. Cells are popped
/// in order of `g + heuristic(cell, goal)`.
///
/// The frontier never updates queued entries in place. When a cheaper route to
/// an open cell is found, the cell is pushed again with its new priority and
/// the older copy stays queued. Popping a cell that is already closed therefore
/// means the entry is stale, and it is skipped. A cell is closed, recorded in
/// the explored order and counted as expanded on its first pop only. The search
/// stops as soon as the goal is closed, which is safe because all edge costs
/// are non-negative and, for A*, the heuristic is consistent.
///
/// Among equal priorities the earliest pushed entry is popped first.
pub(crate) fn best_first_search<H>(grid: &Grid, algorithm: Algorithm, heuristic: H) -> SearchOutcome
where
    H: Fn(&Coordinate, &Coordinate) -> f64,
{
    let (start, goal) = endpoints(grid)?;
    let mut time_s = 0.0;
    let (predecessor_map, explored_order, closed, goal_cost, frontier_peak) = {
        let _timer = Timer::start(&mut time_s);
        let mut g: FxHashMap<Coordinate, f64> = FxHashMap::default();
        let mut predecessor_map = PredecessorMap::default();
        let mut closed: FxHashSet<Coordinate> = FxHashSet::default();
        let mut open: FxHashSet<Coordinate> = FxHashSet::default();
        let mut frontier: Frontier<(Coordinate, f64), f64> = Frontier::new();
        let mut explored_order = Vec::new();
        let mut goal_cost = None;
        let mut frontier_peak = 1;

        g.insert(start, 0.0);
        predecessor_map.insert(start, None);
        open.insert(start);
        frontier.push((start, 0.0), heuristic(&start, &goal));

        while let Some(((current, current_g), _)) = frontier.pop() {
            if !closed.insert(current) {
                continue;
            }
            open.remove(&current);
            explored_order.push(current);
            if current == goal {
                goal_cost = Some(current_g);
                break;
            }
            for next in grid.neighbors(current) {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = current_g + grid.cost(current, next);
                if g.get(&next).map_or(true, |&known| tentative < known) {
                    g.insert(next, tentative);
                    predecessor_map.insert(next, Some(current));
                    frontier.push((next, tentative), tentative + heuristic(&next, &goal));
                    open.insert(next);
                    frontier_peak = frontier_peak.max(open.len());
                }
            }
        }
        (predecessor_map, explored_order, closed, goal_cost, frontier_peak)
    };
    let stats = SearchStats {
        visited_count: closed.len(),
        expanded_count: explored_order.len(),
        frontier_peak,
        time_s,
    };
    Ok(finish(
        algorithm,
        grid,
        (start, goal),
        predecessor_map,
        explored_order,
        goal_cost,
        stats,
    ))
}
