use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::grid::{Coordinate, Grid};
use crate::solver::Algorithm;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor of each discovered cell, in discovery order. The start maps to [None].
pub type PredecessorMap = FxIndexMap<Coordinate, Option<Coordinate>>;

const BRANCHING_TOLERANCE: f64 = 1e-10;
const BRANCHING_MAX_ITERATIONS: usize = 100;

/// Record of one completed search. Produced once by a solver and read-only
/// afterwards; it shares nothing with the [Grid] it was computed on.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub(crate) algorithm: Algorithm,
    pub(crate) path: Vec<Coordinate>,
    pub(crate) found: bool,
    pub(crate) visited_count: usize,
    pub(crate) expanded_count: usize,
    pub(crate) frontier_peak: usize,
    pub(crate) time_s: f64,
    pub(crate) total_cost: f64,
    pub(crate) explored_order: Vec<Coordinate>,
    pub(crate) predecessor_map: PredecessorMap,
}

impl SearchResult {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    /// Cells from start to goal, both included. Empty if the goal was not reached.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }
    pub fn found(&self) -> bool {
        self.found
    }
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }
    pub fn expanded_count(&self) -> usize {
        self.expanded_count
    }
    /// Largest number of cells waiting in the frontier at once.
    pub fn frontier_peak(&self) -> usize {
        self.frontier_peak
    }
    /// Wall-clock seconds spent in the search itself.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }
    /// Cost of [path](Self::path), or infinity if the goal was not reached.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
    /// Cells in the order they were finalized.
    pub fn explored_order(&self) -> &[Coordinate] {
        &self.explored_order
    }
    pub fn predecessor_map(&self) -> &PredecessorMap {
        &self.predecessor_map
    }

    /// Number of moves along the path.
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether [total_cost](Self::total_cost) matches the cost of walking the path
    /// on `grid`.
    pub fn path_cost_consistent(&self, grid: &Grid) -> bool {
        if !self.found {
            return self.total_cost.is_infinite();
        }
        (grid.path_cost(&self.path) - self.total_cost).abs() <= 1e-9 * self.total_cost.max(1.0)
    }

    /// The branching factor `b*` a uniform tree of depth `d = path_length()` would
    /// need to hold `N = expanded_count` nodes, i.e. the root of
    /// `1 + b* + b*^2 + ... + b*^d = N`, found by bisection on `[1, N]`.
    ///
    /// Values close to 1 indicate a heuristic that leads almost straight to the
    /// goal. Returns 1 when `d = 0` or `N <= 1`.
    pub fn effective_branching_factor(&self) -> f64 {
        let depth = self.path_length();
        let n = self.expanded_count as f64;
        if depth == 0 || self.expanded_count <= 1 {
            return 1.0;
        }
        let tree_size = |b: f64| (0..=depth).map(|i| b.powi(i as i32)).sum::<f64>();
        let (mut lo, mut hi) = (1.0_f64, n);
        for _ in 0..BRANCHING_MAX_ITERATIONS {
            if hi - lo <= BRANCHING_TOLERANCE {
                break;
            }
            let mid = 0.5 * (lo + hi);
            if tree_size(mid) < n {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: found={} length={} cost={:.3} expanded={} visited={} frontier_peak={} time={:.6}s",
            self.algorithm,
            self.found,
            self.path_length(),
            self.total_cost,
            self.expanded_count,
            self.visited_count,
            self.frontier_peak,
            self.time_s
        )
    }
}
