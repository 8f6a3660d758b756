use core::fmt;
use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::{C, D, N_SMALLVEC_SIZE};

/// A grid cell. Cells with a negative component are never in bounds.
pub type Coordinate = Point;

/// Offsets tried by [Grid::neighbors]: the four cardinal moves, then the diagonals.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Weighted grid graph that the searches run on.
///
/// Obstacles and entry surcharges are owned by the grid and never shared with
/// another instance. Cells absent from [entry_weights](Self::entry_weights)
/// carry no surcharge. The searches only borrow the grid and never modify it.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    pub diagonal_enabled: bool,
    pub obstacles: FxHashSet<Coordinate>,
    pub entry_weights: FxHashMap<Coordinate, u32>,
    pub start: Option<Coordinate>,
    pub goal: Option<Coordinate>,
}

impl Grid {
    /// Creates an empty grid of `cols` x `rows` cells.
    ///
    /// Coordinates are `i32`, so both dimensions must lie in `1..=i32::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or exceeds `i32::MAX`.
    pub fn new(cols: usize, rows: usize, diagonal_enabled: bool) -> Grid {
        assert!(
            (1..=i32::MAX as usize).contains(&cols) && (1..=i32::MAX as usize).contains(&rows),
            "grid dimensions must be in 1..=i32::MAX, got {}x{}",
            cols,
            rows
        );
        Grid {
            cols,
            rows,
            diagonal_enabled,
            obstacles: FxHashSet::default(),
            entry_weights: FxHashMap::default(),
            start: None,
            goal: None,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.cols && (c.y as usize) < self.rows
    }

    pub fn passable(&self, c: Coordinate) -> bool {
        !self.obstacles.contains(&c)
    }

    fn open(&self, c: Coordinate) -> bool {
        self.in_bounds(c) && self.passable(c)
    }

    /// Whether any cell carries an entry surcharge.
    pub fn is_weighted(&self) -> bool {
        !self.entry_weights.is_empty()
    }

    pub fn set_obstacle(&mut self, c: Coordinate, blocked: bool) {
        if blocked {
            self.obstacles.insert(c);
        } else {
            self.obstacles.remove(&c);
        }
    }

    /// Blocks every in-bounds cell of the `w` by `h` rectangle with top-left corner `(x, y)`.
    pub fn set_rect_obstacles(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for (cx, cy) in (x..x + w).cartesian_product(y..y + h) {
            let c = Coordinate::new(cx, cy);
            if self.in_bounds(c) {
                self.obstacles.insert(c);
            }
        }
    }

    pub fn clear_weights(&mut self) {
        self.entry_weights.clear();
    }

    /// Cost of entering `to` from the adjacent cell `from`: 1 for a cardinal move,
    /// √2 for a diagonal one, plus the surcharge of `to`. The surcharge of `from`
    /// never applies.
    pub fn cost(&self, from: Coordinate, to: Coordinate) -> f64 {
        let base = if from.x != to.x && from.y != to.y { D } else { C };
        base + self.entry_weights.get(&to).copied().unwrap_or(0) as f64
    }

    /// Smallest possible edge cost, used to scale heuristics.
    pub fn min_step_cost(&self) -> f64 {
        C
    }

    /// Whether a single step from `from` to the adjacent cell `to` is allowed.
    /// Diagonal steps are refused when both cells flanking the move are blocked
    /// or out of bounds, even if `to` itself is open.
    pub fn can_move_to(&self, from: Coordinate, to: Coordinate) -> bool {
        if !self.open(to) {
            return false;
        }
        if from.x != to.x && from.y != to.y {
            self.diagonal_enabled
                && (self.open(Coordinate::new(to.x, from.y))
                    || self.open(Coordinate::new(from.x, to.y)))
        } else {
            true
        }
    }

    /// Open cells reachable from `c` in one step. Cardinal neighbours come first
    /// (east, west, south, north), followed by the diagonals when enabled.
    pub fn neighbors(&self, c: Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        let offsets: &[(i32, i32)] = if self.diagonal_enabled {
            &MOORE_OFFSETS
        } else {
            &MOORE_OFFSETS[..4]
        };
        offsets
            .iter()
            .map(|&(dx, dy)| Coordinate::new(c.x + dx, c.y + dy))
            .filter(|&n| self.can_move_to(c, n))
            .collect()
    }

    /// Sum of [cost](Self::cost) over consecutive cells of `path`.
    pub fn path_cost(&self, path: &[Coordinate]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(&a, &b)| self.cost(a, b))
            .sum()
    }

    fn is_endpoint(&self, c: Coordinate) -> bool {
        self.start == Some(c) || self.goal == Some(c)
    }

    /// Replaces the obstacle set: every cell is blocked independently with
    /// probability `density`. Start and goal are never blocked. The same
    /// dimensions, density and seed always give the same obstacles.
    pub fn randomize_obstacles(&mut self, density: f64, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.obstacles.clear();
        for x in 0..self.cols as i32 {
            for y in 0..self.rows as i32 {
                let c = Coordinate::new(x, y);
                if rng.gen::<f64>() < density && !self.is_endpoint(c) {
                    self.obstacles.insert(c);
                }
            }
        }
        info!(
            "Placed {} obstacles on {}x{} grid (density {}, seed {})",
            self.obstacles.len(),
            self.cols,
            self.rows,
            density,
            seed
        );
    }

    /// Replaces the entry surcharges: every open cell gets `weight_value` with
    /// probability `density`. Start and goal are never weighted. Deterministic in
    /// the seed, given the current obstacles.
    pub fn randomize_weights(&mut self, density: f64, weight_value: u32, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.clear_weights();
        for x in 0..self.cols as i32 {
            for y in 0..self.rows as i32 {
                let c = Coordinate::new(x, y);
                // One draw per cell, blocked or not, keeps the stream aligned.
                let draw = rng.gen::<f64>();
                if draw < density && self.passable(c) && !self.is_endpoint(c) {
                    self.entry_weights.insert(c, weight_value);
                }
            }
        }
        info!(
            "Weighted {} cells with surcharge {} (density {}, seed {})",
            self.entry_weights.len(),
            weight_value,
            density,
            seed
        );
    }

    fn ix(&self, c: Coordinate) -> usize {
        c.y as usize * self.cols + c.x as usize
    }

    /// Builds a [UnionFind] over cell indices (`y * cols + x`) joining cells linked
    /// by a move [neighbors](Self::neighbors) would allow.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cols * self.rows);
        for x in 0..self.cols as i32 {
            for y in 0..self.rows as i32 {
                let c = Coordinate::new(x, y);
                if !self.passable(c) {
                    continue;
                }
                let c_ix = self.ix(c);
                for n in self.neighbors(c) {
                    components.union(c_ix, self.ix(n));
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` are open cells on the same connected component.
    pub fn reachable(&self, a: Coordinate, b: Coordinate) -> bool {
        if !self.open(a) || !self.open(b) {
            return false;
        }
        self.components().equiv(self.ix(a), self.ix(b))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|x| {
                    let c = Coordinate::new(x, y);
                    if self.start == Some(c) {
                        'S'
                    } else if self.goal == Some(c) {
                        'G'
                    } else if !self.passable(c) {
                        '#'
                    } else {
                        match self.entry_weights.get(&c) {
                            Some(&w) => char::from_digit(w.min(9), 10).unwrap_or('+'),
                            None => '.',
                        }
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
