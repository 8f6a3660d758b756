use flexi_logger::Logger;
use grid_search_bench::{
    AstarSolver, BfsSolver, Coordinate, DijkstraSolver, Grid, GridSolver, DEFAULT_WEIGHT_VALUE,
};

// Runs every applicable solver on the same randomized grid and prints their metrics
// side by side. Set RUST_LOG=debug to see per-search log lines.

const COLS: usize = 60;
const ROWS: usize = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    for (diagonal, weight_density) in [(false, 0.0), (true, 0.0), (false, 0.1), (true, 0.1)] {
        let mut grid = Grid::new(COLS, ROWS, diagonal);
        grid.start = Some(Coordinate::new(0, 0));
        grid.goal = Some(Coordinate::new(COLS as i32 - 1, ROWS as i32 - 1));
        grid.randomize_obstacles(0.25, 123);
        if weight_density > 0.0 {
            grid.randomize_weights(weight_density, DEFAULT_WEIGHT_VALUE, 456);
        }
        println!("diagonal={} weight_density={}", diagonal, weight_density);
        let astar = AstarSolver::new();
        let solvers: [&dyn GridSolver; 3] = [&BfsSolver, &DijkstraSolver, &astar];
        for solver in solvers {
            match solver.solve(&grid) {
                Ok(result) => println!(
                    "  {} b*={:.3}",
                    result,
                    result.effective_branching_factor()
                ),
                Err(e) => println!("  {}: skipped ({})", solver.algorithm(), e),
            }
        }
    }
    Ok(())
}
