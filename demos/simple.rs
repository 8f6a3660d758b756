use grid_search_bench::{AstarSolver, Coordinate, Grid, GridSolver};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood. The heuristic_factor can be raised above 1.0 to run
// Weighted A*, which expands fewer cells at the risk of a longer path.

fn main() {
    let mut grid = Grid::new(3, 3, true);
    grid.set_obstacle(Coordinate::new(1, 1), true);
    grid.start = Some(Coordinate::new(0, 0));
    grid.goal = Some(Coordinate::new(2, 2));
    println!("{}", grid);
    for heuristic_factor in [1.0, 1.3] {
        let solver = AstarSolver { heuristic_factor };
        match solver.solve(&grid) {
            Ok(result) => {
                println!("{}", result);
                println!("Path:");
                for p in result.path() {
                    println!("{:?}", p);
                }
            }
            Err(e) => println!("Search failed: {}", e),
        }
    }
}
