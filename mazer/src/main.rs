//! mazer — console maze solving demo.
//!
//! Solves the classic 4x5 maze with every search strategy, prints the routes
//! and the reachability summary, then does the same for a random maze.

mod mapgen;
mod render;

use mazewalk_core::Maze;
use mazewalk_paths::{Bfs, BidirectionalBfs, Dfs, Strategy, flood_fill};

const DEMO: &str = "\
*   #
### #
  # #
  # .";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let maze = Maze::parse(DEMO)?;
    println!("demo maze, start {} -> destination {}:", maze.start(), maze.dest());
    solve_and_report(&maze);

    let mut rng = rand::rng();
    let maze = mapgen::random_maze(10, 24, 0.3, &mut rng);
    println!("random maze, start {} -> destination {}:", maze.start(), maze.dest());
    solve_and_report(&maze);

    Ok(())
}

fn solve_and_report(maze: &Maze) {
    print!("{}", render::render(maze));

    let strategies: [(&str, &dyn Strategy); 3] = [
        ("breadth-first", &Bfs),
        ("depth-first", &Dfs),
        ("bidirectional", &BidirectionalBfs),
    ];
    for (name, strategy) in strategies {
        let path = strategy.find_path(maze);
        if path.is_empty() {
            println!("{name}: no path found");
        } else {
            println!("{name}: {} cells", path.len());
            print!("{}", render::render_with_path(maze, &path));
        }
    }

    let graph = flood_fill(maze);
    println!(
        "reachable from start: {} cells, {} directed edges, destination {}",
        graph.node_count(),
        graph.edge_count(),
        if graph.contains(maze.dest()) {
            "reachable"
        } else {
            "unreachable"
        }
    );
    println!();
}
