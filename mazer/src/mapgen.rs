//! Random maze generation.

use mazewalk_core::{Cell, Maze};
use rand::{Rng, RngExt};

/// Generate a random `height x width` maze.
///
/// Each cell becomes an obstacle with probability `wall_chance`, then two
/// distinct cells are cleared and become the start and destination markers.
/// The markers may land in different components; an unsolvable maze is a
/// legitimate outcome.
///
/// # Panics
///
/// Panics if the maze has fewer than two cells or `wall_chance` is outside
/// `[0, 1]`.
pub fn random_maze(height: usize, width: usize, wall_chance: f64, rng: &mut impl Rng) -> Maze {
    assert!(height * width >= 2, "need at least two cells for the markers");

    let mut obstacles: Vec<bool> = (0..height * width)
        .map(|_| rng.random_bool(wall_chance))
        .collect();

    let start = place_marker(&mut obstacles, height, width, None, rng);
    let dest = place_marker(&mut obstacles, height, width, Some(start), rng);
    log::debug!("placed markers at {start} and {dest}");

    Maze::new(height, width, obstacles, start, dest)
}

/// Pick a random cell distinct from `avoid` and clear any obstacle on it.
fn place_marker(
    obstacles: &mut [bool],
    height: usize,
    width: usize,
    avoid: Option<Cell>,
    rng: &mut impl Rng,
) -> Cell {
    loop {
        let idx = rng.random_range(0..height * width);
        let cell = Cell::new(idx / width, idx % width);
        if avoid == Some(cell) {
            continue;
        }
        obstacles[idx] = false;
        return cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn markers_are_distinct_and_free() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let maze = random_maze(8, 12, 0.35, &mut rng);
            assert_ne!(maze.start(), maze.dest());
            assert!(!maze.is_obstacle(maze.start()));
            assert!(!maze.is_obstacle(maze.dest()));
        }
    }

    #[test]
    fn extreme_wall_chances() {
        let mut rng = StdRng::seed_from_u64(7);
        let open = random_maze(4, 4, 0.0, &mut rng);
        assert!(open.cells().all(|c| !open.is_obstacle(c)));

        let walled = random_maze(4, 4, 1.0, &mut rng);
        let free = walled.cells().filter(|&c| !walled.is_obstacle(c)).count();
        // Only the two marker cells get cleared.
        assert_eq!(free, 2);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_maze(6, 6, 0.3, &mut StdRng::seed_from_u64(9));
        let b = random_maze(6, 6, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn two_cell_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        let maze = random_maze(1, 2, 1.0, &mut rng);
        assert_ne!(maze.start(), maze.dest());
    }
}
