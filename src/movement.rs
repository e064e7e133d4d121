use crate::direction::Direction;
use crate::generator::Maze;
use crate::grid::Pos;

/// Outcome of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    /// The new position when accepted, the unchanged one otherwise.
    pub position: Pos,
}

/// Moves one cell from `position` in `direction` if the passage is open.
///
/// A wall is a normal rejection, not an error. Panics if `position` is not
/// on the maze.
pub fn attempt_move(maze: &Maze, position: Pos, direction: Direction) -> MoveResult {
    if maze.passages(position).is_closed(direction) {
        return MoveResult {
            accepted: false,
            position,
        };
    }
    // The edge is always walled, so an open side always has a neighbour.
    match maze.grid().neighbor(position, direction) {
        Some(next) => MoveResult {
            accepted: true,
            position: next,
        },
        None => MoveResult {
            accepted: false,
            position,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_cell_rejects_every_direction() {
        let maze = generate(1, 1, 0.0, &mut StdRng::seed_from_u64(0)).unwrap();
        for dir in Direction::ALL {
            let result = attempt_move(&maze, maze.start(), dir);
            assert!(!result.accepted);
            assert_eq!(result.position, maze.start());
        }
    }

    #[test]
    fn accepted_moves_match_the_carved_topology() {
        for seed in 0..32 {
            let maze = generate(2, 2, 0.0, &mut StdRng::seed_from_u64(seed)).unwrap();
            let origin = maze.start();
            let mut accepted = 0;
            for dir in Direction::ALL {
                let result = attempt_move(&maze, origin, dir);
                assert_eq!(result.accepted, maze.passages(origin).is_open(dir));
                if result.accepted {
                    accepted += 1;
                    assert_eq!(Some(result.position), maze.grid().neighbor(origin, dir));
                } else {
                    assert_eq!(result.position, origin);
                }
            }
            assert!((1..=2).contains(&accepted), "seed {seed}: {accepted} exits");
        }
    }

    #[test]
    fn moving_there_and_back_returns_home() {
        let maze = generate(8, 8, 0.3, &mut StdRng::seed_from_u64(11)).unwrap();
        for (pos, passages) in maze.cells() {
            for dir in passages.open_directions() {
                let there = attempt_move(&maze, pos, dir);
                assert!(there.accepted);
                let back = attempt_move(&maze, there.position, dir.opposite());
                assert_eq!(back, MoveResult { accepted: true, position: pos });
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn moving_from_off_the_grid_panics() {
        let maze = generate(3, 3, 0.0, &mut StdRng::seed_from_u64(0)).unwrap();
        attempt_move(&maze, Pos::new(5, 5), Direction::North);
    }
}
