//! Randomized recursive-backtracker maze generation with optional braiding.
//!
//! Carving walks the grid depth-first from the origin with an explicit stack,
//! so a 40x40 maze never recurses. The result is a spanning tree of the grid
//! graph: every cell connected, no cycles, `cols * rows - 1` passages.
//! Braiding then knocks a wall out of some dead ends, which only ever adds
//! passages and so keeps every cell reachable.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::{Grid, Passages, Pos};

/// A generated maze. Immutable once [`generate`] returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
    braid_factor: f64,
    loops_added: usize,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Where the player starts: the top-left cell.
    pub fn start(&self) -> Pos {
        Pos::new(0, 0)
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Pos {
        Pos::new(self.cols() - 1, self.rows() - 1)
    }

    /// Passage flags of the cell at `pos`. Panics outside the grid.
    pub fn passages(&self, pos: Pos) -> Passages {
        self.grid.cell(pos).passages
    }

    /// Every cell with its passages, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Passages)> + '_ {
        self.grid.iter().map(|(pos, cell)| (pos, cell.passages))
    }

    pub fn passage_count(&self) -> usize {
        self.grid.passage_count()
    }

    pub fn braid_factor(&self) -> f64 {
        self.braid_factor
    }

    /// Passages opened by braiding on top of the spanning tree.
    pub fn loops_added(&self) -> usize {
        self.loops_added
    }
}

/// Generates a `cols × rows` maze, braided with probability `braid_factor`.
///
/// With `braid_factor == 0` the maze is perfect: exactly one path between
/// any two cells. All randomness is drawn from `rng`, so a seeded generator
/// reproduces the same maze.
pub fn generate<R: Rng + ?Sized>(
    cols: usize,
    rows: usize,
    braid_factor: f64,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    if !(0.0..=1.0).contains(&braid_factor) {
        return Err(MazeError::InvalidBraidFactor(braid_factor));
    }
    let mut grid = Grid::new(cols, rows)?;
    carve_spanning_tree(&mut grid, rng);
    let loops_added = if braid_factor > 0.0 {
        braid(&mut grid, braid_factor, rng)
    } else {
        0
    };
    Ok(Maze {
        grid,
        braid_factor,
        loops_added,
    })
}

fn carve_spanning_tree<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let origin = Pos::new(0, 0);
    grid.cell_mut(origin).visited = true;
    let mut stack: Vec<Pos> = Vec::new();
    let mut current = origin;

    loop {
        let unvisited: Vec<Pos> = grid
            .neighbors(current)
            .map(|(_, next)| next)
            .filter(|next| !grid.cell(*next).visited)
            .collect();

        if let Some(&next) = unvisited.choose(rng) {
            grid.cell_mut(next).visited = true;
            grid.open_passage(current, next);
            stack.push(current);
            current = next;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        } else {
            break;
        }
    }
}

/// Single row-major pass over the grid. A cell is a dead end if it has
/// exactly one open side at the moment the pass reaches it.
fn braid<R: Rng + ?Sized>(grid: &mut Grid, braid_factor: f64, rng: &mut R) -> usize {
    let mut added = 0;
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let pos = Pos::new(x, y);
            if grid.cell(pos).passages.closed_count() != 3 {
                continue;
            }
            if rng.gen::<f64>() >= braid_factor {
                continue;
            }
            // Any neighbour, open side included; picking the open one is a no-op.
            let candidates: Vec<(Direction, Pos)> = grid.neighbors(pos).collect();
            if let Some(&(_, next)) = candidates.choose(rng) {
                if grid.open_passage(pos, next) {
                    added += 1;
                }
            }
        }
    }
    added
}
