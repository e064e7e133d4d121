//! Rectangular grid of cells with symmetric passage flags.

use crate::direction::Direction;
use crate::error::MazeError;

/// Grid coordinate: `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Open/closed flag per direction. The default has every side closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Passages([bool; 4]);

impl Passages {
    pub fn is_open(&self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    pub fn is_closed(&self, dir: Direction) -> bool {
        !self.is_open(dir)
    }

    /// Number of open sides.
    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|open| **open).count()
    }

    /// Number of closed sides, the grid boundary included.
    pub fn closed_count(&self) -> usize {
        4 - self.open_count()
    }

    /// Iterates over the open directions in `Direction::ALL` order.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.is_open(*dir))
    }

    fn open(&mut self, dir: Direction) {
        self.0[dir.index()] = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub passages: Passages,
    /// Carving bookkeeping only; nothing reads it once generation is done.
    pub(crate) visited: bool,
}

/// `cols × rows` cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid with every passage closed.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either side is 0 or the
    /// cell count overflows.
    pub fn new(cols: usize, rows: usize) -> Result<Self, MazeError> {
        let len = cols
            .checked_mul(rows)
            .filter(|len| *len > 0)
            .ok_or(MazeError::InvalidDimensions { cols, rows })?;
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Panics if `pos` is outside the grid.
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub(crate) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    /// The adjacent position in `dir`, or `None` past the edge.
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Pos { x, y };
        self.contains(next).then_some(next)
    }

    /// Every in-bounds neighbour of `pos` with the direction leading to it.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir).map(|next| (dir, next)))
    }

    /// Opens the passage between two adjacent cells on both sides at once.
    ///
    /// Returns `false` if it was already open. Panics if the cells are not
    /// grid-adjacent.
    pub fn open_passage(&mut self, a: Pos, b: Pos) -> bool {
        let dir = self
            .direction_between(a, b)
            .unwrap_or_else(|| panic!("cells {a:?} and {b:?} are not adjacent"));
        if self.cell(a).passages.is_open(dir) {
            return false;
        }
        self.cell_mut(a).passages.open(dir);
        self.cell_mut(b).passages.open(dir.opposite());
        true
    }

    /// The direction leading from `a` to `b` when they are adjacent.
    pub fn direction_between(&self, a: Pos, b: Pos) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.neighbor(a, *dir) == Some(b))
    }

    /// Row-major walk over every cell with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Pos::new(idx % cols, idx / cols), cell))
    }

    /// Number of open passages, each shared pair counted once.
    pub fn passage_count(&self) -> usize {
        let ends: usize = self.cells.iter().map(|c| c.passages.open_count()).sum();
        ends / 2
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "cell {pos:?} is outside the {}x{} grid",
            self.cols,
            self.rows
        );
        pos.x + pos.y * self.cols
    }
}
