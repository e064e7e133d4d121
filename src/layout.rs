//! Wall/floor raster of a maze for character-cell renderers.
//!
//! Cell `(x, y)` sits at tile `(2x + 1, 2y + 1)`. The tiles between two cells
//! are floor when the passage is open; corner posts and the border are
//! always wall.

use crate::generator::Maze;
use crate::grid::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileMap {
    pub fn from_maze(maze: &Maze) -> Self {
        let width = maze.cols() * 2 + 1;
        let height = maze.rows() * 2 + 1;
        let mut map = Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
        };
        for (pos, passages) in maze.cells() {
            let (tx, ty) = Self::cell_tile(pos);
            map.set(tx, ty, Tile::Floor);
            for dir in passages.open_directions() {
                let (dx, dy) = dir.delta();
                map.set(
                    tx.saturating_add_signed(dx),
                    ty.saturating_add_signed(dy),
                    Tile::Floor,
                );
            }
        }
        map
    }

    /// Tile coordinate of a maze cell.
    pub fn cell_tile(pos: Pos) -> (usize, usize) {
        (pos.x * 2 + 1, pos.y * 2 + 1)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics if `(x, y)` is outside the map.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        assert!(x < self.width && y < self.height, "tile ({x}, {y}) out of range");
        self.tiles[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y * self.width + x] = tile;
    }
}
