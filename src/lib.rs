//! Maze generation and movement rules for the Neon Labyrinth game.
//!
//! [`generate`] carves a random perfect maze and optionally braids loops into
//! it; [`attempt_move`] decides whether a step is legal; [`Session`] tracks
//! one game from start to goal.

pub mod config;
pub mod direction;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod movement;
pub mod session;

pub use config::{Difficulty, Settings};
pub use direction::Direction;
pub use error::MazeError;
pub use generator::{generate, Maze};
pub use grid::{Cell, Grid, Passages, Pos};
pub use layout::{Tile, TileMap};
pub use movement::{attempt_move, MoveResult};
pub use session::{format_clock, MoveOutcome, Session, SessionState};
