//! Difficulty presets and environment-driven settings.

use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;

pub const DEFAULT_FPS: u64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// A perfect maze.
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// `(cols, rows)` of the maze.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (15, 15),
            Difficulty::Medium => (25, 25),
            Difficulty::Hard => (40, 40),
        }
    }

    pub fn braid_factor(self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.6,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(MazeError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Runtime settings for the terminal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible mazes.
    pub seed: Option<u64>,
    pub fps: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            fps: DEFAULT_FPS,
        }
    }
}

impl Settings {
    /// Reads `LABYRINTH_DIFFICULTY`, `LABYRINTH_SEED` and `LABYRINTH_FPS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let difficulty = lookup("LABYRINTH_DIFFICULTY")
            .and_then(|v| v.parse::<Difficulty>().ok())
            .unwrap_or_default();
        let seed = lookup("LABYRINTH_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        let fps = lookup("LABYRINTH_FPS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_FPS);
        Self {
            difficulty,
            seed,
            fps,
        }
    }
}
