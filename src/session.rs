//! One game: a maze, the player on it, a move counter and a clock.
//!
//! `Idle -> Running -> Won`. Only a running session accepts moves. Restarting
//! or changing difficulty builds a new session and drops the old one.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::direction::Direction;
use crate::error::MazeError;
use crate::generator::{generate, Maze};
use crate::grid::Pos;
use crate::movement::attempt_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The session is not running.
    Ignored,
    /// A wall was in the way; nothing changed.
    Blocked,
    Moved(Pos),
    /// The move landed on the goal.
    Won(Pos),
}

#[derive(Debug, Clone)]
pub struct Session {
    maze: Maze,
    player: Pos,
    goal: Pos,
    moves: u32,
    state: SessionState,
    started_at: Option<Instant>,
    finished_in: Option<Duration>,
}

impl Session {
    /// An idle session on `maze`: player on the start cell, clock stopped.
    pub fn new(maze: Maze) -> Self {
        let player = maze.start();
        let goal = maze.goal();
        Self {
            maze,
            player,
            goal,
            moves: 0,
            state: SessionState::Idle,
            started_at: None,
            finished_in: None,
        }
    }

    /// Generates a maze and starts playing on it.
    pub fn generate<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        braid_factor: f64,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut session = Self::new(generate(cols, rows, braid_factor, rng)?);
        session.start();
        Ok(session)
    }

    /// Starts the clock. A player already standing on the goal (1x1 maze)
    /// wins on the spot with zero moves. No-op unless idle.
    pub fn start(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        let now = Instant::now();
        self.started_at = Some(now);
        self.state = SessionState::Running;
        if self.player == self.goal {
            self.finish(now);
        }
    }

    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state != SessionState::Running {
            return MoveOutcome::Ignored;
        }
        let result = attempt_move(&self.maze, self.player, direction);
        if !result.accepted {
            return MoveOutcome::Blocked;
        }
        self.player = result.position;
        self.moves += 1;
        if self.player == self.goal {
            self.finish(Instant::now());
            MoveOutcome::Won(self.player)
        } else {
            MoveOutcome::Moved(self.player)
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    /// Zero while idle, live while running, frozen once won.
    pub fn elapsed(&self) -> Duration {
        match (self.finished_in, self.started_at) {
            (Some(total), _) => total,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    fn finish(&mut self, now: Instant) {
        self.state = SessionState::Won;
        self.finished_in = self.started_at.map(|start| now.duration_since(start));
    }
}

/// `MM:SS`, minutes not wrapped at the hour.
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(cols: usize, rows: usize, braid: f64, seed: u64) -> Session {
        Session::generate(cols, rows, braid, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn closed_direction(session: &Session) -> Option<Direction> {
        let passages = session.maze().passages(session.player());
        Direction::ALL.into_iter().find(|dir| passages.is_closed(*dir))
    }

    #[test]
    fn new_session_is_idle_and_ignores_moves() {
        let maze = generate(3, 3, 0.0, &mut StdRng::seed_from_u64(5)).unwrap();
        let mut session = Session::new(maze);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.player(), Pos::new(0, 0));
        assert_eq!(session.goal(), Pos::new(2, 2));
        assert_eq!(session.elapsed(), Duration::ZERO);
        for dir in Direction::ALL {
            assert_eq!(session.attempt_move(dir), MoveOutcome::Ignored);
        }
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn single_cell_maze_is_won_on_start() {
        let maze = generate(1, 1, 0.0, &mut StdRng::seed_from_u64(0)).unwrap();
        let mut session = Session::new(maze);
        // Construction alone does not win.
        assert_eq!(session.state(), SessionState::Idle);
        session.start();
        assert!(session.is_won());
        assert_eq!(session.moves(), 0);
        for dir in Direction::ALL {
            assert_eq!(session.attempt_move(dir), MoveOutcome::Ignored);
        }
    }

    #[test]
    fn generate_starts_running() {
        let session = seeded(4, 4, 0.0, 1);
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn blocked_moves_change_nothing() {
        let mut session = seeded(6, 6, 0.0, 9);
        let dir = closed_direction(&session).expect("origin has a closed side");
        let maze_before = session.maze().clone();
        for _ in 0..5 {
            assert_eq!(session.attempt_move(dir), MoveOutcome::Blocked);
        }
        assert_eq!(session.player(), Pos::new(0, 0));
        assert_eq!(session.moves(), 0);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.maze(), &maze_before);
    }

    #[test]
    fn accepted_moves_are_counted() {
        let mut session = seeded(6, 6, 0.0, 4);
        let dir = session
            .maze()
            .passages(session.player())
            .open_directions()
            .next()
            .expect("origin has an exit");
        let target = session.maze().grid().neighbor(Pos::new(0, 0), dir).unwrap();
        assert_eq!(session.attempt_move(dir), MoveOutcome::Moved(target));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.attempt_move(dir.opposite()), MoveOutcome::Moved(Pos::new(0, 0)));
        assert_eq!(session.moves(), 2);
    }

    #[test]
    fn stepping_onto_the_goal_wins_and_freezes() {
        let mut session = seeded(2, 1, 0.0, 0);
        assert_eq!(session.attempt_move(Direction::East), MoveOutcome::Won(Pos::new(1, 0)));
        assert!(session.is_won());
        assert_eq!(session.moves(), 1);
        let frozen = session.elapsed();
        assert_eq!(session.attempt_move(Direction::West), MoveOutcome::Ignored);
        assert_eq!(session.player(), Pos::new(1, 0));
        assert_eq!(session.elapsed(), frozen);
    }

    #[test]
    fn start_is_idempotent() {
        let mut session = seeded(2, 1, 0.0, 0);
        session.attempt_move(Direction::East);
        session.start();
        assert!(session.is_won());
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(754)), "12:34");
        assert_eq!(format_clock(Duration::from_secs(100 * 60 + 5)), "100:05");
    }
}
