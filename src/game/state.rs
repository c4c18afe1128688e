use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::action::Direction;
use super::grid::Grid;
use super::speed::GameSpeed;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Committed direction, the one the last step moved in
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = Vec::with_capacity(length);
        let (dx, dy) = direction.opposite().delta();
        let mut segment = head;

        for _ in 0..length {
            body.push(segment);
            segment = segment.moved_by(dx, dy);
        }

        Self { body, direction }
    }

    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    pub fn empty() -> Self {
        Self::from_body(Vec::new(), Direction::Right)
    }

    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    /// Check if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front; the tail stays unless `grow` is false
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Coarse lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Option<Position>,
    /// Direction applied at the start of the next step
    pub pending_direction: Direction,
    pub score: u32,
    pub speed: GameSpeed,
    pub phase: GamePhase,
    pub steps: u32,
}

impl GameState {
    /// Create a running game state
    pub fn new(snake: Snake, food: Option<Position>, grid: Grid, speed: GameSpeed) -> Self {
        Self {
            grid,
            pending_direction: snake.direction,
            snake,
            food,
            score: 0,
            speed,
            phase: GamePhase::Running,
            steps: 0,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Queue a turn for the next step.
    ///
    /// Ignored unless the game is running, and when `direction` would reverse
    /// the committed direction. Returns whether the turn was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Flip between running and paused; no effect in any other phase.
    ///
    /// Returns the phase after the call.
    pub fn toggle_pause(&mut self) -> GamePhase {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
        self.phase
    }

    pub fn tick_interval(&self) -> Duration {
        self.speed.interval()
    }

    pub fn snapshot(&self, high_score: u32) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snake_segments: self.snake.body.clone(),
            direction: self.snake.direction,
            food: self.food,
            score: self.score,
            high_score,
            phase: self.phase,
            tick_ms: self.speed.interval().as_millis() as u64,
        }
    }
}

/// Read-only view of a game handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub snake_segments: Vec<Position>,
    pub direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub tick_ms: u64,
}

impl Snapshot {
    pub fn head(&self) -> Option<Position> {
        self.snake_segments.first().copied()
    }
}
