//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time and input are driven from outside: the caller decides when `step` runs and
//! feeds direction changes through [`GameState::set_pending_direction`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult, ToggleOutcome};
pub use food::{FoodPlacer, RandomFoodPlacer};
pub use grid::Grid;
pub use speed::GameSpeed;
pub use state::{CollisionType, GamePhase, GameState, Position, Snake, Snapshot};
