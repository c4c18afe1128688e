//! Grid snake - a terminal Snake game with a speed ramp
//!
//! This library provides:
//! - Core game logic (game module)
//! - Tick scheduling for the game loop (clock module)
//! - High score persistence (persistence module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play loop (modes module)

pub mod clock;
pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
