use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::grid::Grid;
use super::state::Position;
use crate::error::ConfigError;

/// Points added per food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Head cell at the start of every game; the body trails to the left
    pub start_head: Position,

    /// Tick interval at the start of a game
    pub initial_tick_ms: u64,
    /// Amount the tick interval shrinks per food
    pub speed_step_ms: u64,
    /// Shortest tick interval the ramp can reach
    pub min_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        let initial_snake_length = 3;
        Self {
            grid_width: width,
            grid_height: height,
            initial_snake_length,
            start_head: Self::start_head_for(width, height, initial_snake_length),
            initial_tick_ms: 160,
            speed_step_ms: 2,
            min_tick_ms: 70,
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Replace the grid size.
    ///
    /// The start cell is kept if the starting snake still fits on the new
    /// grid, otherwise it moves to the default spot for that size.
    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        if !self.start_fits() {
            self.start_head = Self::start_head_for(width, height, self.initial_snake_length);
        }
        self
    }

    /// Load a JSON config; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Cells of the snake at the start of a game, head first.
    ///
    /// Lengths that do not fit an `i32` are cut short; `validate` rejects them.
    pub fn start_body(&self) -> Vec<Position> {
        let length = i32::try_from(self.initial_snake_length).unwrap_or(i32::MAX);
        (0..length)
            .map_while(|i| self.start_head.x.checked_sub(i))
            .map(|x| Position::new(x, self.start_head.y))
            .collect()
    }

    // The body trails horizontally from the head, so the length is bounded by
    // the width before any cell is built
    fn start_fits(&self) -> bool {
        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_width {
            return false;
        }
        let grid = self.grid();
        self.start_body().into_iter().all(|p| grid.in_bounds(p))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.initial_snake_length > self.grid_width {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }
        if !self.start_fits() {
            return Err(ConfigError::SnakeOutOfBounds);
        }
        if self.min_tick_ms == 0 || self.min_tick_ms > self.initial_tick_ms {
            return Err(ConfigError::InvalidSpeed {
                initial_ms: self.initial_tick_ms,
                min_ms: self.min_tick_ms,
            });
        }
        Ok(())
    }

    // (5, 10) on the default 20x20 grid
    fn start_head_for(width: usize, height: usize, length: usize) -> Position {
        let x = (length + 2).min(width.saturating_sub(1));
        Position::new(x as i32, (height / 2) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.start_head, Position::new(5, 10));
        assert_eq!(config.initial_tick_ms, 160);
        assert_eq!(config.speed_step_ms, 2);
        assert_eq!(config.min_tick_ms, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_body_trails_left() {
        let config = GameConfig::default();
        assert_eq!(
            config.start_body(),
            vec![
                Position::new(5, 10),
                Position::new(4, 10),
                Position::new(3, 10)
            ]
        );
    }

    #[test]
    fn test_with_grid_moves_start() {
        let config = GameConfig::default().with_grid(10, 6);
        assert_eq!(config.start_head, Position::new(5, 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            GameConfig::new(0, 5).validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 5
            })
        );

        assert_eq!(
            GameConfig::new(2, 5).validate(),
            Err(ConfigError::SnakeTooLong {
                length: 3,
                width: 2
            })
        );

        let config = GameConfig {
            start_head: Position::new(1, 0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SnakeOutOfBounds));

        let config = GameConfig {
            min_tick_ms: 200,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }

    #[test]
    fn test_huge_snake_length_rejected() {
        for length in [1_000_000_000, usize::MAX] {
            let config = GameConfig {
                initial_snake_length: length,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::SnakeTooLong { length, width: 20 })
            );
        }
    }

    #[test]
    fn test_start_body_never_empty_for_valid_config() {
        let config = GameConfig {
            initial_snake_length: 6,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.start_body().len(), 6);
        assert_eq!(config.start_body()[5], Position::new(0, 10));

        let too_long = GameConfig {
            initial_snake_length: 7,
            ..Default::default()
        };
        assert_eq!(too_long.validate(), Err(ConfigError::SnakeOutOfBounds));
    }

    #[test]
    fn test_with_grid_keeps_fitting_start() {
        let config = GameConfig {
            start_head: Position::new(8, 2),
            ..Default::default()
        };

        let larger = config.clone().with_grid(30, 30);
        assert_eq!(larger.start_head, Position::new(8, 2));

        let smaller = config.with_grid(6, 6);
        assert_eq!(smaller.start_head, Position::new(5, 3));
        assert!(smaller.validate().is_ok());
    }

    #[test]
    fn test_score_increment_not_configurable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "score_per_food": 7 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_tick_ms": 200, "min_tick_ms": 50 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.initial_tick_ms, 200);
        assert_eq!(config.min_tick_ms, 50);
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.start_head, Position::new(5, 10));
    }

    #[test]
    fn test_missing_json_file() {
        let result = GameConfig::from_json_file(Path::new("/nonexistent/snake.json"));
        assert!(result.is_err());
    }
}
