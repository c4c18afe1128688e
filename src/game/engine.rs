use std::time::Duration;

use super::{
    action::Direction,
    config::{GameConfig, SCORE_PER_FOOD},
    food::{FoodPlacer, RandomFoodPlacer},
    speed::GameSpeed,
    state::{CollisionType, GamePhase, GameState, Position, Snake},
};
use crate::persistence::HighScoreStore;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether this step raised the high score
    pub new_high_score: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the step was applied; false when the game was not running
    pub advanced: bool,
    /// Whether the game has ended
    pub terminated: bool,
    /// New tick interval when the speed changed, the clock must be re-armed with it
    pub new_tick_interval: Option<Duration>,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn suppressed(phase: GamePhase) -> Self {
        Self {
            advanced: false,
            terminated: phase == GamePhase::GameOver,
            new_tick_interval: None,
            info: StepInfo::default(),
        }
    }
}

/// What a toggle input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new game was started (from the start screen or after game over)
    Started,
    Paused,
    Resumed,
}

/// The game engine that handles all game logic.
///
/// Owns what outlives a single game: configuration, the food placer and the
/// high score with its store. Each game lives in a [`GameState`].
pub struct GameEngine {
    config: GameConfig,
    placer: Box<dyn FoodPlacer + Send>,
    store: Box<dyn HighScoreStore>,
    high_score: u32,
}

impl GameEngine {
    /// Create a new game engine with random food placement
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_placer(config, Box::new(RandomFoodPlacer::new()), store)
    }

    pub fn with_placer(
        config: GameConfig,
        placer: Box<dyn FoodPlacer + Send>,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let high_score = match store.read() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };

        Self {
            config,
            placer,
            store,
            high_score,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// State shown before the first game: empty board, no food
    pub fn initial_state(&self) -> GameState {
        let mut state = GameState::new(
            Snake::empty(),
            None,
            self.config.grid(),
            GameSpeed::from_config(&self.config),
        );
        state.phase = GamePhase::NotStarted;
        state
    }

    /// Start a fresh game
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::from_body(self.config.start_body(), Direction::Right);
        let grid = self.config.grid();
        let food = self.placer.place(&grid, &snake.body);

        log::debug!("New game, food at {:?}", food);

        GameState::new(snake, food, grid, GameSpeed::from_config(&self.config))
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult::suppressed(state.phase);
        }
        let Some(head) = state.snake.head() else {
            return StepResult::suppressed(state.phase);
        };

        state.snake.direction = state.pending_direction;
        let new_head = head.moved_in_direction(state.snake.direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over ({:?} at {:?}), score {}",
                collision_type,
                new_head,
                state.score
            );

            return StepResult {
                advanced: true,
                terminated: true,
                new_tick_interval: None,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..Default::default()
                },
            };
        }

        let ate_food = state.food == Some(new_head);
        state.snake.advance_to(new_head, ate_food);
        state.steps += 1;

        let mut info = StepInfo {
            ate_food,
            ..Default::default()
        };
        let mut new_tick_interval = None;

        if ate_food {
            // Stays a multiple of the increment instead of wrapping
            state.score = state.score.checked_add(SCORE_PER_FOOD).unwrap_or(state.score);
            info.new_high_score = self.record_score(state.score);
            state.food = self.placer.place(&state.grid, &state.snake.body);

            if state.speed.accelerate() {
                new_tick_interval = Some(state.speed.interval());
            }

            log::debug!(
                "Ate food at {:?}, score {}, next food {:?}, tick {:?}",
                new_head,
                state.score,
                state.food,
                state.speed.interval()
            );
        }

        StepResult {
            advanced: true,
            terminated: false,
            new_tick_interval,
            info,
        }
    }

    /// Handle the start/pause toggle input
    pub fn toggle(&mut self, state: &mut GameState) -> ToggleOutcome {
        match state.phase {
            GamePhase::NotStarted | GamePhase::GameOver => {
                *state = self.reset();
                ToggleOutcome::Started
            }
            GamePhase::Running | GamePhase::Paused => match state.toggle_pause() {
                GamePhase::Paused => ToggleOutcome::Paused,
                _ => ToggleOutcome::Resumed,
            },
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.grid.in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Against the body before the move, tail included
        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn record_score(&mut self, score: u32) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        log::info!("New high score: {}", score);

        if let Err(e) = self.store.write(score) {
            log::error!("Could not save high score: {}", e);
        }
        true
    }
}
