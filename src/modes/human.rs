use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::clock::GameClock;
use crate::game::{GameEngine, GamePhase, GameState, ToggleOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal.
///
/// Sole owner of the engine and the game state: input, ticks and rendering
/// all run on one `select!` loop, so no step can overlap another mutation.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    clock: GameClock,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.initial_state();
        let clock = GameClock::new(state.tick_interval());

        Self {
            engine,
            state,
            clock,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        log::info!("Terminal ready, high score {}", self.engine.high_score());

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = self.clock.tick() => {
                    if self.state.is_running() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.state.snapshot(self.engine.high_score());
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                log::info!("Quitting after {} games", self.metrics.games_played);
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            self.apply_action(self.input_handler.handle_key_event(key));
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                self.state.set_pending_direction(direction);
            }
            KeyAction::Toggle => match self.engine.toggle(&mut self.state) {
                ToggleOutcome::Started => self.on_new_game(),
                ToggleOutcome::Paused => {
                    log::debug!("Paused");
                    self.metrics.on_pause();
                }
                ToggleOutcome::Resumed => {
                    log::debug!("Resumed");
                    self.metrics.on_resume();
                }
            },
            KeyAction::Restart => {
                self.state = self.engine.reset();
                self.on_new_game();
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state);

        if let Some(period) = result.new_tick_interval {
            self.clock.rearm(period);
        }

        if result.terminated && self.state.phase == GamePhase::GameOver {
            self.metrics.on_game_over();
        }
    }

    fn on_new_game(&mut self) {
        log::info!("New game started");
        self.clock.rearm(self.state.tick_interval());
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
