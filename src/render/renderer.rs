use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GamePhase, Position, Snapshot};
use crate::metrics::GameMetrics;

// Body segments cycle through these, head excluded
const BODY_COLORS: [Color; 3] = [Color::LightGreen, Color::LightCyan, Color::LightMagenta];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(snapshot);
        frame.render_widget(grid, game_area);

        if let Some(overlay) = self.render_overlay(snapshot) {
            let popup = centered_rect(game_area, 40, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(overlay, popup);
        }

        let controls = self.render_controls(snapshot.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(snapshot.grid.height);

        for y in 0..snapshot.grid.height {
            let mut spans = Vec::with_capacity(snapshot.grid.width);

            for x in 0..snapshot.grid.width {
                let pos = Position::new(x as i32, y as i32);
                let segment = snapshot.snake_segments.iter().position(|&p| p == pos);

                let cell = match segment {
                    Some(0) => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(index) => Span::styled(
                        "□ ",
                        Style::default().fg(BODY_COLORS[(index - 1) % BODY_COLORS.len()]),
                    ),
                    None if snapshot.food == Some(pos) => Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(snapshot.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{} ms", snapshot.tick_ms), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_overlay(&self, snapshot: &Snapshot) -> Option<Paragraph<'static>> {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let hint = |t: &'static str| Span::styled(t, Style::default().fg(Color::Gray));

        let (title, color, lines) = match snapshot.phase {
            GamePhase::Running => return None,
            GamePhase::NotStarted => (
                "SNAKE",
                Color::Cyan,
                vec![Line::from(vec![
                    hint("Press "),
                    key("Space", Color::Green),
                    hint(" to start"),
                ])],
            ),
            GamePhase::Paused => (
                "PAUSED",
                Color::Yellow,
                vec![Line::from(vec![
                    hint("Press "),
                    key("Space", Color::Green),
                    hint(" to resume"),
                ])],
            ),
            GamePhase::GameOver => (
                "GAME OVER",
                Color::Red,
                vec![
                    Line::from(vec![
                        Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                        Span::styled(
                            snapshot.score.to_string(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(""),
                    Line::from(vec![
                        hint("Press "),
                        key("Space", Color::Green),
                        hint(" to play again or "),
                        key("Q", Color::Red),
                        hint(" to quit"),
                    ]),
                ],
            ),
        };

        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];
        text.extend(lines);

        Some(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
        )
    }

    fn render_controls(&self, phase: GamePhase) -> Paragraph<'static> {
        let toggle = match phase {
            GamePhase::Running => " to pause | ",
            GamePhase::Paused => " to resume | ",
            GamePhase::NotStarted | GamePhase::GameOver => " to start | ",
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(toggle),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
