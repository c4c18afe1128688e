use std::time::{Duration, Instant};

/// Play time and game count for the header line.
///
/// The timer only runs while a game is running, so time spent on the pause
/// screen or after a game over does not count.
pub struct GameMetrics {
    pub elapsed_time: Duration,
    pub games_played: u32,
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            games_played: 0,
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.accumulated
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    pub fn is_timing(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn on_game_start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.running_since = Some(Instant::now());
    }

    pub fn on_pause(&mut self) {
        self.stop_timer();
    }

    pub fn on_resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn on_game_over(&mut self) {
        self.stop_timer();
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    fn stop_timer(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
        self.elapsed_time = self.accumulated;
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_games_played() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_start();
        metrics.on_game_over();
        metrics.on_game_start();
        metrics.on_game_over();

        assert_eq!(metrics.games_played, 2);
        assert!(!metrics.is_timing());
    }

    #[test]
    fn test_pause_stops_timer() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(30));
        metrics.on_pause();

        let paused_at = metrics.elapsed_time;
        assert!(paused_at.as_millis() >= 30);

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, paused_at);

        metrics.on_resume();
        assert!(metrics.is_timing());
        metrics.update();
        assert!(metrics.elapsed_time >= paused_at);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
