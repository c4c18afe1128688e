use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("Initial snake length must be at least 1")]
    EmptySnake,
    #[error("Initial snake length {length} does not fit the grid width {width}")]
    SnakeTooLong { length: usize, width: usize },
    #[error("Starting snake does not fit on the grid")]
    SnakeOutOfBounds,
    #[error("Minimum tick ({min_ms} ms) must be positive and not above the initial tick ({initial_ms} ms)")]
    InvalidSpeed { initial_ms: u64, min_ms: u64 },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("High score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("High score store is malformed: {0}")]
    Format(#[from] serde_json::Error),
}
