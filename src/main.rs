use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, GameEngine, RandomFoodPlacer};
use grid_snake::modes::HumanMode;
use grid_snake::persistence::{HighScoreStore, JsonFileStore, MemoryStore};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, faster with every bite")]
struct Cli {
    /// Grid width (overrides the config file; the start cell moves only if
    /// the snake no longer fits)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides the config file; the start cell moves only if
    /// the snake no longer fits)
    #[arg(long)]
    height: Option<usize>,

    /// JSON file with game settings; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the high score is kept
    #[arg(long, default_value = ".grid_snake_scores.json")]
    high_score_file: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if cli.width.is_some() || cli.height.is_some() {
        let width = cli.width.unwrap_or(config.grid_width);
        let height = cli.height.unwrap_or(config.grid_height);
        config = config.with_grid(width, height);
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = load_config(&cli)?;
    log::info!(
        "Starting on a {}x{} grid",
        config.grid_width,
        config.grid_height
    );

    let store: Box<dyn HighScoreStore> = if cli.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&cli.high_score_file))
    };
    let placer = match cli.seed {
        Some(seed) => RandomFoodPlacer::seeded(seed),
        None => RandomFoodPlacer::new(),
    };

    let engine = GameEngine::with_placer(config, Box::new(placer), store);
    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
