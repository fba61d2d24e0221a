mod app;
mod config;
mod event;
mod game;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::GameConfig;
use event::{Event, EventHandler};
use game::GameState;

/// Single-screen Breakout in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON file with game settings; flags below take precedence.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of block rows.
    #[arg(long, value_name = "COUNT")]
    rows: Option<usize>,
    /// Number of block columns.
    #[arg(long, value_name = "COUNT")]
    columns: Option<usize>,
    /// Milliseconds between simulation ticks.
    #[arg(long, value_name = "MILLISECONDS", value_parser = clap::value_parser!(u64).range(1..=1_000))]
    tick_ms: Option<u64>,
    /// Milliseconds between redraws.
    #[arg(long, value_name = "MILLISECONDS", value_parser = clap::value_parser!(u64).range(1..=1_000))]
    render_ms: Option<u64>,
    /// Seed for the paddle spin; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (filtered by RUST_LOG, default info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl CliArgs {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(render_ms) = self.render_ms {
            config.render_ms = render_ms;
        }
        config.validate()?;
        Ok(config)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_else(|_| {
                    log::warn!("system clock before epoch, using fixed seed");
                    0
                })
        })
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = args.game_config().context("invalid game configuration")?;
    let seed = args.seed();
    log::info!(
        "starting {}x{} grid, playfield {}x{}, tick {}ms, render {}ms, seed {}",
        config.rows,
        config.columns,
        config.screen_width(),
        config.screen_height(),
        config.tick_ms,
        config.render_ms,
        seed
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(GameState::new(config, seed));
    let result = run(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App, config: &GameConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.tick_period(), config.render_period());
    terminal.draw(|frame| app.render(frame))?;

    loop {
        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Render | Event::Resize => {
                terminal.draw(|frame| app.render(frame))?;
            }
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            log::info!("quit after {} ticks", app.state.ticks);
            return Ok(());
        }
    }
}
