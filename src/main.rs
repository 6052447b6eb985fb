//! chessduel - play chess against a friend or an alpha-beta engine in the terminal
//!
//! Run with: `cargo run -- --mode vs-computer --side black --depth 3`
//!
//! Logs go to stderr; set `RUST_LOG=chessduel=debug` to follow the turn flow.

use anyhow::Context;
use chessduel::core::{load_settings, save_settings, GameSettings};
use chessduel::game::{GameConfig, GameSession, PlayMode, PlayerSide, TurnController};
use clap::Parser;
use std::time::Duration;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "chessduel", version, about = "Terminal chess with a minimax opponent")]
struct Cli {
    /// Play against a human or the computer
    #[arg(long, value_enum)]
    mode: Option<PlayMode>,

    /// Your side when playing the computer
    #[arg(long, value_enum)]
    side: Option<PlayerSide>,

    /// Computer search depth in plies (1-6)
    #[arg(long)]
    depth: Option<u32>,

    /// Starting time per side, in seconds
    #[arg(long)]
    time: Option<u32>,

    /// Seconds added after each move
    #[arg(long)]
    increment: Option<u32>,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Store the resulting settings as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn apply(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(side) = self.side {
            settings.player_side = side;
        }
        if let Some(depth) = self.depth {
            settings.search_depth = depth;
        }
        if let Some(time) = self.time {
            settings.clock_seconds = time;
        }
        if let Some(increment) = self.increment {
            settings.increment_seconds = increment;
        }
        settings.sanitized()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let settings = cli.apply(load_settings());

    if cli.save_settings {
        let path = save_settings(&settings).context("saving settings")?;
        println!("Settings saved to {}", path.display());
    }

    tracing::info!("[SETTINGS] {:?}", settings);

    let controller = TurnController::new(GameConfig::from_settings(&settings, cli.fen.clone()))
        .context("starting game")?;
    println!("{} | type 'help' for commands", settings.mode.description());

    let mut session = GameSession::new(
        controller,
        Duration::from_millis(settings.think_delay_ms),
        std::io::stdout(),
    );
    session
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("running game session")?;

    if let Some(result) = session.controller().result() {
        println!("{}", result);
    }
    Ok(())
}
