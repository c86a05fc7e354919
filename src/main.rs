//! Connect Four GUI
//!
//! Play Connect Four against another human, the minimax engine, or a random
//! player.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use connect_four::config::AppConfig;
use connect_four::ui::{ConnectFourApp, GameMode, OpponentKind};
use connect_four::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans on one screen
    Pvp,
    /// Human against the minimax engine
    Engine,
    /// Human against a random player
    Random,
}

/// Play Connect Four against a minimax engine.
#[derive(Parser)]
#[command(name = "connect_four", about = "Connect Four with a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override engine search depth
    #[arg(long)]
    depth: Option<u8>,

    /// Search root columns in parallel
    #[arg(long)]
    parallel: bool,

    /// Who the human plays against
    #[arg(long, value_enum, default_value_t = Mode::Engine)]
    mode: Mode,

    /// Let the automated player move first
    #[arg(long)]
    human_second: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if cli.parallel {
        config.engine.parallel = true;
    }
    config.validate().context("invalid configuration")?;

    let human = if cli.human_second {
        Player::Two
    } else {
        Player::One
    };
    let mode = match cli.mode {
        Mode::Pvp => GameMode::PvP,
        Mode::Engine => GameMode::PvE {
            human,
            opponent: OpponentKind::Engine,
        },
        Mode::Random => GameMode::PvE {
            human,
            opponent: OpponentKind::Random,
        },
    };

    info!(
        "starting {}x{} game, depth {}, mode {:?}",
        config.board.rows, config.board.cols, config.engine.depth, mode
    );
    let app = ConnectFourApp::new(&config, mode)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native("Connect Four", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("failed to start GUI: {e}"))
}
