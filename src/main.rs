//! cardswipe - Entry Point

use cardswipe::config::CliOverrides;
use cardswipe::model::AppError;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// cardswipe - swipeable card carousel for the terminal
#[derive(Parser, Debug)]
#[command(name = "cardswipe")]
#[command(version)]
#[command(about = "Swipe through a deck of cards with the mouse")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Card shown on startup (0-based)
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Preferred card width in units (one column is `units_per_column` units)
    #[arg(long)]
    pub slide_width: Option<f32>,

    /// Drag distance in units needed to change cards
    #[arg(short, long)]
    pub threshold: Option<f32>,
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cardswipe::config::load_config_with_precedence(args.config.clone())?;
        let merged = cardswipe::config::merge_config(config_file);
        let with_env = cardswipe::config::apply_env_overrides(merged);

        cardswipe::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                start_index: args.start,
                slide_width: args.slide_width,
                swipe_threshold: args.threshold,
            },
        )
    };

    cardswipe::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    cardswipe::view::run_with_config(&config)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
