//! Mouse stabilizer daemon: smooths raw cursor motion to dampen hand tremor.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use mouse_stabilizer::app::StabilizerApp;
use mouse_stabilizer::config::{SmoothingStrategy, StabilizerConfig};
use mouse_stabilizer::filters::FilterType;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Smoothing strategy (follower, filter-bank)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Filter type for the filter-bank strategy (moving-average, exponential, kalman)
    #[arg(short, long)]
    filter: Option<String>,

    /// Follow strength override (0.05 to 1.0)
    #[arg(long)]
    follow_strength: Option<f32>,

    /// Start with smoothing disabled
    #[arg(long)]
    disabled: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Mouse Stabilizer");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match StabilizerConfig::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                StabilizerConfig::default()
            }
        }
    } else {
        StabilizerConfig::default()
    };

    if let Some(strategy) = args.strategy.as_deref() {
        config.strategy = match strategy {
            "filter-bank" | "filter_bank" => SmoothingStrategy::FilterBank,
            _ => SmoothingStrategy::Follower,
        };
    }
    if let Some(filter) = args.filter.as_deref() {
        config.filter_type = match filter {
            "moving-average" | "moving_average" => FilterType::MovingAverage,
            "kalman" => FilterType::Kalman,
            _ => FilterType::Exponential,
        };
    }
    if let Some(strength) = args.follow_strength {
        config.follow_strength = strength;
    }
    if args.disabled {
        config.enabled = false;
    }
    config.sanitize();

    let mut app = StabilizerApp::new(config)?;
    app.run()?;

    Ok(())
}
