//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrain demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terrace", about = "Streams procedural terrain around a moving viewer")]
pub struct CliArgs {
    /// Terrain seed. Re-derives the seeds of all three noise fields.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Render distance in world units.
    #[arg(long)]
    pub render_distance: Option<f32>,

    /// Number of simulation ticks to run.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Fly freely instead of walking on the terrain.
    #[arg(long)]
    pub fly: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.set_seed(seed);
        }
        if let Some(rd) = args.render_distance {
            self.streaming.render_distance = rd;
        }
        if let Some(ticks) = args.ticks {
            self.viewer.ticks = ticks;
        }
        if args.fly {
            self.viewer.walk = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
