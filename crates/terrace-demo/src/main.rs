//! Headless terrain streaming demo.
//!
//! Walks (or flies) a viewer across the procedural terrain for a fixed number
//! of ticks, streaming chunks around it and logging what the world does.

mod viewer;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use terrace_config::{CliArgs, Config, default_config_dir};
use terrace_world::{StreamingConfig, World};
use tracing::{debug, error, info};

use crate::viewer::Viewer;

/// Wall time between ticks, so the background batch can make progress.
const TICK: Duration = Duration::from_millis(16);

/// Ticks between status lines.
const STATUS_INTERVAL: u32 = 60;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    terrace_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terrain streaming failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), terrace_world::WorldError> {
    let streaming = StreamingConfig {
        render_distance: config.streaming.render_distance,
    };
    let mut world = World::from_params(streaming, &config.terrain.params())?;
    let mut viewer = Viewer::new(&config.viewer);

    info!(
        seed = config.terrain.seed,
        ticks = config.viewer.ticks,
        mode = ?viewer.mode(),
        "starting terrain walk"
    );

    let mut merged_total = 0usize;
    let mut evicted_total = 0usize;

    for tick in 0..config.viewer.ticks {
        let report = world.update(viewer.position())?;
        merged_total += report.merged.len();
        evicted_total += report.evicted.len();

        if report.dispatched > 0 {
            debug!(tick, dispatched = report.dispatched, "requested chunks");
        }

        viewer.step(&world);

        if tick % STATUS_INTERVAL == 0 {
            let p = viewer.position();
            let decor: usize = world.chunks().map(|c| c.decor().len()).sum();
            info!(
                tick,
                x = p.x,
                y = p.y,
                z = p.z,
                resident = world.resident_count(),
                decor,
                batch_running = world.is_batch_running(),
                "status"
            );
        }

        std::thread::sleep(TICK);
    }

    info!(
        merged = merged_total,
        evicted = evicted_total,
        resident = world.resident_count(),
        "terrain walk finished"
    );
    world.shutdown();
    Ok(())
}
