//! Configuration for the terrain demo.
//!
//! Settings persist to disk as a RON file. CLI arguments parsed with clap
//! override whatever was loaded, and unknown or missing fields are tolerated
//! so older and newer files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, StreamingSettings, TerrainConfig, ViewerConfig,
    default_config_dir,
};
pub use error::ConfigError;
