//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use terrace_noise::{NoiseParams, TerrainParams};

use crate::error::ConfigError;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for the demo, e.g. `~/.config/terrace` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terrace"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Chunk streaming settings.
    pub streaming: StreamingSettings,
    /// Viewer settings for the headless driver.
    pub viewer: ViewerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Noise parameters for the three terrain fields.
///
/// `seed` is the base seed the three field seeds were derived from. Editing a
/// field seed by hand is allowed; it just no longer follows `seed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: i32,
    /// Main height noise.
    pub main: NoiseParams,
    /// Low-frequency noise that scales the main noise.
    pub modulation: NoiseParams,
    /// Decoration density noise.
    pub decor: NoiseParams,
}

/// Chunk streaming configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StreamingSettings {
    /// Planar distance from the viewer within which chunks stay resident.
    pub render_distance: f32,
}

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Starting x position.
    pub start_x: f32,
    /// Starting z position.
    pub start_z: f32,
    /// Distance travelled per tick.
    pub speed: f32,
    /// Eye height above the ground (or water) in walk mode.
    pub eye_height: f32,
    /// Walk on the terrain instead of flying freely.
    pub walk: bool,
    /// Number of simulation ticks the demo runs.
    pub ticks: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

impl Default for StreamingSettings {
    fn default() -> Self {
        Self {
            render_distance: 1000.0,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_z: 0.0,
            speed: 10.0,
            eye_height: 5.0,
            walk: true,
            ticks: 600,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Terrain ---

impl TerrainConfig {
    /// Default field shapes with seeds `seed`, `seed + 1` and `seed + 2`.
    pub fn from_seed(seed: i32) -> Self {
        let params = TerrainParams::from_seed(seed);
        Self {
            seed,
            main: params.main,
            modulation: params.modulation,
            decor: params.decor,
        }
    }

    /// Re-derive the three field seeds from `seed`, keeping every other setting.
    pub fn set_seed(&mut self, seed: i32) {
        let params = self.params().with_seed(seed);
        self.seed = seed;
        self.main = params.main;
        self.modulation = params.modulation;
        self.decor = params.decor;
    }

    pub fn params(&self) -> TerrainParams {
        TerrainParams {
            main: self.main,
            modulation: self.modulation,
            decor: self.decor,
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Reject settings the terrain or streaming code cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.params().validate()?;

        let rd = self.streaming.render_distance;
        if !rd.is_finite() || rd < 0.0 {
            return Err(ConfigError::InvalidRenderDistance(rd));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrace_noise::NoiseError;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("render_distance: 1000.0"));
        assert!(ron_str.contains("zoom: 600.0"));
        assert!(ron_str.contains("eye_height: 5.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.terrain.set_seed(-12);
        config.viewer.walk = false;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_default_terrain_matches_standard_params() {
        assert_eq!(Config::default().terrain.params(), TerrainParams::default());
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(terrain: (seed: 3), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.streaming, StreamingSettings::default());
        assert_eq!(config.viewer, ViewerConfig::default());
        // Field params were not given, so they keep the seed-0 defaults.
        assert_eq!(config.terrain.seed, 3);
        assert_eq!(config.terrain.main.seed, 0);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_set_seed_rederives_field_seeds() {
        let mut terrain = TerrainConfig::default();
        terrain.main.octaves = 5;
        terrain.set_seed(100);
        assert_eq!(terrain.seed, 100);
        assert_eq!(terrain.main.seed, 100);
        assert_eq!(terrain.modulation.seed, 101);
        assert_eq!(terrain.decor.seed, 102);
        assert_eq!(terrain.main.octaves, 5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.streaming.render_distance = 450.0;
        config.terrain.set_seed(9);
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// terrain demo\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.terrain.modulation.octaves = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(NoiseError::ZeroOctaves))
        ));

        let mut config = Config::default();
        config.streaming.render_distance = -5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRenderDistance(_))
        ));
    }
}
