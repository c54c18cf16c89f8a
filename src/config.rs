//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LIFE_SECTION__KEY`)
//!
//! Values are fixed for the life of the process; nothing here is editable at runtime.

use figment::{Figment, providers::{Format, Toml, Env}};
use lifegrid_core::{Grid, GridError};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Simulation pacing
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`LIFE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // LIFE_GRID__TILE_SIZE=10 -> grid.tile_size = 10
        figment = figment.merge(Env::prefixed("LIFE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Reject values that cannot produce a running simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.simulation.target_fps == 0 {
            return Err(ConfigError::Invalid("simulation.target_fps must be positive".to_string()));
        }
        if self.simulation.initial_tick_threshold == 0 {
            return Err(ConfigError::Invalid(
                "simulation.initial_tick_threshold must be at least 1".to_string(),
            ));
        }
        if self.rendering.grid_line_thickness < 0.0 {
            return Err(ConfigError::Invalid(
                "rendering.grid_line_thickness must not be negative".to_string(),
            ));
        }
        // Tile size and window fit are checked by the grid itself
        self.build_grid().map(|_| ())
    }

    /// Build the grid described by the window and tile size
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        Grid::from_window(self.window.width, self.window.height, self.grid.tile_size)
            .map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync (caps the frame rate at the display refresh rate)
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_string(),
            width: 1000,
            height: 1000,
            vsync: false,
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side of a square tile in pixels
    pub tile_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { tile_size: 20 }
    }
}

/// Simulation pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frame rate cap for the main loop, independent of generation speed
    pub target_fps: u32,
    /// Frames per generation at startup
    pub initial_tick_threshold: u32,
    /// Advance generations from the first frame
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_fps: 1200,
            initial_tick_threshold: 60,
            start_running: false,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background (dead cell) color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Alive cell color [r, g, b, a]
    pub alive_color: [f32; 4],
    /// Grid line color [r, g, b, a]
    pub grid_line_color: [f32; 4],
    /// Grid line thickness in pixels
    pub grid_line_thickness: f32,
    /// Draw grid lines over the tiles
    pub show_grid_lines: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: lifegrid_render::BLACK,
            alive_color: lifegrid_render::WHITE,
            grid_line_color: lifegrid_render::GRAY,
            grid_line_thickness: 2.0,
            show_grid_lines: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or parsed
    Load(String),
    /// A value is out of range
    Invalid(String),
    /// The window and tile size do not describe a grid
    Grid(GridError),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Grid(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::Grid(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.grid.tile_size, 20);
        assert_eq!(config.simulation.initial_tick_threshold, 60);
        assert!(!config.simulation.start_running);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        let grid = config.build_grid().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (50, 50));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("tile_size"));
        assert!(toml.contains("initial_tick_threshold"));
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let mut config = AppConfig::default();
        config.grid.tile_size = 0;
        match config.validate() {
            Err(ConfigError::Grid(GridError::InvalidTileSize)) => {}
            other => panic!("Expected tile size error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = AppConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_tile_larger_than_window_rejected() {
        let mut config = AppConfig::default();
        config.grid.tile_size = 2000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Grid(GridError::WindowTooSmall { .. }))
        ));
    }

    #[test]
    fn test_zero_threshold_and_fps_rejected() {
        let mut config = AppConfig::default();
        config.simulation.initial_tick_threshold = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.simulation.target_fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid("bad".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad");
    }
}
