//! # Configuration
//!
//! Rendering defaults and the storefront origin can be set in a TOML file
//! (`ticketqr.toml` by default):
//!
//! ```toml
//! [symbol]
//! cells = 21
//! size = 200.0
//! dark = "#0A0A0A"
//! light = "white"
//!
//! [links]
//! origin = "https://oldskool.example"
//! ```
//!
//! Every key is optional, missing keys take their default value.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::svg::{serialize_to_svg_with, SvgStyle};
use crate::{encode, synthesize_grid, wrap_as_data_url, SymbolSize};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "ticketqr.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot write config file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid symbol settings: {0}")]
    Render(#[from] RenderError),
}

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub symbol: SymbolConfig,
    pub links: LinkConfig,
}

/// How symbols are rendered.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Cells per side, between 14 and 177.
    pub cells: usize,
    #[serde(flatten)]
    pub style: SvgStyle,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            cells: SymbolSize::STANDARD.cells(),
            style: SvgStyle::default(),
        }
    }
}

impl SymbolConfig {
    pub fn symbol_size(&self) -> Result<SymbolSize, RenderError> {
        SymbolSize::new(self.cells)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        self.symbol_size()?;
        self.style.validate()
    }

    /// Render `payload` as an SVG data URL with these settings.
    pub fn render(&self, payload: &str) -> Result<String, RenderError> {
        let size = self.symbol_size()?;
        let grid = synthesize_grid(&encode(payload), size);
        let svg = serialize_to_svg_with(&grid, &self.style)?;
        debug!(
            cells = size.cells(),
            size = self.style.size,
            svg_len = svg.len(),
            "rendered configured symbol"
        );
        Ok(wrap_as_data_url(&svg))
    }
}

/// Where generated links point to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Storefront origin, e.g. `https://oldskool.example`.
    pub origin: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5173".to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.symbol.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Load configuration from [DEFAULT_CONFIG_PATH].
    ///
    /// Falls back to the default configuration if the file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the specified path.
    ///
    /// Falls back to the default configuration if the file doesn't exist or is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(config) => {
                info!(path = %path.display(), origin = %config.links.origin, "loaded configuration");
                config
            }
            Err(ConfigError::Io(e)) => {
                info!(path = %path.display(), error = %e, "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.symbol.cells, 21);
        assert_eq!(config.symbol.style.size, 200.0);
        assert_eq!(config.symbol.style.dark, "#0A0A0A");
        assert_eq!(config.symbol.style.light, "white");
        assert_eq!(config.links.origin, "http://localhost:5173");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("[symbol]\nsize = 150.0\n").unwrap();
        assert_eq!(config.symbol.style.size, 150.0);
        assert_eq!(config.symbol.cells, 21);
        assert_eq!(config.links, LinkConfig::default());
    }

    #[test]
    fn test_full_config() {
        let contents = r##"
            [symbol]
            cells = 25
            size = 100.0
            dark = "#1B4332"
            light = "#F5F3E7"

            [links]
            origin = "https://oldskool.example"
        "##;
        let config = Config::from_toml_str(contents).unwrap();
        assert_eq!(config.symbol.cells, 25);
        assert_eq!(config.symbol.style.dark, "#1B4332");
        assert_eq!(config.links.origin, "https://oldskool.example");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let parsed = Config::from_toml_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            Config::from_toml_str("[symbol]\ncells = 5\n"),
            Err(ConfigError::Render(RenderError::InvalidCells(5)))
        ));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            Config::from_toml_str("[symbol]\ncells = 4294967296\n"),
            Err(ConfigError::Render(RenderError::InvalidCells(4294967296)))
        ));
        assert!(matches!(
            Config::from_toml_str("[symbol]\ncells = 178\n"),
            Err(ConfigError::Render(RenderError::InvalidCells(178)))
        ));
        assert!(matches!(
            Config::from_toml_str("[symbol]\nsize = -1.0\n"),
            Err(ConfigError::Render(RenderError::InvalidSize(_)))
        ));
        assert!(matches!(
            Config::from_toml_str("[symbol]\ncells = \"many\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path/ticketqr.toml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[symbol]\ncells = 3").unwrap();
        assert_eq!(Config::load_from_path(file.path()), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticketqr.toml");
        let mut config = Config::default();
        config.symbol.style.size = 150.0;
        config.links.origin = "https://oldskool.example".into();
        config.save(&path).unwrap();
        assert_eq!(Config::load_from_path(&path), config);
    }

    #[test]
    fn test_render_uses_settings() {
        let mut symbol = SymbolConfig::default();
        symbol.cells = 25;
        symbol.style.size = 50.0;
        let url = symbol.render("OST-ABC123-XYZ").unwrap();
        let svg = crate::unwrap_data_url(&url).unwrap();
        assert!(svg.contains("<rect width=\"50\" height=\"50\" fill=\"white\"/>"));
        assert!(svg.contains("width=\"2\" height=\"2\""));
    }
}
