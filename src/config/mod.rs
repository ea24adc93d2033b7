//! Configuration management for newsdeck.
//!
//! Configuration is read from `~/.config/newsdeck/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! `NEWSDECK_API_URL` and `NEWSDECK_API_KEY` override the `[api]` section.

pub mod api;
pub mod colors;
pub mod keybindings;

pub use api::ApiConfig;
pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    /// Environment overrides are applied after the file is read.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
                path: config_path.clone(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: config_path,
                source: e,
            })?
        } else {
            Self::create_default_config(&config_path)?;
            Self::default()
        };

        config.api.apply_env();
        Ok(config)
    }

    /// Get the default config file path: `~/.config/newsdeck/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsdeck").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# newsdeck configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1", "/"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[api]
# Base URL of the top-headlines endpoint
base_url = "https://newsapi.org/v2/top-headlines"

# API key, sent as the apiKey query parameter.
# NEWSDECK_API_KEY overrides this value.
key = ""

# Country filter for headlines
country = "us"

# Page size for feed requests
page_size = 20

[colors]
# Border colors
active_border = "Cyan"
inactive_border = "DarkGray"

# Selection highlight in the article list
selection_bg = "Cyan"
selection_fg = "Black"

# Hero banner
hero_title = "White"
hero_text = "Gray"

# Tab bar
tab_active_bg = "Blue"
tab_active_fg = "White"
tab_inactive_fg = "Gray"

# Article cards
card_title = "White"
card_description = "Gray"
card_date = "DarkGray"

# Feed states
skeleton = "DarkGray"
error_text = "Red"
empty_text = "Gray"

# Metadata in the detail view
metadata_date = "Yellow"
metadata_link = "Blue"

# Status bar
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
# Navigation
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
next_tab = ["Tab", "Right"]
prev_tab = ["BackTab", "Shift+Tab", "Left"]

# Actions
select = ["Enter"]
back = ["Esc", "Backspace"]
search = ["/"]
open_in_browser = ["o"]
refresh = ["R"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
