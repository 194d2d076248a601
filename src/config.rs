// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::rendering::colormap::{Palette, DEFAULT_BLANK_COLOR};

// --- Main Config Struct ---
// Persisted defaults for the figure; every field can be overridden on
// the command line for a single run.

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_palette")]
    pub palette: Palette,

    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,

    /// Hex color for elements without a data value
    #[serde(default = "default_blank_color")]
    pub blank_color: String,
}

fn default_width() -> u32 {
    1050
}

fn default_palette() -> Palette {
    Palette::Plasma
}

fn default_fill_alpha() -> f64 {
    0.65
}

fn default_blank_color() -> String {
    DEFAULT_BLANK_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            palette: default_palette(),
            fill_alpha: default_fill_alpha(),
            blank_color: default_blank_color(),
        }
    }
}

impl Config {
    /// Loads config from standard OS location (e.g., ~/.config/ptview/settings.json)
    pub fn load() -> (Self, String) {
        let path = Self::get_path();
        if path.exists() {
            match File::open(&path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match serde_json::to_writer_pretty(writer, self) {
                    Ok(_) => format!("Config saved to {:?}", path),
                    Err(e) => format!("Failed to save config: {}", e),
                }
            }
            Err(e) => format!("Could not create config file: {}", e),
        }
    }

    fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("com", "example", "ptview") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
