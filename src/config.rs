// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Canvas colors ---

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasStyle {
  pub background_color: (f64, f64, f64),
  pub tooltip_background: (f64, f64, f64),
  pub tooltip_text: (f64, f64, f64),
}

impl Default for CanvasStyle {
  fn default() -> Self {
    Self {
      background_color: (0.17, 0.17, 0.18),
      tooltip_background: (0.78, 0.90, 0.90),
      tooltip_text: (0.17, 0.17, 0.18),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  /// How long a popup suppresses input, in milliseconds.
  #[serde(default = "default_popup_ms")]
  pub popup_duration_ms: u64,

  #[serde(default = "default_true")]
  pub show_tooltips: bool,

  #[serde(default)]
  pub style: CanvasStyle,
}

fn default_popup_ms() -> u64 {
  1500
}

fn default_true() -> bool {
  true
}

impl Default for Config {
  fn default() -> Self {
    Self {
      popup_duration_ms: default_popup_ms(),
      show_tooltips: true,
      style: CanvasStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from the standard OS location
  /// (e.g., ~/.config/elemental/settings.json)
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

  /// Saves config to the standard OS location
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
    // "com.example.elemental" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "elemental") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.popup_duration_ms, 1500);
    assert!(cfg.show_tooltips);
  }

  #[test]
  fn test_roundtrip_and_partial_parse() {
    let cfg = Config::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.popup_duration_ms, cfg.popup_duration_ms);

    // Missing fields fall back to defaults
    let sparse: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(sparse.popup_duration_ms, 1500);
    assert!(sparse.show_tooltips);
  }
}
