//! Loading engine configuration (arcade/daily profiles + store bounds) from TOML.
//!
//! See `EngineConfig` for the expected schema. Every field has a default, so an
//! empty file (or no file at all) yields the stock behaviour.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Topic;

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
  #[serde(default)]
  pub arcade: ArcadeProfile,
  #[serde(default)]
  pub daily: DailyProfile,
  #[serde(default)]
  pub store: StoreCfg,
}

/// How arcade shifts the difficulty coordinates and which topics its
/// "mixed" mode draws from.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcadeProfile {
  pub level_offset: u8,
  pub grade_offset: u8,
  pub multi_step_chance: f64,
  pub topics: Vec<Topic>,
}

impl Default for ArcadeProfile {
  fn default() -> Self {
    Self {
      level_offset: 1,
      grade_offset: 1,
      multi_step_chance: 0.12,
      topics: vec![Topic::AddSub, Topic::MulDiv, Topic::Percent, Topic::Equations],
    }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailyProfile {
  /// Added to the current level for the daily stretch problem.
  pub level_boost: u8,
}

impl Default for DailyProfile {
  fn default() -> Self { Self { level_boost: 2 } }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreCfg {
  /// Max problems kept in flight for grading by id.
  pub capacity: usize,
}

impl Default for StoreCfg {
  fn default() -> Self { Self { capacity: 4096 } }
}

/// Parse config text. Kept separate from the env lookup so it can be tested.
pub fn parse_engine_config(s: &str) -> Result<EngineConfig, toml::de::Error> {
  toml::from_str::<EngineConfig>(s)
}

/// Attempt to load `EngineConfig` from ENGINE_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_engine_config_from_env() -> Option<EngineConfig> {
  let path = std::env::var("ENGINE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_engine_config(&s) {
      Ok(cfg) => {
        info!(target: "fokusmat_backend", %path, "Loaded engine config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "fokusmat_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "fokusmat_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
