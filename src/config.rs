//! Tank configuration loaded from a TOML file.
//!
//! The geometry is fixed for the lifetime of a monitor. Only the price per
//! litre may change afterwards, through an options update.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use measurements::Length;
use serde::{Deserialize, Serialize};
use vessel::CylindricalTank;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "tankfill.toml";
pub const DEFAULT_PRICE_PER_LITRE: f64 = 0.55;
pub const DEFAULT_STATE_FILE: &str = "tankfill-state.json";
pub const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 900;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
  /// Identifier of the distance sensor feeding this tank.
  pub depth_sensor: String,
  /// Inner diameter in centimetres.
  pub tank_diameter: f64,
  /// Inner length in centimetres.
  pub tank_length: f64,
  #[serde(default = "default_price_per_litre")]
  pub price_per_litre: f64,
  #[serde(default = "default_state_file")]
  pub state_file: PathBuf,
  #[serde(default = "default_snapshot_interval_secs")]
  pub snapshot_interval_secs: u64,
}

fn default_price_per_litre() -> f64 {
  DEFAULT_PRICE_PER_LITRE
}

fn default_state_file() -> PathBuf {
  PathBuf::from(DEFAULT_STATE_FILE)
}

fn default_snapshot_interval_secs() -> u64 {
  DEFAULT_SNAPSHOT_INTERVAL_SECS
}

impl Config {
  pub fn new(depth_sensor: impl Into<String>, tank_diameter: f64, tank_length: f64) -> Self {
    Self {
      depth_sensor: depth_sensor.into(),
      tank_diameter,
      tank_length,
      price_per_litre: DEFAULT_PRICE_PER_LITRE,
      state_file: default_state_file(),
      snapshot_interval_secs: DEFAULT_SNAPSHOT_INTERVAL_SECS,
    }
  }

  /// Reads and validates the configuration at `path`.
  pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
    let contents = fs::read_to_string(&path)?;
    let config = Self::from_toml(&contents)?;
    info!("Loaded configuration for sensor '{}' from {}", config.depth_sensor, path.as_ref().display());
    Ok(config)
  }

  pub fn from_toml(contents: &str) -> Result<Self> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if !(self.tank_diameter.is_finite() && self.tank_diameter > 0.0) {
      return Err(Error::InvalidConfig(format!("tank_diameter must be positive, got {}", self.tank_diameter)))
    }

    if !(self.tank_length.is_finite() && self.tank_length > 0.0) {
      return Err(Error::InvalidConfig(format!("tank_length must be positive, got {}", self.tank_length)))
    }

    validate_price(self.price_per_litre)
  }

  pub fn tank(&self) -> CylindricalTank {
    CylindricalTank::new(Length::from_centimeters(self.tank_diameter), Length::from_centimeters(self.tank_length))
  }
}

pub fn validate_price(price_per_litre: f64) -> Result<()> {
  if price_per_litre.is_finite() && price_per_litre >= 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidConfig(format!("price_per_litre must not be negative, got {}", price_per_litre)))
  }
}
