//! Output values pushed to the host.

use std::fmt;

/// The quantities derived from a tank reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
  OilDepth,
  Volume,
  FillPercentage,
  DailyUsage,
  DailyCost,
}

impl Sensor {
  /// Suffix appended to the source sensor id to form a unique id.
  pub fn key(self) -> &'static str {
    match self {
      Sensor::OilDepth => "oil_depth",
      Sensor::Volume => "volume",
      Sensor::FillPercentage => "fill_percentage",
      Sensor::DailyUsage => "daily_usage",
      Sensor::DailyCost => "daily_cost",
    }
  }

  pub fn unit(self) -> &'static str {
    match self {
      Sensor::OilDepth => "cm",
      Sensor::Volume | Sensor::DailyUsage => "L",
      Sensor::FillPercentage => "%",
      Sensor::DailyCost => "GBP",
    }
  }

  /// Number of decimal places the published value is rounded to.
  pub fn precision(self) -> i32 {
    match self {
      Sensor::DailyCost => 2,
      _ => 1,
    }
  }

  pub fn unique_id(self, source: &str) -> String {
    format!("{}_{}", source, self.key())
  }
}

impl fmt::Display for Sensor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Receives every value a sensor publishes.
pub trait Publish {
  fn publish(&mut self, sensor: Sensor, value: f64);
}

impl<F: FnMut(Sensor, f64)> Publish for F {
  fn publish(&mut self, sensor: Sensor, value: f64) {
    self(sensor, value)
  }
}

/// Published values in the order they were published.
pub type Published = Vec<(Sensor, f64)>;

impl Publish for Published {
  fn publish(&mut self, sensor: Sensor, value: f64) {
    self.push((sensor, value))
  }
}

/// Rounds to `digits` decimal places, exact halves to even.
pub fn round(value: f64, digits: i32) -> f64 {
  let factor = 10f64.powi(digits);
  (value * factor).round_ties_even() / factor
}
