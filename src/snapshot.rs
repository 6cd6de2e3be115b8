//! Persisted state of the daily usage accumulator.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
  pub daily_usage: f64,
  pub last_volume: Option<f64>,
  /// Time the snapshot was taken, as RFC 3339. Empty if unknown.
  pub last_reset: String,
}

impl Default for Snapshot {
  fn default() -> Self {
    Self { daily_usage: 0.0, last_volume: None, last_reset: String::new() }
  }
}

impl Snapshot {
  /// Reads a snapshot field by field, replacing each missing or malformed
  /// field with its default. Returns `None` if `value` is not an object.
  pub fn from_value(value: &Value) -> Option<Self> {
    let object = value.as_object()?;

    let daily_usage = object
      .get("daily_usage")
      .and_then(Value::as_f64)
      .filter(|usage| usage.is_finite() && *usage >= 0.0)
      .unwrap_or(0.0);

    let last_volume = object.get("last_volume").and_then(Value::as_f64).filter(|volume| volume.is_finite());

    let last_reset = object.get("last_reset").and_then(Value::as_str).unwrap_or_default().to_owned();

    Some(Self { daily_usage, last_volume, last_reset })
  }

  pub fn to_value(&self) -> Value {
    serde_json::json!({
      "daily_usage": self.daily_usage,
      "last_volume": self.last_volume,
      "last_reset": self.last_reset,
    })
  }

  /// The parsed timestamp, or `None` if it is empty or not valid RFC 3339.
  pub fn last_reset(&self) -> Option<DateTime<FixedOffset>> {
    if self.last_reset.is_empty() {
      return None
    }

    DateTime::parse_from_rfc3339(&self.last_reset).ok()
  }
}
