//! Daily consumption tracking from a stream of volume readings.
//!
//! Every drop in volume between two readings counts as consumption. Rises are
//! refills: they move the baseline but never reduce the total. The first
//! reading after construction or a reset only establishes the baseline.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};
use log::{debug, info};

use crate::clock::start_of_day;
use crate::publish::{round, Publish, Sensor};
use crate::snapshot::Snapshot;

/// Called with the unrounded daily usage whenever it may have changed.
pub type UsageListener = Box<dyn FnMut(f64, &mut dyn Publish)>;

#[derive(Default)]
pub struct UsageAccumulator {
  daily_usage: f64,
  last_volume: Option<f64>,
  last_reset: Option<DateTime<FixedOffset>>,
  listeners: Vec<UsageListener>,
}

impl fmt::Debug for UsageAccumulator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UsageAccumulator")
      .field("daily_usage", &self.daily_usage)
      .field("last_volume", &self.last_volume)
      .field("last_reset", &self.last_reset)
      .field("listeners", &self.listeners.len())
      .finish()
  }
}

impl UsageAccumulator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe<F>(&mut self, listener: F)
  where
    F: FnMut(f64, &mut dyn Publish) + 'static,
  {
    self.listeners.push(Box::new(listener));
  }

  /// Litres consumed since the last reset.
  pub fn daily_usage(&self) -> f64 {
    self.daily_usage
  }

  /// Baseline for the next reading, `None` until the first reading of the day.
  pub fn last_volume(&self) -> Option<f64> {
    self.last_volume
  }

  /// Start of the day of the most recent reset.
  pub fn last_reset(&self) -> Option<DateTime<FixedOffset>> {
    self.last_reset
  }

  /// Published value, rounded to one decimal place.
  pub fn value(&self) -> f64 {
    round(self.daily_usage, Sensor::DailyUsage.precision())
  }

  pub fn on_volume_sample(&mut self, volume: f64, out: &mut dyn Publish) {
    match self.last_volume {
      None => debug!("Baseline volume set to {:.1} l", volume),
      Some(last_volume) if volume < last_volume => self.daily_usage += last_volume - volume,
      Some(last_volume) if volume > last_volume => debug!("Refill from {:.1} l to {:.1} l ignored", last_volume, volume),
      Some(_) => {},
    }

    self.last_volume = Some(volume);
    self.publish(out);
  }

  pub fn on_midnight_boundary<Tz: TimeZone>(&mut self, now: DateTime<Tz>, out: &mut dyn Publish) {
    info!("Resetting daily usage of {:.1} l", self.daily_usage);

    self.daily_usage = 0.0;
    self.last_volume = None;
    self.last_reset = Some(start_of_day(&now).fixed_offset());
    self.publish(out);
  }

  /// Rehydrates from a persisted snapshot before any reading is processed.
  ///
  /// A snapshot from an earlier calendar day means midnight passed while we
  /// were not running, so the day is reset instead of continued. The stored
  /// timestamp is compared by its own calendar date.
  pub fn restore<Tz: TimeZone>(&mut self, snapshot: Option<&Snapshot>, now: DateTime<Tz>, out: &mut dyn Publish) {
    let snapshot = match snapshot {
      Some(snapshot) => snapshot,
      None => {
        debug!("No snapshot to restore, starting fresh");
        self.publish(out);
        return
      },
    };

    if let Some(last_reset) = snapshot.last_reset() {
      if last_reset.date_naive() < now.date_naive() {
        info!("Midnight passed since snapshot taken at {}", last_reset.to_rfc3339());
        self.on_midnight_boundary(now, out);
        return
      }
    } else if !snapshot.last_reset.is_empty() {
      debug!("Ignoring unreadable snapshot timestamp '{}'", snapshot.last_reset);
    }

    debug!("Restored daily usage of {:.1} l with baseline {:?}", snapshot.daily_usage, snapshot.last_volume);
    self.daily_usage = snapshot.daily_usage;
    self.last_volume = snapshot.last_volume;
    self.publish(out);
  }

  /// State to persist. The timestamp is `now`, not the time of the last reset.
  pub fn snapshot<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Snapshot {
    Snapshot { daily_usage: self.daily_usage, last_volume: self.last_volume, last_reset: now.fixed_offset().to_rfc3339() }
  }

  fn publish(&mut self, out: &mut dyn Publish) {
    out.publish(Sensor::DailyUsage, self.value());

    let daily_usage = self.daily_usage;
    for listener in &mut self.listeners {
      listener(daily_usage, &mut *out);
    }
  }
}
