//! A tank monitor turning distance readings into published tank values.
//!
//! The monitor is driven entirely by its host: sensor state changes, the daily
//! midnight tick, option updates and snapshot requests all arrive as calls and
//! run to completion before the next one.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::DateTime;
use log::{debug, info, warn};
use measurements::Length;
use vessel::{CylindricalTank, Level, Tank};

use crate::clock::Clock;
use crate::config::{validate_price, Config};
use crate::cost::CostSensor;
use crate::error::Result;
use crate::publish::{round, Publish, Sensor};
use crate::reading::SensorReading;
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;
use crate::usage::UsageAccumulator;

pub struct TankMonitor<S, C, P> {
  source: String,
  tank: CylindricalTank,
  level: Option<Level>,
  usage: UsageAccumulator,
  cost: Rc<RefCell<CostSensor>>,
  store: S,
  clock: C,
  out: P,
}

impl<S, C, P> TankMonitor<S, C, P>
where
  S: SnapshotStore,
  C: Clock,
  P: Publish,
{
  pub fn new(config: &Config, store: S, clock: C, out: P) -> Self {
    let cost = Rc::new(RefCell::new(CostSensor::new(config.price_per_litre)));

    let mut usage = UsageAccumulator::new();
    let listener = Rc::clone(&cost);
    usage.subscribe(move |daily_usage, out| listener.borrow_mut().update_cost(daily_usage, out));

    Self { source: config.depth_sensor.clone(), tank: config.tank(), level: None, usage, cost, store, clock, out }
  }

  /// Restores the last snapshot and processes the sensor's current state, if any.
  ///
  /// An unreadable or missing snapshot starts a fresh day.
  pub fn start(&mut self, current_state: Option<&str>) {
    let snapshot = match self.store.load() {
      Ok(value) => value.as_ref().and_then(Snapshot::from_value),
      Err(err) => {
        debug!("Ignoring unreadable snapshot: {}", err);
        None
      },
    };

    let now = self.clock.now();
    self.usage.restore(snapshot.as_ref(), now, &mut self.out);

    info!(
      "Monitoring '{}' for a {:.0} l tank, daily usage {:.1} l",
      self.source,
      self.tank.volume().as_liters(),
      self.usage.daily_usage(),
    );

    if let Some(state) = current_state {
      self.on_sensor_changed(state);
    }
  }

  /// Handles a new state of the distance sensor. Returns whether it was a
  /// usable reading.
  pub fn on_sensor_changed(&mut self, raw: &str) -> bool {
    let distance = match SensorReading::parse(raw).distance() {
      Some(distance) => distance,
      None => {
        debug!("Ignoring sensor state '{}'", raw.trim());
        return false
      },
    };

    let level = self.tank.level_at_distance(Length::from_centimeters(distance));
    let volume = level.volume().as_liters();
    debug!("Distance {} cm is {:.1} l ({:.1} %)", distance, volume, level.percentage());

    self.out.publish(Sensor::OilDepth, round(level.depth().as_centimeters(), Sensor::OilDepth.precision()));
    self.out.publish(Sensor::Volume, round(volume, Sensor::Volume.precision()));
    self.out.publish(Sensor::FillPercentage, round(level.percentage(), Sensor::FillPercentage.precision()));
    self.level = Some(level);

    self.usage.on_volume_sample(volume, &mut self.out);
    true
  }

  pub fn on_midnight_boundary(&mut self, now: DateTime<C::Tz>) {
    self.usage.on_midnight_boundary(now, &mut self.out);
  }

  /// Applies an options update. The geometry is fixed; only the price may change.
  pub fn set_price_per_litre(&mut self, price_per_litre: f64) -> Result<()> {
    validate_price(price_per_litre)?;

    let mut cost = self.cost.borrow_mut();
    cost.set_price_per_litre(price_per_litre);
    cost.update_cost(self.usage.daily_usage(), &mut self.out);
    Ok(())
  }

  pub fn snapshot(&self) -> Snapshot {
    self.usage.snapshot(self.clock.now())
  }

  /// Hands the current snapshot to the store. Failures are logged, not retried.
  pub fn save_snapshot(&mut self) {
    let snapshot = self.snapshot();

    if let Err(err) = self.store.save(&snapshot) {
      warn!("Failed to save snapshot: {}", err);
    }
  }

  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn tank(&self) -> &CylindricalTank {
    &self.tank
  }

  /// The level computed from the most recent usable reading.
  pub fn level(&self) -> Option<&Level> {
    self.level.as_ref()
  }

  pub fn usage(&self) -> &UsageAccumulator {
    &self.usage
  }

  pub fn daily_cost(&self) -> f64 {
    self.cost.borrow().value()
  }

  pub fn price_per_litre(&self) -> f64 {
    self.cost.borrow().price_per_litre()
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn publisher(&self) -> &P {
    &self.out
  }

  pub fn publisher_mut(&mut self) -> &mut P {
    &mut self.out
  }
}
