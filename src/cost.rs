//! Daily cost derived from daily usage.

use log::debug;

use crate::publish::{round, Publish, Sensor};

#[derive(Debug, Clone, PartialEq)]
pub struct CostSensor {
  price_per_litre: f64,
  value: f64,
}

impl CostSensor {
  pub fn new(price_per_litre: f64) -> Self {
    Self { price_per_litre, value: 0.0 }
  }

  pub fn price_per_litre(&self) -> f64 {
    self.price_per_litre
  }

  /// Changes the price used for subsequent updates. The current value is kept
  /// until the next call to [`update_cost`](Self::update_cost).
  pub fn set_price_per_litre(&mut self, price_per_litre: f64) {
    debug!("Price per litre changed from {} to {}", self.price_per_litre, price_per_litre);
    self.price_per_litre = price_per_litre;
  }

  /// Last published cost, rounded to two decimal places.
  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn update_cost(&mut self, daily_usage: f64, out: &mut dyn Publish) {
    self.value = round(daily_usage * self.price_per_litre, Sensor::DailyCost.precision());
    out.publish(Sensor::DailyCost, self.value);
  }
}
