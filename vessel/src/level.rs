use measurements::{Length, Volume};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
  pub(crate) depth: Length,
  pub(crate) volume: Volume,
  pub(crate) percentage: f64,
}

impl Level {
  pub(crate) fn new(depth: Length, volume: Volume, capacity: Volume) -> Self {
    let percentage = if capacity.as_liters() > 0.0 {
      volume.as_liters() / capacity.as_liters() * 100.0
    } else {
      0.0
    };

    Self { depth, volume, percentage }
  }

  /// Height of the liquid column, never negative.
  pub fn depth(&self) -> Length {
    self.depth
  }

  pub fn volume(&self) -> Volume {
    self.volume
  }

  /// Fill percentage in the range `0..=100`.
  pub fn percentage(&self) -> f64 {
    self.percentage
  }
}
