use measurements::{Length, Volume};

use crate::level::Level;

pub trait Tank {
  /// Total capacity of the tank.
  fn volume(&self) -> Volume;

  /// Fill level for a liquid column of `filling_height` measured from the bottom.
  fn level(&self, filling_height: Length) -> Level;

  /// Fill level for a top-mounted distance sensor reporting `distance` to the surface.
  fn level_at_distance(&self, distance: Length) -> Level;
}
