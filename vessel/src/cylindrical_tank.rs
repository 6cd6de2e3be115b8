use measurements::Length;
use measurements::Volume;

use crate::cylinder;
use crate::level::Level;
use crate::tank::Tank;

/// A cylindrical tank lying on its side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalTank {
  diameter: Length,
  length: Length,
}

impl CylindricalTank {
  pub fn new(diameter: Length, length: Length) -> Self {
    Self { diameter, length }
  }

  pub fn diameter(&self) -> Length {
    self.diameter
  }

  pub fn length(&self) -> Length {
    self.length
  }

  fn dimensions(&self) -> (f64, f64) {
    (self.diameter.as_centimeters(), self.length.as_centimeters())
  }
}

impl Tank for CylindricalTank {
  fn volume(&self) -> Volume {
    let (diameter, length) = self.dimensions();
    Volume::from_liters(cylinder::max_volume(diameter, length))
  }

  fn level(&self, filling_height: Length) -> Level {
    let (diameter, length) = self.dimensions();
    let depth = filling_height.as_centimeters();

    Level::new(
      Length::from_centimeters(depth.max(0.0)),
      Volume::from_liters(cylinder::segment_volume(depth, diameter, length)),
      self.volume(),
    )
  }

  fn level_at_distance(&self, distance: Length) -> Level {
    let (diameter, length) = self.dimensions();
    let distance = distance.as_centimeters();

    Level::new(
      Length::from_centimeters((diameter - distance).max(0.0)),
      Volume::from_liters(cylinder::calculate_volume(distance, diameter, length)),
      self.volume(),
    )
  }
}
