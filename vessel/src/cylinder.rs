//! Volume of a horizontal cylinder partially filled with liquid.
//!
//! All lengths are in centimetres and all volumes in litres. Inputs outside of
//! the tank are clamped to empty or full, so every function is total.

use std::f64::consts::PI;

/// Capacity of a horizontal cylinder.
pub fn max_volume(diameter: f64, length: f64) -> f64 {
  let radius = diameter / 2.0;
  PI * radius.powi(2) * length / 1000.0
}

/// Volume of the circular segment of height `fill_depth` measured from the bottom,
/// projected along the length of the tank.
pub fn segment_volume(fill_depth: f64, diameter: f64, length: f64) -> f64 {
  if fill_depth <= 0.0 {
    return 0.0
  }

  if fill_depth >= diameter {
    return max_volume(diameter, length)
  }

  let radius = diameter / 2.0;
  let m = radius - fill_depth;

  // Rounding can push these just outside their domain near the edges.
  let angle = (m / radius).clamp(-1.0, 1.0).acos();
  let half_chord = (2.0 * radius * fill_depth - fill_depth.powi(2)).max(0.0).sqrt();

  let area = angle * radius.powi(2) - m * half_chord;
  area * length / 1000.0
}

/// Volume of liquid for a sensor mounted at the top of the tank which reports
/// `sensor_distance` down to the liquid surface.
///
/// Above half full the empty headspace is computed as a segment instead and
/// subtracted from the capacity, which keeps `acos` away from `-1`.
pub fn calculate_volume(sensor_distance: f64, diameter: f64, length: f64) -> f64 {
  if sensor_distance >= diameter {
    return 0.0
  }

  if sensor_distance <= 0.0 {
    return max_volume(diameter, length)
  }

  let liquid_depth = diameter - sensor_distance;

  if liquid_depth <= diameter / 2.0 {
    segment_volume(liquid_depth, diameter, length)
  } else {
    max_volume(diameter, length) - segment_volume(sensor_distance, diameter, length)
  }
}
