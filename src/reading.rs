/// A raw state reported by the distance sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
  /// Distance in centimetres from the top of the tank to the liquid surface.
  Distance(f64),
  Unavailable,
}

impl SensorReading {
  /// Parses a raw sensor state. Sentinels like `unknown` or `unavailable`, and
  /// anything else that is not a finite number, are unavailable.
  pub fn parse(raw: &str) -> Self {
    match raw.trim().parse::<f64>() {
      Ok(distance) if distance.is_finite() => SensorReading::Distance(distance),
      _ => SensorReading::Unavailable,
    }
  }

  pub fn distance(self) -> Option<f64> {
    match self {
      SensorReading::Distance(distance) => Some(distance),
      SensorReading::Unavailable => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numbers() {
    assert_eq!(SensorReading::parse("50"), SensorReading::Distance(50.0));
    assert_eq!(SensorReading::parse(" 49.99\n"), SensorReading::Distance(49.99));
    assert_eq!(SensorReading::parse("-3.5"), SensorReading::Distance(-3.5));
    assert_eq!(SensorReading::parse("120").distance(), Some(120.0));
  }

  #[test]
  fn sentinels() {
    assert_eq!(SensorReading::parse("unknown"), SensorReading::Unavailable);
    assert_eq!(SensorReading::parse("unavailable"), SensorReading::Unavailable);
    assert_eq!(SensorReading::parse("unavailable").distance(), None);
  }

  #[test]
  fn garbage() {
    assert_eq!(SensorReading::parse(""), SensorReading::Unavailable);
    assert_eq!(SensorReading::parse("12cm"), SensorReading::Unavailable);
    assert_eq!(SensorReading::parse("NaN"), SensorReading::Unavailable);
    assert_eq!(SensorReading::parse("inf"), SensorReading::Unavailable);
  }
}
