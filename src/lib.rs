//! Oil tank monitoring from a single distance sensor.
//!
//! A [`TankMonitor`] converts distance readings into depth, volume and fill
//! percentage using the [`vessel`] geometry, accumulates the litres consumed
//! over the day, and prices that usage. Everything runs synchronously on the
//! caller's thread; the host supplies readings, the midnight tick, a
//! [`SnapshotStore`] and a [`Publish`] sink.

pub mod clock;
pub mod config;
pub mod cost;
pub mod error;
pub mod monitor;
pub mod publish;
pub mod reading;
pub mod snapshot;
pub mod store;
pub mod usage;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use cost::CostSensor;
pub use error::{Error, Result};
pub use monitor::TankMonitor;
pub use publish::{Publish, Sensor};
pub use reading::SensorReading;
pub use snapshot::Snapshot;
pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
pub use usage::UsageAccumulator;
