//! Durable storage for accumulator snapshots.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Where snapshots are kept between runs.
///
/// `load` hands back raw JSON so that a partially corrupt snapshot can still
/// be recovered field by field.
pub trait SnapshotStore {
  fn load(&self) -> Result<Option<Value>>;
  fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Stores the snapshot as a JSON document in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl SnapshotStore for JsonFileStore {
  fn load(&self) -> Result<Option<Value>> {
    let contents = match fs::read_to_string(&self.path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
      Err(err) => return Err(err.into()),
    };

    Ok(Some(serde_json::from_str(&contents)?))
  }

  fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
    let contents = serde_json::to_string_pretty(snapshot)?;

    // Write next to the target and rename so a crash never leaves half a file.
    let tmp = self.path.with_extension("json.tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, &self.path)?;

    debug!("Saved snapshot to {}", self.path.display());
    Ok(())
  }
}

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  value: Option<Value>,
  saves: usize,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_value(value: Value) -> Self {
    Self { value: Some(value), saves: 0 }
  }

  pub fn value(&self) -> Option<&Value> {
    self.value.as_ref()
  }

  /// Number of successful `save` calls.
  pub fn saves(&self) -> usize {
    self.saves
  }
}

impl SnapshotStore for MemoryStore {
  fn load(&self) -> Result<Option<Value>> {
    Ok(self.value.clone())
  }

  fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
    self.value = Some(snapshot.to_value());
    self.saves += 1;
    Ok(())
  }
}
