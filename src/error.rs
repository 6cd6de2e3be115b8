use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("failed to parse configuration: {0}")]
  Config(#[from] toml::de::Error),

  #[error("failed to (de)serialize snapshot: {0}")]
  Snapshot(#[from] serde_json::Error),

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}
