use std::env;
use std::time::Duration;

use chrono::Local;
use log::{info, warn};
use serde_json::json;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::{signal, time};

use tankfill::clock::next_local_midnight;
use tankfill::config::DEFAULT_CONFIG_PATH;
use tankfill::{Clock, Config, JsonFileStore, Publish, Sensor, SnapshotStore, SystemClock, TankMonitor};

const CONFIG_ENV: &str = "TANKFILL_CONFIG";
const CURRENT_STATE_ENV: &str = "TANKFILL_CURRENT_STATE";

fn until_midnight() -> Duration {
  let now = Local::now();
  (next_local_midnight(now) - now).to_std().unwrap_or(Duration::from_secs(1))
}

fn handle_line<S: SnapshotStore, C: Clock, P: Publish>(monitor: &mut TankMonitor<S, C, P>, line: &str) {
  let line = line.trim();

  if let Some(price) = line.strip_prefix("price ") {
    match price.trim().parse::<f64>() {
      Ok(price) => {
        if let Err(err) = monitor.set_price_per_litre(price) {
          warn!("Rejected price update: {}", err);
        }
      },
      Err(err) => warn!("Invalid price '{}': {}", price.trim(), err),
    }

    return
  }

  monitor.on_sensor_changed(line);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let config_path = env::args()
    .nth(1)
    .or_else(|| env::var(CONFIG_ENV).ok())
    .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
  let config = Config::load_from_path(&config_path)?;

  let source = config.depth_sensor.clone();
  let publisher = move |sensor: Sensor, value: f64| {
    println!(
      "{}",
      json!({
        "unique_id": sensor.unique_id(&source),
        "state": value,
        "unit": sensor.unit(),
      })
    );
  };

  let store = JsonFileStore::new(&config.state_file);
  let mut monitor = TankMonitor::new(&config, store, SystemClock, publisher);

  let current_state = env::var(CURRENT_STATE_ENV).ok();
  monitor.start(current_state.as_deref());

  let mut lines = BufReader::new(io::stdin()).lines();

  let mut snapshots = time::interval(Duration::from_secs(config.snapshot_interval_secs.max(1)));
  snapshots.tick().await;

  loop {
    tokio::select! {
      line = lines.next_line() => match line? {
        Some(line) => handle_line(&mut monitor, &line),
        None => {
          info!("Sensor input closed");
          break
        },
      },
      _ = time::sleep(until_midnight()) => {
        monitor.on_midnight_boundary(SystemClock.now());
        monitor.save_snapshot();
      },
      _ = snapshots.tick() => monitor.save_snapshot(),
      _ = signal::ctrl_c() => {
        info!("Interrupted");
        break
      },
    }
  }

  monitor.save_snapshot();

  Ok(())
}
