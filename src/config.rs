use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::poller::DEFAULT_POLL_INTERVAL;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub poll_interval: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl BoardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            data_dir: env::var("BOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key: env::var("BOARD_STORAGE_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.storage_key),
            poll_interval: parse_interval(env::var("BOARD_POLL_INTERVAL_MS").ok().as_deref())
                .unwrap_or(defaults.poll_interval),
        }
    }
}

fn parse_interval(raw: Option<&str>) -> Option<Duration> {
    raw?.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
