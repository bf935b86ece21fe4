//! Runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::render::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Game settings. Every field has a default; environment variables override.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub save_path: PathBuf,
    pub log_dir: PathBuf,
    pub min_rows: u16,
    pub min_cols: u16,
    pub watch_interval: Duration,
    /// Narration characters revealed per frame; 0 shows lines at once.
    pub type_speed: usize,
    pub script_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("scrollbound_save.json"),
            log_dir: PathBuf::from("logs"),
            min_rows: SCREEN_HEIGHT as u16,
            min_cols: SCREEN_WIDTH as u16,
            watch_interval: Duration::from_millis(2000),
            type_speed: 2,
            script_path: None,
        }
    }
}

impl GameConfig {
    /// Environment variables:
    /// - `SCROLLBOUND_SAVE_PATH` - resume record location
    /// - `SCROLLBOUND_LOG_DIR` - log directory
    /// - `SCROLLBOUND_MIN_ROWS` / `SCROLLBOUND_MIN_COLS` - smallest usable terminal
    /// - `SCROLLBOUND_WATCH_INTERVAL_MS` - terminal size polling interval
    /// - `SCROLLBOUND_TYPE_SPEED` - narration typewriter speed
    /// - `SCROLLBOUND_SCRIPT` - key script replayed before keyboard input
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("SCROLLBOUND_SAVE_PATH") {
            config.save_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("SCROLLBOUND_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(rows) = read_env::<u16>("SCROLLBOUND_MIN_ROWS") {
            config.min_rows = rows;
        }
        if let Some(cols) = read_env::<u16>("SCROLLBOUND_MIN_COLS") {
            config.min_cols = cols;
        }
        if let Some(ms) = read_env::<u64>("SCROLLBOUND_WATCH_INTERVAL_MS") {
            config.watch_interval = Duration::from_millis(ms.max(50));
        }
        if let Some(speed) = read_env::<usize>("SCROLLBOUND_TYPE_SPEED") {
            config.type_speed = speed;
        }
        config.script_path = env::var_os("SCROLLBOUND_SCRIPT").map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
