use thiserror::Error;

/// Failures around the resume record. Gameplay itself has no error path.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("unknown scene `{0}` in save file")]
    UnknownScene(String),

    #[error("saved position ({y}, {x}) is not walkable in {scene}")]
    BlockedPosition { scene: &'static str, y: i32, x: i32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
