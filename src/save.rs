//! Resume record: which scene the player was in and where they stood.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bracket_geometry::prelude::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::scene::SceneId;

pub const RESUME_VERSION: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPosition {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResumeState {
    pub version: u32,
    pub scene: String,
    pub position: SavedPosition,
    #[serde(default)]
    pub player_name: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl GameResumeState {
    pub fn new(scene: SceneId, position: Point, player_name: Option<String>) -> Self {
        Self {
            version: RESUME_VERSION,
            scene: scene.as_str().to_string(),
            position: SavedPosition {
                y: position.y,
                x: position.x,
            },
            player_name,
            saved_at: Utc::now(),
        }
    }

    pub fn scene_id(&self) -> Result<SceneId> {
        SceneId::parse(&self.scene).ok_or_else(|| GameError::UnknownScene(self.scene.clone()))
    }

    /// Global display position.
    pub fn position(&self) -> Point {
        Point::new(self.position.x, self.position.y)
    }
}

pub fn store(path: &Path, state: &GameResumeState) -> Result<()> {
    let text = serde_json::to_string_pretty(state)?;
    write_text_atomic(path, &text)?;
    Ok(())
}

/// Reads the record at `path`. A missing file is not an error: there is
/// simply nothing to resume.
pub fn load(path: &Path) -> Result<Option<GameResumeState>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };
    let state: GameResumeState = serde_json::from_str(&text)?;
    if state.version != RESUME_VERSION {
        return Err(GameError::UnsupportedVersion {
            found: state.version,
            expected: RESUME_VERSION,
        });
    }
    Ok(Some(state))
}

/// Removes the record at `path`. Already gone counts as success.
pub fn clear(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}

fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;
    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("save.json");
    let tmp_name = format!("{file_name}.tmp");
    match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_load_keeps_scene_and_position() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("save.json");
        let state = GameResumeState::new(
            SceneId::BattleTwo,
            Point::new(75, 27),
            Some("Ada".to_string()),
        );
        store(&path, &state).expect("store");

        let loaded = load(&path).expect("load").expect("record present");
        assert_eq!(loaded, state);
        assert_eq!(loaded.scene_id().expect("scene"), SceneId::BattleTwo);
        assert_eq!(loaded.position(), Point::new(75, 27));
        assert!(!dir.path().join("nested").join("save.json.tmp").exists());
    }

    #[test]
    fn missing_file_means_nothing_to_resume() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load(&dir.path().join("absent.json")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn clearing_removes_the_record_and_tolerates_absence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save.json");
        let state = GameResumeState::new(SceneId::HouseTwo, Point::new(40, 20), None);
        store(&path, &state).expect("store");

        clear(&path).expect("clear");
        assert!(load(&path).expect("load").is_none());
        clear(&path).expect("clearing twice");
    }

    #[test]
    fn garbage_is_reported_not_panicked() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save.json");
        fs::write(&path, "scene:house_scene_1\nposition:(4, 24)\n").expect("write");
        assert!(matches!(load(&path), Err(GameError::Json(_))));
    }

    #[test]
    fn other_versions_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save.json");
        let mut state = GameResumeState::new(SceneId::HouseOne, Point::new(24, 4), None);
        state.version = 7;
        store(&path, &state).expect("store");
        assert!(matches!(
            load(&path),
            Err(GameError::UnsupportedVersion {
                found: 7,
                expected: RESUME_VERSION
            })
        ));
    }

    #[test]
    fn unknown_scene_names_surface_as_errors() {
        let mut state = GameResumeState::new(SceneId::HouseOne, Point::new(24, 4), None);
        state.scene = "attic".to_string();
        assert!(matches!(state.scene_id(), Err(GameError::UnknownScene(name)) if name == "attic"));
    }

    #[test]
    fn player_name_is_optional_on_disk() {
        let text = r#"{
            "version": 1,
            "scene": "battle_scene_1",
            "position": { "y": 5, "x": 65 },
            "saved_at": "2024-05-01T12:00:00Z"
        }"#;
        let state: GameResumeState = serde_json::from_str(text).expect("parse");
        assert_eq!(state.player_name, None);
        assert_eq!(state.scene_id().expect("scene"), SceneId::BattleOne);
    }
}
