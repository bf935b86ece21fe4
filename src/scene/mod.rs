//! Playable scenes and the state machine that strings them together.

pub mod controller;
pub mod story;

use bracket_geometry::prelude::Point;
use smallvec::SmallVec;

use crate::entity::Entity;
use crate::input::Capabilities;
use crate::map::{Direction, Surface, WallMap};
use crate::viewport::Viewport;

pub use controller::{Flow, Mode, SceneController};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    HouseOne,
    BattleOne,
    BattleTwo,
    BattleThree,
    HouseTwo,
}

impl SceneId {
    pub const ORDER: [SceneId; 5] = [
        SceneId::HouseOne,
        SceneId::BattleOne,
        SceneId::BattleTwo,
        SceneId::BattleThree,
        SceneId::HouseTwo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::HouseOne => "house_scene_1",
            SceneId::BattleOne => "battle_scene_1",
            SceneId::BattleTwo => "battle_scene_2",
            SceneId::BattleThree => "battle_scene_3",
            SceneId::HouseTwo => "house_scene_2",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|id| id.as_str() == name)
    }

    /// The scene that follows this one, or `None` when the story is over
    /// and play returns to the menu.
    pub fn next(self) -> Option<Self> {
        let idx = Self::ORDER.iter().position(|id| *id == self)?;
        Self::ORDER.get(idx + 1).copied()
    }
}

/// One step of a scene's script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Narration line; blocks the script until dismissed.
    Say(&'static str),
    /// Loop a music track.
    Play(&'static str),
    /// One-shot sound effect.
    PlayOnce(&'static str),
    StopMusic,
    /// Scripted avatar step, subject to the usual collision rules.
    Step(Direction),
}

/// When a scene's input loop ends.
#[derive(Clone, Debug)]
pub enum ExitRule {
    /// The avatar's global position equals one of these cells.
    Reach(SmallVec<[Point; 2]>),
    /// Cutscene: ends once its entry cues have played out.
    AfterCues,
}

impl ExitRule {
    pub fn reach(targets: &[Point]) -> Self {
        ExitRule::Reach(SmallVec::from_slice(targets))
    }

    pub fn is_met(&self, position: Point) -> bool {
        match self {
            ExitRule::Reach(targets) => targets.contains(&position),
            ExitRule::AfterCues => false,
        }
    }
}

/// Narration that fires the first time the avatar stands on `at` (global).
/// The scene carries on once it has played.
#[derive(Clone, Debug)]
pub struct SideTrigger {
    pub at: Point,
    pub cues: Vec<Cue>,
}

/// A scene's surface, collision map and avatar, plus a camera for mazes.
#[derive(Clone, Debug)]
pub struct Stage {
    pub surface: Surface,
    pub walls: WallMap,
    pub avatar: Entity,
    pub viewport: Option<Viewport>,
    start: Point,
    start_view: Option<Point>,
}

impl Stage {
    pub fn new(surface: Surface, walls: WallMap, start: Point, viewport: Option<Viewport>) -> Self {
        let avatar = Entity::new(&surface, start, '@');
        let start_view = viewport.as_ref().map(Viewport::offset);
        let mut stage = Self {
            surface,
            walls,
            avatar,
            viewport,
            start,
            start_view,
        };
        stage.draw_avatar();
        stage
    }

    pub fn capabilities(&self) -> Capabilities {
        if self.viewport.is_some() {
            Capabilities::MOVABLE | Capabilities::SCROLLABLE
        } else {
            Capabilities::MOVABLE
        }
    }

    fn draw_avatar(&mut self) {
        let glyph = self.avatar.glyph();
        self.surface.set_glyph(self.avatar.local(), glyph);
    }

    /// Moves the avatar one cell, redrawing it on the surface. Returns false
    /// when the move was blocked.
    pub fn step(&mut self, direction: Direction, follow: bool) -> bool {
        let Some(vacated) = self.avatar.step(direction, &self.walls) else {
            return false;
        };
        self.surface.set_glyph(vacated, ' ');
        self.draw_avatar();
        if follow {
            if let Some(viewport) = self.viewport.as_mut() {
                viewport.follow(self.avatar.local());
            }
        }
        true
    }

    /// Puts the avatar on `local`, centring the camera on it.
    pub fn place(&mut self, local: Point) -> bool {
        let previous = self.avatar.local();
        if !self.avatar.place(local, &self.walls) {
            return false;
        }
        self.surface.set_glyph(previous, ' ');
        self.draw_avatar();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.focus(local);
        }
        true
    }

    /// Back to the declared start cell and camera.
    pub fn reset(&mut self) {
        let previous = self.avatar.local();
        self.surface.set_glyph(previous, ' ');
        self.avatar.place(self.start, &self.walls);
        self.draw_avatar();
        if let (Some(viewport), Some(view)) = (self.viewport.as_mut(), self.start_view) {
            *viewport = Viewport::new(
                view,
                viewport.width,
                viewport.height,
                self.surface.width,
                self.surface.height,
                viewport.anchor(),
            );
        }
    }
}

pub struct Scene {
    pub id: SceneId,
    pub stage: Stage,
    pub exit: ExitRule,
    pub entry_cues: Vec<Cue>,
    pub exit_cues: Vec<Cue>,
    pub triggers: Vec<SideTrigger>,
    /// Track restored when resuming straight into the scene.
    pub ambient: Option<&'static str>,
}

impl Scene {
    pub fn should_exit(&self) -> bool {
        self.exit.is_met(self.stage.avatar.position())
    }
}
