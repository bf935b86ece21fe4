use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use super::story::build_scene;
use super::{Cue, ExitRule, Scene, SceneId};
use crate::audio::Soundtrack;
use crate::data::{self, MENU, MENU_REVEAL_FRAMES, MenuOption, NAME_WIDTH};
use crate::error::{GameError, Result};
use crate::input::{self, Action, Capabilities, Key, LineEditor, SceneContext, Selection};
use crate::narration::Narrator;
use crate::save::{self, GameResumeState};

/// Which window currently owns the keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    ConfirmQuit,
    NameEntry,
    Playing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// Cues are playing; the player only dismisses narration.
    Scripted,
    Exploring,
    /// Exit cues are playing; the next scene follows once they finish.
    Leaving,
}

/// Drives menus and scenes one frame at a time. Holds every scene for the
/// whole session; a new game resets them rather than rebuilding.
pub struct SceneController<S: Soundtrack> {
    soundtrack: S,
    scenes: [Scene; 5],
    mode: Mode,
    current: Option<SceneId>,
    phase: Phase,
    paused: bool,
    fired: HashSet<(SceneId, usize)>,
    cues: VecDeque<Cue>,
    narrator: Narrator,
    menu: Selection,
    menu_reveal: u32,
    editor: LineEditor,
    player_name: Option<String>,
    status: Option<String>,
    save_path: PathBuf,
}

impl<S: Soundtrack> SceneController<S> {
    pub fn new(mut soundtrack: S, narrator: Narrator, save_path: PathBuf) -> Self {
        soundtrack.play(data::tracks::MORNING);
        Self {
            soundtrack,
            scenes: SceneId::ORDER.map(build_scene),
            mode: Mode::Menu,
            current: None,
            phase: Phase::Exploring,
            paused: false,
            fired: HashSet::new(),
            cues: VecDeque::new(),
            narrator,
            menu: Selection::new(MENU.len()),
            menu_reveal: MENU_REVEAL_FRAMES,
            editor: LineEditor::new(NAME_WIDTH),
            player_name: None,
            status: None,
            save_path,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn menu_index(&self) -> usize {
        self.menu.index()
    }

    /// True while the closed scroll is still showing.
    pub fn menu_revealing(&self) -> bool {
        self.menu_reveal > 0
    }

    pub fn name_text(&self) -> &str {
        self.editor.text()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn narration(&self) -> Option<String> {
        self.narrator.visible_text()
    }

    /// The narration line is fully typed and waiting for Enter.
    pub fn narration_complete(&self) -> bool {
        self.narrator.is_showing() && self.narrator.fully_revealed()
    }

    pub fn current_scene(&self) -> Option<SceneId> {
        self.current
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.current.map(|id| &self.scenes[id as usize])
    }

    fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.current.map(|id| &mut self.scenes[id as usize])
    }

    /// Handles at most one key and advances animations by one frame.
    pub fn tick(&mut self, key: Option<Key>) -> Flow {
        self.narrator.advance();
        match self.mode {
            Mode::Menu => self.tick_menu(key),
            Mode::ConfirmQuit => self.tick_confirm_quit(key),
            Mode::NameEntry => self.tick_name_entry(key),
            Mode::Playing => self.tick_playing(key),
        }
    }

    fn tick_menu(&mut self, key: Option<Key>) -> Flow {
        self.menu_reveal = self.menu_reveal.saturating_sub(1);
        let Some(key) = key else {
            return Flow::Continue;
        };
        let action = input::route(
            key,
            Capabilities::SELECTABLE,
            &mut SceneContext::default().with_selection(&mut self.menu),
        );
        let Action::Selected(index) = action else {
            return Flow::Continue;
        };
        match MENU[index] {
            MenuOption::Continue => self.continue_game(),
            MenuOption::NewGame => {
                debug!("new game: asking for a name");
                self.editor.clear();
                self.mode = Mode::NameEntry;
            }
            MenuOption::Settings => self.status = Some(data::SETTINGS_NOTICE.to_string()),
            MenuOption::Quit => self.mode = Mode::ConfirmQuit,
        }
        Flow::Continue
    }

    fn tick_confirm_quit(&mut self, key: Option<Key>) -> Flow {
        let Some(key) = key else {
            return Flow::Continue;
        };
        match input::route(key, Capabilities::CONFIRMABLE, &mut SceneContext::default()) {
            Action::Terminate => {
                info!("quit confirmed from the menu");
                Flow::Quit
            }
            _ => {
                self.mode = Mode::Menu;
                Flow::Continue
            }
        }
    }

    fn tick_name_entry(&mut self, key: Option<Key>) -> Flow {
        let Some(key) = key else {
            return Flow::Continue;
        };
        let action = input::route(
            key,
            Capabilities::TEXT_EDITABLE,
            &mut SceneContext::default().with_editor(&mut self.editor),
        );
        if let Action::TextCommitted(name) = action {
            self.start_new_game(&name);
        }
        Flow::Continue
    }

    fn start_new_game(&mut self, name: &str) {
        self.narrator.set_speaker(name);
        self.player_name = Some(self.narrator.speaker().to_string());
        info!(player = %self.narrator.speaker(), "starting a new game");
        for scene in &mut self.scenes {
            scene.stage.reset();
        }
        self.fired.clear();
        self.paused = false;
        self.status = None;
        self.enter_scene(SceneId::HouseOne);
    }

    /// Makes `id` the active scene and queues its entry cues.
    fn enter_scene(&mut self, id: SceneId) {
        info!(scene = id.as_str(), "entering scene");
        self.mode = Mode::Playing;
        self.current = Some(id);
        self.cues = self.scenes[id as usize].entry_cues.iter().cloned().collect();
        self.phase = Phase::Scripted;
        self.save_progress();
        self.run_cues();
    }

    fn tick_playing(&mut self, key: Option<Key>) -> Flow {
        if self.narrator.is_showing() {
            if let Some(key) = key {
                if self.narrator.on_key(key) {
                    self.run_cues();
                }
            }
            return Flow::Continue;
        }

        if self.phase != Phase::Exploring {
            self.run_cues();
            return Flow::Continue;
        }

        let Some(key) = key else {
            return Flow::Continue;
        };

        if self.paused {
            return self.tick_paused(key);
        }

        let Some(id) = self.current else {
            warn!("playing without an active scene, back to the menu");
            self.return_to_menu();
            return Flow::Continue;
        };
        let scene = &mut self.scenes[id as usize];
        let capabilities = scene.stage.capabilities();
        match input::route(key, capabilities, &mut SceneContext::default()) {
            Action::Move {
                direction,
                recompute_viewport,
            } => {
                if !scene.stage.step(direction, recompute_viewport) {
                    debug!(direction = direction.as_str(), "move blocked");
                }
            }
            Action::PauseRequested => {
                info!("game paused");
                self.paused = true;
                return Flow::Continue;
            }
            _ => return Flow::Continue,
        }

        if scene.should_exit() {
            self.begin_leaving();
        } else {
            self.check_triggers();
        }
        Flow::Continue
    }

    fn tick_paused(&mut self, key: Key) -> Flow {
        match input::route(key, Capabilities::CONFIRMABLE, &mut SceneContext::default()) {
            Action::Terminate => {
                info!("quit confirmed from pause");
                self.save_progress();
                Flow::Quit
            }
            _ => {
                info!("game resumed");
                self.paused = false;
                Flow::Continue
            }
        }
    }

    fn check_triggers(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        let scene = &self.scenes[id as usize];
        let position = scene.stage.avatar.position();
        let hit = scene
            .triggers
            .iter()
            .enumerate()
            .find(|(idx, trigger)| trigger.at == position && !self.fired.contains(&(id, *idx)));
        if let Some((idx, trigger)) = hit {
            info!(scene = id.as_str(), x = position.x, y = position.y, "side narration");
            self.cues = trigger.cues.iter().cloned().collect();
            self.fired.insert((id, idx));
            self.phase = Phase::Scripted;
            self.run_cues();
        }
    }

    fn begin_leaving(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        debug!(scene = id.as_str(), "exit reached");
        self.cues = self.scenes[id as usize].exit_cues.iter().cloned().collect();
        self.phase = Phase::Leaving;
        self.run_cues();
    }

    /// Plays queued cues until one needs the player (narration) or the
    /// queue runs dry, then moves to whatever comes after the script.
    fn run_cues(&mut self) {
        while let Some(cue) = self.cues.pop_front() {
            match cue {
                Cue::Say(text) => {
                    self.narrator.display_line(text);
                    return;
                }
                Cue::Play(track) => self.soundtrack.play(track),
                Cue::PlayOnce(track) => self.soundtrack.play_once(track),
                Cue::StopMusic => self.soundtrack.stop(),
                Cue::Step(direction) => {
                    if let Some(scene) = self.scene_mut() {
                        scene.stage.step(direction, true);
                    }
                }
            }
        }

        match self.phase {
            Phase::Scripted => {
                let cutscene = matches!(self.scene().map(|s| &s.exit), Some(ExitRule::AfterCues));
                if cutscene {
                    self.begin_leaving();
                } else {
                    self.phase = Phase::Exploring;
                }
            }
            Phase::Leaving => self.advance_scene(),
            Phase::Exploring => {}
        }
    }

    fn advance_scene(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        self.scenes[id as usize].stage.reset();
        match id.next() {
            Some(next) => self.enter_scene(next),
            None => {
                info!("story finished");
                self.return_to_menu();
                self.status = Some(data::STORY_COMPLETE.to_string());
                self.clear_progress();
            }
        }
    }

    fn return_to_menu(&mut self) {
        self.current = None;
        self.phase = Phase::Exploring;
        self.paused = false;
        self.cues.clear();
        self.narrator.clear();
        self.mode = Mode::Menu;
        self.menu.reset();
        self.menu_reveal = MENU_REVEAL_FRAMES;
        self.soundtrack.play(data::tracks::MORNING);
    }

    /// Menu "Continue": resume from disk, or explain why not.
    pub fn continue_game(&mut self) {
        let loaded = save::load(&self.save_path).and_then(|state| match state {
            Some(state) => self.resume(&state).map(|_| true),
            None => Ok(false),
        });
        match loaded {
            Ok(true) => self.status = None,
            Ok(false) => self.status = Some("No saved game to continue.".to_string()),
            Err(error) => {
                error!(%error, "could not resume");
                self.status = Some(format!("Could not continue: {error}"));
            }
        }
    }

    /// Re-enters the recorded scene at the recorded global position. Entry
    /// narration is skipped; the scene's ambient track is restored.
    pub fn resume(&mut self, state: &GameResumeState) -> Result<()> {
        let id = state.scene_id()?;
        let global = state.position();
        let scene = &mut self.scenes[id as usize];
        scene.stage.reset();
        let placed = scene
            .stage
            .surface
            .to_local(global)
            .is_some_and(|local| scene.stage.place(local));
        if !placed {
            return Err(GameError::BlockedPosition {
                scene: id.as_str(),
                y: global.y,
                x: global.x,
            });
        }
        let ambient = scene.ambient;

        if let Some(name) = state.player_name.as_deref() {
            self.narrator.set_speaker(name);
            self.player_name = Some(self.narrator.speaker().to_string());
        }
        info!(scene = id.as_str(), x = global.x, y = global.y, "resuming");
        self.fired.clear();
        self.paused = false;
        self.narrator.clear();
        self.cues.clear();
        self.mode = Mode::Playing;
        self.current = Some(id);
        self.phase = Phase::Exploring;
        match ambient {
            Some(track) => self.soundtrack.play(track),
            None => self.soundtrack.stop(),
        }
        if matches!(self.scenes[id as usize].exit, ExitRule::AfterCues) {
            self.begin_leaving();
        }
        Ok(())
    }

    /// Drops the resume record once there is nothing left to continue.
    fn clear_progress(&mut self) {
        match save::clear(&self.save_path) {
            Ok(()) => debug!(path = %self.save_path.display(), "progress cleared"),
            Err(error) => {
                error!(%error, "could not clear progress");
                self.status = Some(format!("Could not clear save: {error}"));
            }
        }
    }

    /// Writes the resume record for the active scene. Failures are logged
    /// and shown on the menu; play goes on.
    pub fn save_progress(&mut self) {
        let Some(scene) = self.scene() else {
            return;
        };
        let state = GameResumeState::new(
            scene.id,
            scene.stage.avatar.position(),
            self.player_name.clone(),
        );
        match save::store(&self.save_path, &state) {
            Ok(()) => debug!(scene = %state.scene, path = %self.save_path.display(), "progress saved"),
            Err(error) => {
                error!(%error, "could not save progress");
                self.status = Some(format!("Could not save: {error}"));
            }
        }
    }
}
