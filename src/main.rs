mod audio;
mod config;
mod data;
mod entity;
mod error;
mod input;
mod logging;
mod map;
mod narration;
mod render;
mod save;
mod scene;
mod viewport;
mod watcher;

use audio::TracingSoundtrack;
use bracket_terminal::prelude::*;
use config::GameConfig;
use input::{Key, ScriptedInput};
use narration::Narrator;
use render::{SCREEN_HEIGHT, SCREEN_WIDTH};
use scene::{Flow, SceneController};
use tracing::{info, warn};
use watcher::{Shutdown, TerminalWatcher};

struct ScrollboundState {
    controller: SceneController<TracingSoundtrack>,
    script: Option<ScriptedInput>,
    watcher: TerminalWatcher,
    watcher_alive: bool,
}

impl GameState for ScrollboundState {
    fn tick(&mut self, ctx: &mut BTerm) {
        match self.watcher.shutdown_step() {
            Shutdown::No => {}
            Shutdown::Warn => {
                warn!("terminal too small, shutting down");
                ctx.cls();
                render::draw_too_small(ctx);
                return;
            }
            Shutdown::Now => {
                ctx.quit();
                return;
            }
        }
        if self.watcher_alive && !self.watcher.is_running() {
            self.watcher_alive = false;
            info!("terminal watcher stopped");
        }

        let key = self.next_key(ctx);
        if self.controller.tick(key) == Flow::Quit {
            info!("quitting");
            ctx.quit();
            return;
        }
        ctx.cls();
        render::draw(ctx, &self.controller);
    }
}

impl ScrollboundState {
    /// Scripted keys win until the script runs dry; then the keyboard.
    fn next_key(&mut self, ctx: &BTerm) -> Option<Key> {
        if let Some(script) = self.script.as_mut() {
            if let Some(key) = script.next_key() {
                return Some(key);
            }
            info!("key script finished, keyboard takes over");
            self.script = None;
        }
        ctx.key.and_then(|key| Key::from_virtual(key, ctx.shift))
    }
}

fn main() -> BError {
    let config = GameConfig::from_env();
    let _log_guard = logging::init(&config.log_dir)?;
    info!(?config, "starting scrollbound");

    let script = match config.script_path.as_deref() {
        Some(path) => match ScriptedInput::from_file(path) {
            Ok(script) => {
                info!(path = %path.display(), keys = script.remaining(), "loaded key script");
                Some(script)
            }
            Err(error) => {
                warn!(%error, path = %path.display(), "could not read key script");
                None
            }
        },
        None => None,
    };

    let watcher = TerminalWatcher::spawn(config.min_rows, config.min_cols, config.watch_interval);
    let controller = SceneController::new(
        TracingSoundtrack::default(),
        Narrator::new(config.type_speed),
        config.save_path.clone(),
    );

    let context = BTermBuilder::simple(SCREEN_WIDTH, SCREEN_HEIGHT)?
        .with_title("Scrollbound")
        .build()?;
    let game_state = ScrollboundState {
        controller,
        script,
        watcher,
        watcher_alive: true,
    };
    main_loop(context, game_state)
}
