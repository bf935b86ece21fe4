//! The scripted story: layouts, start cells and cues for every scene.

use bracket_geometry::prelude::Point;

use super::{Cue, ExitRule, Scene, SceneId, SideTrigger, Stage};
use crate::data::grids::{BATTLE_1, BATTLE_2, BATTLE_3, HOUSE};
use crate::data::tracks;
use crate::map::{Direction, Surface, WallMap};
use crate::viewport::Viewport;

pub const VIEW_WIDTH: i32 = 64;
pub const VIEW_HEIGHT: i32 = 18;
/// Top-left display cell of room windows and of the maze viewport.
pub const WINDOW_ANCHOR: Point = Point { x: 8, y: 9 };
/// Where the house drawing sits inside its window.
const HOUSE_OFFSET: Point = Point { x: 16, y: 1 };
const HOUSE_FLOOR: char = ';';
/// Shared by every maze: the gap in the west wall.
const MAZE_EXIT: Point = Point { x: 1, y: 12 };

pub fn build_scene(id: SceneId) -> Scene {
    match id {
        SceneId::HouseOne => house_one(),
        SceneId::BattleOne => battle_one(),
        SceneId::BattleTwo => battle_two(),
        SceneId::BattleThree => battle_three(),
        SceneId::HouseTwo => house_two(),
    }
}

fn room(start: Point) -> Stage {
    let mut surface = Surface::filled(VIEW_WIDTH, VIEW_HEIGHT, WINDOW_ANCHOR, HOUSE_FLOOR);
    surface.stamp(HOUSE, HOUSE_OFFSET);
    let walls = WallMap::from_grid_at(HOUSE, HOUSE_OFFSET);
    Stage::new(surface, walls, start, None)
}

/// Maze backings are twice the grid in each axis and sit at the display
/// origin; only the viewport is anchored on screen.
fn maze(grid: &[&str], start: Point, view: Point) -> Stage {
    let rows = grid.len() as i32;
    let cols = grid.first().map_or(0, |row| row.chars().count()) as i32;
    let mut surface = Surface::blank(cols * 2, rows * 2, Point::new(0, 0));
    surface.stamp(grid, Point::new(0, 0));
    let walls = WallMap::from_grid(grid);
    let viewport = Viewport::new(
        view,
        VIEW_WIDTH,
        VIEW_HEIGHT,
        surface.width,
        surface.height,
        WINDOW_ANCHOR,
    );
    Stage::new(surface, walls, start, Some(viewport))
}

fn house_door(stage: &Stage) -> ExitRule {
    ExitRule::reach(&[
        stage.surface.to_global(Point::new(31, 15)),
        stage.surface.to_global(Point::new(32, 15)),
    ])
}

fn house_one() -> Scene {
    let stage = room(Point::new(24, 4));
    let exit = house_door(&stage);
    Scene {
        id: SceneId::HouseOne,
        stage,
        exit,
        entry_cues: vec![
            Cue::Play(tracks::MORNING),
            Cue::Say("\"Time is a fickle thing.\"\n\n                    Press 'Enter'"),
            Cue::Say("What could she have meant by that?"),
            Cue::Say("It is already 5:00."),
            Cue::Say("(sighs) I am getting way too in my head."),
            Cue::Say("I'll probably take a walk in the forest.\nIt'll help get my mind off things a little."),
        ],
        exit_cues: Vec::new(),
        triggers: Vec::new(),
        ambient: Some(tracks::MORNING),
    }
}

fn battle_one() -> Scene {
    Scene {
        id: SceneId::BattleOne,
        stage: maze(BATTLE_1, Point::new(65, 5), Point::new(32, 0)),
        exit: ExitRule::reach(&[MAZE_EXIT]),
        entry_cues: vec![
            Cue::Say("Huh? What is this place?"),
            Cue::Say("I must have taken a wrong turn."),
            Cue::StopMusic,
            Cue::Play(tracks::DARK),
            Cue::Say("It is pretty dark and creepy."),
            Cue::Say("I should probably head back."),
            Cue::StopMusic,
            Cue::PlayOnce(tracks::DOOR_SLAM),
            Cue::Say("AHHH!?"),
            Cue::Step(Direction::Right),
            Cue::Say("HEYYY!!\nOPEN THE DOOR!!!"),
            Cue::Step(Direction::Right),
            Cue::Say("Is someone playing a joke on me?"),
            Cue::Say("I do not have time for this.\nThis isn't funny."),
            Cue::Play(tracks::DARK),
            Cue::Step(Direction::Left),
            Cue::Step(Direction::Left),
            Cue::Say("(sighs) It is alright. There must be another exit."),
            Cue::Say("I should just keep calm."),
        ],
        exit_cues: vec![Cue::StopMusic],
        triggers: Vec::new(),
        ambient: Some(tracks::DARK),
    }
}

fn battle_two() -> Scene {
    Scene {
        id: SceneId::BattleTwo,
        stage: maze(BATTLE_2, Point::new(75, 27), Point::new(42, 18)),
        exit: ExitRule::reach(&[MAZE_EXIT]),
        entry_cues: vec![
            Cue::Play(tracks::JAZZ),
            Cue::Say("This place just keeps getting weirder."),
            Cue::Say("How do I even get out of here?"),
            Cue::Say("There has to be a way out."),
        ],
        exit_cues: vec![Cue::StopMusic],
        triggers: Vec::new(),
        ambient: Some(tracks::JAZZ),
    }
}

fn battle_three() -> Scene {
    Scene {
        id: SceneId::BattleThree,
        stage: maze(BATTLE_3, Point::new(85, 3), Point::new(52, 0)),
        exit: ExitRule::reach(&[MAZE_EXIT]),
        entry_cues: vec![
            Cue::Play(tracks::KNOCK),
            Cue::Say("I must be close to the end now."),
            Cue::Say("This place feels different. Is it... colder?"),
            Cue::Say("I am not sure how much longer I can go."),
        ],
        exit_cues: Vec::new(),
        triggers: vec![SideTrigger {
            at: Point::new(29, 3),
            cues: vec![
                Cue::Say("???"),
                Cue::Say("Why is there a skull engraved on the floor?"),
                Cue::Say("I am really hoping this was simply a design choice."),
            ],
        }],
        ambient: Some(tracks::KNOCK),
    }
}

fn house_two() -> Scene {
    let stage = room(Point::new(32, 16));
    let mut entry_cues = vec![Cue::Step(Direction::Up); 5];
    entry_cues.extend([
        Cue::Say("How am I back here?"),
        Cue::Say("What happened?"),
        Cue::StopMusic,
        Cue::Say("What is the time?"),
    ]);
    Scene {
        id: SceneId::HouseTwo,
        stage,
        exit: ExitRule::AfterCues,
        entry_cues,
        exit_cues: Vec::new(),
        triggers: Vec::new(),
        ambient: None,
    }
}
