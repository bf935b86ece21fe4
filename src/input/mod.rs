//! Keyboard routing.
//!
//! Raw terminal keys are normalised into [`Key`] and then dispatched by the
//! capability set the active window declares, never by which window it is.
//! New kinds of scene compose capabilities instead of adding a handler per
//! window type.

pub mod editor;
pub mod script;

use bitflags::bitflags;
use bracket_terminal::prelude::VirtualKeyCode;

use crate::map::Direction;

pub use editor::LineEditor;
pub use script::ScriptedInput;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Escape,
    Char(char),
}

impl Key {
    pub fn from_virtual(key: VirtualKeyCode, shift: bool) -> Option<Self> {
        let letter = |lower: char| {
            if shift {
                Key::Char(lower.to_ascii_uppercase())
            } else {
                Key::Char(lower)
            }
        };
        let key = match key {
            VirtualKeyCode::Up => Key::Up,
            VirtualKeyCode::Down => Key::Down,
            VirtualKeyCode::Left => Key::Left,
            VirtualKeyCode::Right => Key::Right,
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Key::Enter,
            VirtualKeyCode::Back => Key::Backspace,
            VirtualKeyCode::Escape => Key::Escape,
            VirtualKeyCode::Space => Key::Char(' '),
            VirtualKeyCode::Minus => Key::Char(if shift { '_' } else { '-' }),
            VirtualKeyCode::Period => Key::Char('.'),
            VirtualKeyCode::Apostrophe => Key::Char('\''),
            VirtualKeyCode::Key0 => Key::Char('0'),
            VirtualKeyCode::Key1 => Key::Char('1'),
            VirtualKeyCode::Key2 => Key::Char('2'),
            VirtualKeyCode::Key3 => Key::Char('3'),
            VirtualKeyCode::Key4 => Key::Char('4'),
            VirtualKeyCode::Key5 => Key::Char('5'),
            VirtualKeyCode::Key6 => Key::Char('6'),
            VirtualKeyCode::Key7 => Key::Char('7'),
            VirtualKeyCode::Key8 => Key::Char('8'),
            VirtualKeyCode::Key9 => Key::Char('9'),
            VirtualKeyCode::A => letter('a'),
            VirtualKeyCode::B => letter('b'),
            VirtualKeyCode::C => letter('c'),
            VirtualKeyCode::D => letter('d'),
            VirtualKeyCode::E => letter('e'),
            VirtualKeyCode::F => letter('f'),
            VirtualKeyCode::G => letter('g'),
            VirtualKeyCode::H => letter('h'),
            VirtualKeyCode::I => letter('i'),
            VirtualKeyCode::J => letter('j'),
            VirtualKeyCode::K => letter('k'),
            VirtualKeyCode::L => letter('l'),
            VirtualKeyCode::M => letter('m'),
            VirtualKeyCode::N => letter('n'),
            VirtualKeyCode::O => letter('o'),
            VirtualKeyCode::P => letter('p'),
            VirtualKeyCode::Q => letter('q'),
            VirtualKeyCode::R => letter('r'),
            VirtualKeyCode::S => letter('s'),
            VirtualKeyCode::T => letter('t'),
            VirtualKeyCode::U => letter('u'),
            VirtualKeyCode::V => letter('v'),
            VirtualKeyCode::W => letter('w'),
            VirtualKeyCode::X => letter('x'),
            VirtualKeyCode::Y => letter('y'),
            VirtualKeyCode::Z => letter('z'),
            _ => return None,
        };
        Some(key)
    }

    fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

bitflags! {
    /// Behaviour contracts a window supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const SELECTABLE = 1 << 0;
        const CONFIRMABLE = 1 << 1;
        const TEXT_EDITABLE = 1 << 2;
        const MOVABLE = 1 << 3;
        const SCROLLABLE = 1 << 4;
    }
}

/// What the active scene should do with one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Selected(usize),
    NoSelection,
    Terminate,
    Dismiss,
    NoOp,
    TextCommitted(String),
    Move {
        direction: Direction,
        recompute_viewport: bool,
    },
    PauseRequested,
}

/// Cursor over a fixed list of options.
#[derive(Clone, Debug)]
pub struct Selection {
    len: usize,
    index: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }
}

/// Mutable window state a handler may need. Only the pieces matching the
/// declared capabilities have to be supplied.
#[derive(Default)]
pub struct SceneContext<'a> {
    selection: Option<&'a mut Selection>,
    editor: Option<&'a mut LineEditor>,
}

impl<'a> SceneContext<'a> {
    pub fn with_selection(mut self, selection: &'a mut Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_editor(mut self, editor: &'a mut LineEditor) -> Self {
        self.editor = Some(editor);
        self
    }
}

type Handler = fn(Key, &mut SceneContext<'_>) -> Action;

const HANDLERS: [(Capabilities, Handler); 5] = [
    (Capabilities::SELECTABLE, select as Handler),
    (Capabilities::CONFIRMABLE, confirm as Handler),
    (Capabilities::TEXT_EDITABLE, edit_text as Handler),
    (Capabilities::MOVABLE, walk as Handler),
    (
        Capabilities::MOVABLE.union(Capabilities::SCROLLABLE),
        walk_scrolled as Handler,
    ),
];

fn handler_for(capabilities: Capabilities) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(declared, _)| *declared == capabilities)
        .map(|(_, handler)| *handler)
}

/// Turns one key into an action for a window declaring `capabilities`.
///
/// # Panics
///
/// Panics when no handler exists for `capabilities`, or when the context is
/// missing the state that handler needs. Both mean a scene was wired
/// incorrectly.
pub fn route(key: Key, capabilities: Capabilities, context: &mut SceneContext<'_>) -> Action {
    let Some(handler) = handler_for(capabilities) else {
        tracing::error!(?capabilities, "no input handler for capability set");
        panic!("no input handler for capability set {capabilities:?}");
    };
    handler(key, context)
}

fn select(key: Key, context: &mut SceneContext<'_>) -> Action {
    let Some(selection) = context.selection.as_deref_mut() else {
        panic!("selectable window routed without a selection");
    };
    match key {
        Key::Up => selection.previous(),
        Key::Down => selection.next(),
        Key::Enter => return Action::Selected(selection.index()),
        _ => {}
    }
    Action::NoSelection
}

fn confirm(key: Key, _context: &mut SceneContext<'_>) -> Action {
    match key {
        Key::Char('y') | Key::Char('Y') => Action::Terminate,
        Key::Char('n') | Key::Char('N') => Action::Dismiss,
        _ => Action::NoOp,
    }
}

fn edit_text(key: Key, context: &mut SceneContext<'_>) -> Action {
    let Some(editor) = context.editor.as_deref_mut() else {
        panic!("text-editable window routed without a line editor");
    };
    match editor.handle(key) {
        Some(text) => Action::TextCommitted(text),
        None => Action::NoOp,
    }
}

fn walk(key: Key, _context: &mut SceneContext<'_>) -> Action {
    movement(key, false)
}

fn walk_scrolled(key: Key, _context: &mut SceneContext<'_>) -> Action {
    movement(key, true)
}

fn movement(key: Key, recompute_viewport: bool) -> Action {
    if key == Key::Char('q') {
        return Action::PauseRequested;
    }
    match key.direction() {
        Some(direction) => Action::Move {
            direction,
            recompute_viewport,
        },
        None => Action::NoOp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_plain(key: Key, capabilities: Capabilities) -> Action {
        route(key, capabilities, &mut SceneContext::default())
    }

    #[test]
    fn selection_is_clamped_to_the_option_list() {
        let mut selection = Selection::new(4);
        for _ in 0..4 {
            let action = route(
                Key::Down,
                Capabilities::SELECTABLE,
                &mut SceneContext::default().with_selection(&mut selection),
            );
            assert_eq!(action, Action::NoSelection);
        }
        assert_eq!(selection.index(), 3);

        for _ in 0..6 {
            route(
                Key::Up,
                Capabilities::SELECTABLE,
                &mut SceneContext::default().with_selection(&mut selection),
            );
        }
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn enter_selects_and_other_keys_do_not() {
        let mut selection = Selection::new(4);
        let mut context = SceneContext::default().with_selection(&mut selection);
        assert_eq!(
            route(Key::Down, Capabilities::SELECTABLE, &mut context),
            Action::NoSelection
        );
        assert_eq!(
            route(Key::Char('x'), Capabilities::SELECTABLE, &mut context),
            Action::NoSelection
        );
        assert_eq!(
            route(Key::Enter, Capabilities::SELECTABLE, &mut context),
            Action::Selected(1)
        );
    }

    #[test]
    fn confirm_dialog_answers() {
        let caps = Capabilities::CONFIRMABLE;
        assert_eq!(route_plain(Key::Char('y'), caps), Action::Terminate);
        assert_eq!(route_plain(Key::Char('Y'), caps), Action::Terminate);
        assert_eq!(route_plain(Key::Char('n'), caps), Action::Dismiss);
        assert_eq!(route_plain(Key::Char('N'), caps), Action::Dismiss);
        assert_eq!(route_plain(Key::Enter, caps), Action::NoOp);
        assert_eq!(route_plain(Key::Char('q'), caps), Action::NoOp);
    }

    #[test]
    fn text_entry_commits_trimmed_text() {
        let mut editor = LineEditor::new(8);
        let mut context = SceneContext::default().with_editor(&mut editor);
        for key in [Key::Char(' '), Key::Char('a'), Key::Char('d'), Key::Char('a')] {
            assert_eq!(
                route(key, Capabilities::TEXT_EDITABLE, &mut context),
                Action::NoOp
            );
        }
        assert_eq!(
            route(Key::Enter, Capabilities::TEXT_EDITABLE, &mut context),
            Action::TextCommitted("ada".to_string())
        );
    }

    #[test]
    fn rooms_move_without_scrolling() {
        let caps = Capabilities::MOVABLE;
        assert_eq!(
            route_plain(Key::Left, caps),
            Action::Move {
                direction: Direction::Left,
                recompute_viewport: false
            }
        );
        assert_eq!(route_plain(Key::Char('q'), caps), Action::PauseRequested);
        assert_eq!(route_plain(Key::Char('x'), caps), Action::NoOp);
    }

    #[test]
    fn mazes_request_viewport_recompute() {
        let caps = Capabilities::MOVABLE | Capabilities::SCROLLABLE;
        assert_eq!(
            route_plain(Key::Up, caps),
            Action::Move {
                direction: Direction::Up,
                recompute_viewport: true
            }
        );
        assert_eq!(route_plain(Key::Char('q'), caps), Action::PauseRequested);
    }

    #[test]
    #[should_panic(expected = "no input handler")]
    fn unknown_capability_set_fails_fast() {
        route_plain(
            Key::Enter,
            Capabilities::SELECTABLE | Capabilities::MOVABLE,
        );
    }

    #[test]
    #[should_panic(expected = "without a selection")]
    fn selectable_without_selection_fails_fast() {
        route_plain(Key::Enter, Capabilities::SELECTABLE);
    }

    #[test]
    fn virtual_keys_normalise() {
        assert_eq!(Key::from_virtual(VirtualKeyCode::Q, false), Some(Key::Char('q')));
        assert_eq!(Key::from_virtual(VirtualKeyCode::Y, true), Some(Key::Char('Y')));
        assert_eq!(Key::from_virtual(VirtualKeyCode::Return, false), Some(Key::Enter));
        assert_eq!(Key::from_virtual(VirtualKeyCode::Up, true), Some(Key::Up));
        assert_eq!(Key::from_virtual(VirtualKeyCode::F1, false), None);
    }
}
