pub mod grids;

/// Entries of the title menu, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Continue,
    NewGame,
    Settings,
    Quit,
}

impl MenuOption {
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Continue => "Continue",
            MenuOption::NewGame => "New Game",
            MenuOption::Settings => "Settings",
            MenuOption::Quit => "Quit",
        }
    }
}

pub const MENU: [MenuOption; 4] = [
    MenuOption::Continue,
    MenuOption::NewGame,
    MenuOption::Settings,
    MenuOption::Quit,
];

/// Frames the closed scroll stays up before the menu unrolls.
pub const MENU_REVEAL_FRAMES: u32 = 8;

pub const TITLE: &[&str] = &[
    r" | |   __ _| |__ _  _ _ _(_)_ _| |_| |_  ___",
    r" | |__/ _` | '_ \ || | '_| | ' \  _| ' \(_-<",
    r" |____\__,_|_.__/\_, |_| |_|_||_\__|_||_/__/",
    r"                 |__/                       ",
];

pub const OPEN_SCROLL: &[&str] = &[
    r"         __________________________         ",
    r"       =(__    ___      __        _)=       ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |                        |         ",
    r"         |__    _ __   __    _ ___|         ",
    r"       =(______________________ ___)=       ",
];

pub const CLOSED_SCROLL: &[&str] = &[
    r"         __________________________         ",
    r"       =(__    ___      __        _)=       ",
    r"         |                        |         ",
    r"       =(__________________________)=       ",
];

pub const QUIT_PROMPT: &[&str] = &[
    "Are you sure you want to quit?",
    "",
    "",
    "       Y[es]       N[o]       ",
];

pub const NAME_PROMPT: &str = "What is your name, player?";

/// Longest name the entry box accepts.
pub const NAME_WIDTH: usize = 6;

pub const SETTINGS_NOTICE: &str = "There is nothing to configure yet.";

pub const STORY_COMPLETE: &str = "The story is complete. Start a New Game to play again.";

pub const TOO_SMALL_NOTICE: &str = "Terminal size is too small";

pub mod tracks {
    pub const MORNING: &str = "Morning";
    pub const DARK: &str = "Dark";
    pub const DOOR_SLAM: &str = "Door_Slam";
    pub const JAZZ: &str = "Jazz";
    pub const KNOCK: &str = "Knock";
}
