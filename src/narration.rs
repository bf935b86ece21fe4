use crate::input::Key;

pub const DEFAULT_SPEAKER: &str = "Hudson";

/// Capitalises a typed name the way narration prefixes expect it; an empty
/// name falls back to [`DEFAULT_SPEAKER`].
pub fn speaker_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => DEFAULT_SPEAKER.to_string(),
    }
}

struct Line {
    text: String,
    revealed: usize,
}

/// One boxed line of narration at a time, typed out a few characters per
/// frame and held until the player presses Enter.
pub struct Narrator {
    speaker: String,
    line: Option<Line>,
    chars_per_frame: usize,
}

impl Narrator {
    pub fn new(chars_per_frame: usize) -> Self {
        Self {
            speaker: DEFAULT_SPEAKER.to_string(),
            line: None,
            chars_per_frame,
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn set_speaker(&mut self, raw: &str) {
        self.speaker = speaker_name(raw);
    }

    pub fn display_line(&mut self, text: &str) {
        let text = format!("{}: {}", self.speaker, text);
        let revealed = if self.chars_per_frame == 0 {
            text.chars().count()
        } else {
            0
        };
        self.line = Some(Line { text, revealed });
    }

    pub fn is_showing(&self) -> bool {
        self.line.is_some()
    }

    pub fn clear(&mut self) {
        self.line = None;
    }

    /// Typewriter step, called once per frame.
    pub fn advance(&mut self) {
        if let Some(line) = self.line.as_mut() {
            let total = line.text.chars().count();
            line.revealed = (line.revealed + self.chars_per_frame).min(total);
        }
    }

    /// Enter finishes a half-typed line, or dismisses a complete one.
    /// Returns true once the line is gone.
    pub fn on_key(&mut self, key: Key) -> bool {
        let Some(line) = self.line.as_mut() else {
            return true;
        };
        if key != Key::Enter {
            return false;
        }
        let total = line.text.chars().count();
        if line.revealed < total {
            line.revealed = total;
            return false;
        }
        self.line = None;
        true
    }

    /// Text typed so far, if a line is up.
    pub fn visible_text(&self) -> Option<String> {
        self.line
            .as_ref()
            .map(|line| line.text.chars().take(line.revealed).collect())
    }

    pub fn fully_revealed(&self) -> bool {
        self.line
            .as_ref()
            .is_none_or(|line| line.revealed >= line.text.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_capitalised_with_default() {
        assert_eq!(speaker_name("aDA"), "Ada");
        assert_eq!(speaker_name("  "), "Hudson");
        assert_eq!(speaker_name(""), "Hudson");
        assert_eq!(speaker_name("kit"), "Kit");
    }

    #[test]
    fn lines_carry_the_speaker_prefix() {
        let mut narrator = Narrator::new(0);
        narrator.set_speaker("ada");
        narrator.display_line("Hello.");
        assert_eq!(narrator.visible_text().as_deref(), Some("Ada: Hello."));
    }

    #[test]
    fn typewriter_reveals_per_frame() {
        let mut narrator = Narrator::new(3);
        narrator.display_line("abcdef");
        assert_eq!(narrator.visible_text().as_deref(), Some(""));
        narrator.advance();
        assert_eq!(narrator.visible_text().as_deref(), Some("Hud"));
        narrator.advance();
        assert_eq!(narrator.visible_text().as_deref(), Some("Hudson"));
        assert!(!narrator.fully_revealed());
    }

    #[test]
    fn enter_first_completes_then_dismisses() {
        let mut narrator = Narrator::new(1);
        narrator.display_line("Time is a fickle thing.");
        narrator.advance();
        assert!(!narrator.on_key(Key::Char('x')));
        assert!(!narrator.on_key(Key::Enter));
        assert!(narrator.fully_revealed());
        assert!(narrator.is_showing());
        assert!(narrator.on_key(Key::Enter));
        assert!(!narrator.is_showing());
    }

    #[test]
    fn instant_mode_dismisses_on_first_enter() {
        let mut narrator = Narrator::new(0);
        narrator.display_line("What is the time?");
        assert!(narrator.on_key(Key::Enter));
        assert!(!narrator.is_showing());
    }
}
