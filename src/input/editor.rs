use super::Key;

/// Single-line text field with a fixed width.
#[derive(Clone, Debug)]
pub struct LineEditor {
    buffer: String,
    capacity: usize,
}

impl LineEditor {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Applies one key. Returns the trimmed line and empties the field when
    /// the key commits it.
    pub fn handle(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Enter => {
                let committed = self.buffer.trim().to_string();
                self.buffer.clear();
                return Some(committed);
            }
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Char(ch) if !ch.is_control() && self.buffer.chars().count() < self.capacity => {
                self.buffer.push(ch);
            }
            _ => {}
        }
        None
    }
}
