use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::warn;

use super::Key;

/// Pre-recorded key presses, replayed one per frame before the keyboard
/// takes over.
pub struct ScriptedInput {
    script_commands: Vec<Key>,
    current_command_index: usize,
}

impl ScriptedInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut script_commands = Vec::new();

        for line in reader.lines() {
            let line = line?;
            parse_line(&line, &mut script_commands);
        }

        Ok(Self {
            script_commands,
            current_command_index: 0,
        })
    }

    pub fn parse(text: &str) -> Self {
        let mut script_commands = Vec::new();
        for line in text.lines() {
            parse_line(line, &mut script_commands);
        }
        Self {
            script_commands,
            current_command_index: 0,
        }
    }

    pub fn next_key(&mut self) -> Option<Key> {
        let key = self.script_commands.get(self.current_command_index).copied()?;
        self.current_command_index += 1;
        Some(key)
    }

    pub fn remaining(&self) -> usize {
        self.script_commands.len() - self.current_command_index
    }
}

fn parse_line(line: &str, out: &mut Vec<Key>) {
    let trimmed_line = line.trim();
    if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
        return;
    }

    for token in trimmed_line.split_whitespace() {
        let (name, count) = match token.rsplit_once('*') {
            Some((name, count)) if !name.is_empty() => match count.parse::<usize>() {
                Ok(count) => (name, count),
                Err(_) => {
                    warn!(%token, "bad repeat count in key script");
                    continue;
                }
            },
            _ => (token, 1),
        };
        match token_to_key(name) {
            Some(key) => out.extend(std::iter::repeat_n(key, count)),
            None => warn!(%token, "unknown key in script"),
        }
    }
}

fn token_to_key(token: &str) -> Option<Key> {
    let key = match token {
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "enter" => Key::Enter,
        "back" => Key::Backspace,
        "esc" => Key::Escape,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Char(ch),
                _ => return None,
            }
        }
    };
    Some(key)
}
