use tracing::info;

/// Fire-and-forget music cues. Nothing the game does depends on the result.
pub trait Soundtrack {
    /// Starts `track` on a loop, replacing whatever was playing.
    fn play(&mut self, track: &str);
    /// Plays `track` once over the current music.
    fn play_once(&mut self, track: &str);
    fn stop(&mut self);
}

/// Soundtrack without an output device: cues are only written to the log.
#[derive(Debug, Default)]
pub struct TracingSoundtrack {
    current: Option<String>,
}

impl Soundtrack for TracingSoundtrack {
    fn play(&mut self, track: &str) {
        if self.current.as_deref() == Some(track) {
            return;
        }
        info!(%track, "music loop");
        self.current = Some(track.to_string());
    }

    fn play_once(&mut self, track: &str) {
        info!(%track, "sound effect");
    }

    fn stop(&mut self) {
        if let Some(track) = self.current.take() {
            info!(%track, "music stopped");
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSoundtrack {
    pub events: Vec<String>,
}

#[cfg(test)]
impl Soundtrack for RecordingSoundtrack {
    fn play(&mut self, track: &str) {
        self.events.push(format!("play {track}"));
    }

    fn play_once(&mut self, track: &str) {
        self.events.push(format!("once {track}"));
    }

    fn stop(&mut self) {
        self.events.push("stop".to_string());
    }
}
