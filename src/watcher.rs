//! Background terminal size check.
//!
//! The only thing shared with the game thread is one atomic flag; the
//! watcher never touches game state.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

/// What the game loop should do this frame about the terminal size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shutdown {
    No,
    /// Show the size notice for one frame.
    Warn,
    Now,
}

pub struct TerminalWatcher {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    warned: bool,
}

impl TerminalWatcher {
    /// Polls the real terminal through `crossterm`.
    pub fn spawn(min_rows: u16, min_cols: u16, interval: Duration) -> Self {
        Self::spawn_with(min_rows, min_cols, interval, crossterm::terminal::size)
    }

    /// Polls `probe`, which reports `(columns, rows)`.
    pub fn spawn_with<P>(min_rows: u16, min_cols: u16, interval: Duration, probe: P) -> Self
    where
        P: FnMut() -> io::Result<(u16, u16)> + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = thread::Builder::new()
            .name("terminal-watcher".to_string())
            .spawn(move || watch(probe, min_rows, min_cols, interval, &flag));

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(error) => {
                warn!(%error, "terminal watcher could not start");
                None
            }
        };
        Self {
            cancelled,
            handle,
            warned: false,
        }
    }

    /// Set once the terminal has been seen below the minimum size.
    pub fn cancellation_requested(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// After cancellation, the first call asks for the notice and every
    /// later call asks to quit.
    pub fn shutdown_step(&mut self) -> Shutdown {
        if !self.cancellation_requested() {
            Shutdown::No
        } else if !self.warned {
            self.warned = true;
            Shutdown::Warn
        } else {
            Shutdown::Now
        }
    }

    /// False once the thread has stopped, for whatever reason.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

fn watch<P>(mut probe: P, min_rows: u16, min_cols: u16, interval: Duration, flag: &AtomicBool)
where
    P: FnMut() -> io::Result<(u16, u16)>,
{
    loop {
        match probe() {
            Ok((cols, rows)) if rows < min_rows || cols < min_cols => {
                warn!(rows, cols, min_rows, min_cols, "terminal too small, requesting exit");
                flag.store(true, Ordering::Release);
                return;
            }
            Ok((cols, rows)) => debug!(rows, cols, "terminal size ok"),
            Err(error) => {
                warn!(%error, "terminal size unavailable, watcher stopping");
                return;
            }
        }
        thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(sizes: Vec<io::Result<(u16, u16)>>) -> impl FnMut() -> io::Result<(u16, u16)> {
        let mut sizes = sizes.into_iter();
        move || {
            sizes
                .next()
                .unwrap_or_else(|| Err(io::Error::other("probe exhausted")))
        }
    }

    fn join(watcher: &mut TerminalWatcher) {
        if let Some(handle) = watcher.handle.take() {
            handle.join().expect("watcher thread panicked");
        }
    }

    /// Waits for the thread to stop on its own, then reports the flag.
    fn finish(mut watcher: TerminalWatcher) -> bool {
        join(&mut watcher);
        watcher.cancellation_requested()
    }

    #[test]
    fn shrinking_below_minimum_cancels() {
        let watcher = TerminalWatcher::spawn_with(
            24,
            80,
            Duration::from_millis(1),
            sequence(vec![Ok((80, 24)), Ok((120, 40)), Ok((50, 13))]),
        );
        assert!(finish(watcher));
    }

    #[test]
    fn probe_failure_stops_without_cancelling() {
        let watcher = TerminalWatcher::spawn_with(
            24,
            80,
            Duration::from_millis(1),
            sequence(vec![Ok((100, 30))]),
        );
        assert!(!finish(watcher));
    }

    #[test]
    fn narrow_but_tall_is_still_too_small() {
        let watcher = TerminalWatcher::spawn_with(
            24,
            80,
            Duration::from_millis(1),
            sequence(vec![Ok((79, 60))]),
        );
        assert!(finish(watcher));
    }

    #[test]
    fn too_small_warns_for_one_frame_then_quits() {
        let mut watcher = TerminalWatcher::spawn_with(
            24,
            80,
            Duration::from_millis(1),
            sequence(vec![Ok((40, 10))]),
        );
        join(&mut watcher);
        assert_eq!(watcher.shutdown_step(), Shutdown::Warn);
        assert_eq!(watcher.shutdown_step(), Shutdown::Now);
        assert_eq!(watcher.shutdown_step(), Shutdown::Now);
    }

    #[test]
    fn healthy_terminal_never_shuts_down() {
        let mut watcher = TerminalWatcher::spawn_with(
            24,
            80,
            Duration::from_millis(1),
            sequence(vec![Ok((80, 24))]),
        );
        join(&mut watcher);
        assert_eq!(watcher.shutdown_step(), Shutdown::No);
        assert_eq!(watcher.shutdown_step(), Shutdown::No);
    }
}
