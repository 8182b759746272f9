/// Input sampling — turns crossterm key events into a per-tick `Intent`.
///
/// Instead of acting on individual events, a map records the tick on which
/// each key was last pressed or repeated.  A key counts as held while that
/// timestamp is fresh.  This works both on keyboard-enhancement terminals
/// (which report releases) and on classic terminals (where OS key-repeat
/// refreshes the timestamp faster than the hold window expires).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A key is considered held if its last press/repeat arrived within this
/// many ticks.  OS key-repeat is ≥ 15 Hz, so at 100 ms/tick the window is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 2;

/// The most recent sampled key state, read by the ship controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intent {
    /// -1 up, 0 none, 1 down.
    pub row_direction: i32,
    /// -1 left, 0 none, 1 right.
    pub col_direction: i32,
    pub fire: bool,
}

pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    tick: u64,
}

impl KeyTracker {
    pub fn new() -> KeyTracker {
        KeyTracker {
            last_seen: HashMap::new(),
            tick: 0,
        }
    }

    /// Advance the tracker's clock; call once per game tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Feed one key event from the terminal.
    pub fn record(&mut self, event: &KeyEvent) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, self.tick);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
            }
        }
    }

    fn held(&self, key: KeyCode) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| self.tick.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Current directional and fire intent.
    pub fn intent(&self) -> Intent {
        let mut row_direction = 0;
        let mut col_direction = 0;
        if self.held(KeyCode::Up) {
            row_direction -= 1;
        }
        if self.held(KeyCode::Down) {
            row_direction += 1;
        }
        if self.held(KeyCode::Left) {
            col_direction -= 1;
        }
        if self.held(KeyCode::Right) {
            col_direction += 1;
        }
        Intent {
            row_direction,
            col_direction,
            fire: self.held(KeyCode::Char(' ')),
        }
    }
}

impl Default for KeyTracker {
    fn default() -> KeyTracker {
        KeyTracker::new()
    }
}
