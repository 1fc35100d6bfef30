use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::sim::InputState;

// Must outlive the terminal's key auto-repeat delay, so a hold stays
// continuous on terminals that never report a key release.
pub const HOLD_TIMEOUT_MS: u64 = 600;

/// Per-direction hold bookkeeping. Press and Repeat arm a direction with
/// the current clock; Release (reported where the kitty keyboard protocol
/// is active) clears it immediately; otherwise the hold decays after
/// [`HOLD_TIMEOUT_MS`] without a refresh.
#[derive(Default)]
pub struct HeldKeys {
    up: Option<u64>,
    down: Option<u64>,
    left: Option<u64>,
    right: Option<u64>,
}

fn live(armed: Option<u64>, now_ms: u64) -> bool {
    matches!(armed, Some(t) if now_ms.saturating_sub(t) < HOLD_TIMEOUT_MS)
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_event(&mut self, key: &KeyEvent, now_ms: u64) {
        let slot = match key.code {
            KeyCode::Up => &mut self.up,
            KeyCode::Down => &mut self.down,
            KeyCode::Left => &mut self.left,
            KeyCode::Right => &mut self.right,
            _ => return,
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => *slot = Some(now_ms),
            KeyEventKind::Release => *slot = None,
        }
    }

    pub fn snapshot(&self, now_ms: u64) -> InputState {
        InputState {
            up: live(self.up, now_ms),
            down: live(self.down, now_ms),
            left: live(self.left, now_ms),
            right: live(self.right, now_ms),
        }
    }
}
