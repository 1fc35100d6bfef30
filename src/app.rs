use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};

use crate::input::HeldKeys;
use crate::sim::Simulation;

pub struct App {
    pub sim: Simulation,
    pub should_quit: bool,
    held: HeldKeys,
    started: Instant,
}

impl App {
    pub fn new() -> Self {
        Self {
            sim: Simulation::new(),
            should_quit: false,
            held: HeldKeys::new(),
            started: Instant::now(),
        }
    }

    // Milliseconds since launch; the simulation's only notion of time.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn on_tick(&mut self) {
        let now = self.now_ms();
        let input = self.held.snapshot(now);
        let was_over = self.sim.game_over;
        self.sim.update(now, input, &mut rand::thread_rng());
        if !was_over && self.sim.game_over {
            info!("game over at score {}", self.sim.score);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.held.key_event(&key, self.now_ms());

        // Discrete actions trigger on the initial press only.
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.sim.toggle_pause();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.sim.game_over {
                    debug!("restart from score {}", self.sim.score);
                }
                self.sim.restart();
            }
            _ => {}
        }
    }
}
