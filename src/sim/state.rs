use rand::Rng;

use crate::sim::collision;
use crate::sim::spawner::Spawner;
use crate::sim::{Block, Bullet, InputState, Player};

pub const POINTS_PER_BLOCK: u32 = 10;

/// The whole game between two frames: the ship, everything in flight, the
/// spawn gates and the pause/game-over flags. Owned exclusively by the loop
/// driver and mutated only inside [`Simulation::update`].
pub struct Simulation {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub blocks: Vec<Block>,
    pub spawner: Spawner,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            bullets: Vec::new(),
            blocks: Vec::new(),
            spawner: Spawner::new(),
            score: 0,
            paused: false,
            game_over: false,
        }
    }

    /// Advances one tick: movement, the two spawn gates, entity motion with
    /// off-screen culling, then collision scoring. A no-op while paused or
    /// lost; unpause/restart/quit input stays with the caller.
    pub fn update(&mut self, now_ms: u64, input: InputState, rng: &mut impl Rng) {
        if self.game_over || self.paused {
            return;
        }

        self.player.step(input);

        if let Some(bullet) = self.spawner.try_shoot(now_ms, &self.player) {
            self.bullets.push(bullet);
        }
        if let Some(block) = self.spawner.try_spawn(now_ms, self.blocks.len(), rng) {
            self.blocks.push(block);
        }

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| !b.is_off_screen());

        for block in &mut self.blocks {
            block.update();
        }
        // A block past the bottom edge loses the game on this very tick;
        // the tick ends here so nothing new happens on a lost field.
        let mut breached = false;
        self.blocks.retain(|b| {
            if b.is_off_screen() {
                breached = true;
                false
            } else {
                true
            }
        });
        if breached {
            self.game_over = true;
            return;
        }

        let destroyed = collision::resolve_hits(&mut self.bullets, &mut self.blocks);
        self.score += destroyed * POINTS_PER_BLOCK;
    }

    // Pause has no meaning once the game is lost.
    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    // Restart only answers a lost game. Everything returns to first-tick
    // state, timers included.
    pub fn restart(&mut self) {
        if self.game_over {
            *self = Simulation::new();
        }
    }
}
