use rand::Rng;

use crate::sim::{Block, Bullet, Player, FIELD_WIDTH};

pub const SHOOT_INTERVAL_MS: u64 = 300;
pub const SPAWN_INTERVAL_MS: u64 = 2000;
pub const MAX_BLOCKS: usize = 1;
const SPAWN_MARGIN_LEFT: u32 = 50;
const SPAWN_MARGIN_RIGHT: u32 = 90;

/// Wall-clock gates for the two automatic actions. Timestamps are
/// milliseconds since simulation start; both begin at zero, so a fresh
/// session shoots and spawns once the full interval has elapsed.
#[derive(Clone, Copy, Debug)]
pub struct Spawner {
    last_shot_ms: u64,
    last_spawn_ms: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            last_shot_ms: 0,
            last_spawn_ms: 0,
        }
    }

    // Strictly greater: at exactly the interval boundary, no shot yet.
    pub fn try_shoot(&mut self, now_ms: u64, player: &Player) -> Option<Bullet> {
        if now_ms - self.last_shot_ms > SHOOT_INTERVAL_MS {
            self.last_shot_ms = now_ms;
            return Some(Bullet::new(player.x, player.y));
        }
        None
    }

    // The timer only resets on an actual spawn. While a block is alive the
    // gate stays closed without touching the timer, so a field that empties
    // late respawns on the very next tick.
    pub fn try_spawn(&mut self, now_ms: u64, live_blocks: usize, rng: &mut impl Rng) -> Option<Block> {
        debug_assert!(SPAWN_MARGIN_LEFT + SPAWN_MARGIN_RIGHT <= FIELD_WIDTH as u32);
        if live_blocks < MAX_BLOCKS && now_ms - self.last_spawn_ms > SPAWN_INTERVAL_MS {
            self.last_spawn_ms = now_ms;
            let x = rng.gen_range(SPAWN_MARGIN_LEFT..=FIELD_WIDTH as u32 - SPAWN_MARGIN_RIGHT);
            return Some(Block::new(x as f32, rng));
        }
        None
    }
}
