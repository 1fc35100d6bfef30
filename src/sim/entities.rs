use rand::Rng;
use ratatui::style::Color;

use crate::sim::{InputState, FIELD_HEIGHT, FIELD_WIDTH};

pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_SIZE: f32 = 15.0;
const PLAYER_BOTTOM_GAP: f32 = 50.0;

pub const BULLET_SPEED: f32 = 8.0;
pub const BULLET_RADIUS: f32 = 3.0;

pub const BLOCK_MIN_SPEED: f32 = 1.0;
pub const BLOCK_MAX_SPEED: f32 = 3.0;
pub const BLOCK_MIN_SIZE: u32 = 20;
pub const BLOCK_MAX_SIZE: u32 = 40;
pub const BLOCK_SPAWN_Y: f32 = -40.0;

pub const BLOCK_PALETTE: [Color; 6] = [
    Color::Rgb(255, 0, 0),
    Color::Rgb(0, 255, 0),
    Color::Rgb(0, 0, 255),
    Color::Rgb(255, 0, 255),
    Color::Rgb(0, 255, 255),
    Color::Rgb(255, 165, 0),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: FIELD_HEIGHT - PLAYER_BOTTOM_GAP,
        }
    }

    // Held directions combine, so diagonals move at full speed on both axes.
    pub fn step(&mut self, input: InputState) {
        if input.left {
            self.x -= PLAYER_SPEED;
        }
        if input.right {
            self.x += PLAYER_SPEED;
        }
        if input.up {
            self.y -= PLAYER_SPEED;
        }
        if input.down {
            self.y += PLAYER_SPEED;
        }
        self.x = self.x.clamp(PLAYER_SIZE, FIELD_WIDTH - PLAYER_SIZE);
        self.y = self.y.clamp(PLAYER_SIZE, FIELD_HEIGHT - PLAYER_SIZE);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn update(&mut self) {
        self.y -= BULLET_SPEED;
    }

    pub fn is_off_screen(&self) -> bool {
        self.y < 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub x: f32,
    // Top-left corner; the block is a size x size square.
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub color: Color,
}

impl Block {
    pub fn new(x: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y: BLOCK_SPAWN_Y,
            size: rng.gen_range(BLOCK_MIN_SIZE..=BLOCK_MAX_SIZE) as f32,
            speed: rng.gen_range(BLOCK_MIN_SPEED..=BLOCK_MAX_SPEED),
            color: BLOCK_PALETTE[rng.gen_range(0..BLOCK_PALETTE.len())],
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    // Strict: a block whose top sits exactly on the bottom edge is in play.
    pub fn is_off_screen(&self) -> bool {
        self.y > FIELD_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    // ---- Player ----

    #[test]
    fn test_player_spawns_centered_above_bottom() {
        let p = Player::new();
        assert_eq!(p.x, FIELD_WIDTH / 2.0);
        assert_eq!(p.y, FIELD_HEIGHT - 50.0);
    }

    #[test]
    fn test_player_combines_held_directions() {
        let mut p = Player::new();
        let (x0, y0) = (p.x, p.y);
        p.step(InputState {
            left: true,
            up: true,
            ..Default::default()
        });
        assert_eq!(p.x, x0 - PLAYER_SPEED);
        assert_eq!(p.y, y0 - PLAYER_SPEED);
    }

    #[test]
    fn test_player_clamped_to_field_on_all_sides() {
        let mut p = Player::new();

        p.x = PLAYER_SIZE + 1.0;
        for _ in 0..5 {
            p.step(InputState {
                left: true,
                ..Default::default()
            });
        }
        assert_eq!(p.x, PLAYER_SIZE);

        p.x = FIELD_WIDTH - PLAYER_SIZE - 1.0;
        for _ in 0..5 {
            p.step(InputState {
                right: true,
                ..Default::default()
            });
        }
        assert_eq!(p.x, FIELD_WIDTH - PLAYER_SIZE);

        p.y = PLAYER_SIZE + 1.0;
        for _ in 0..5 {
            p.step(InputState {
                up: true,
                ..Default::default()
            });
        }
        assert_eq!(p.y, PLAYER_SIZE);

        p.y = FIELD_HEIGHT - PLAYER_SIZE - 1.0;
        for _ in 0..5 {
            p.step(InputState {
                down: true,
                ..Default::default()
            });
        }
        assert_eq!(p.y, FIELD_HEIGHT - PLAYER_SIZE);
    }

    #[test]
    fn test_player_idle_without_input() {
        let mut p = Player::new();
        let before = p;
        p.step(InputState::default());
        assert_eq!(p, before);
    }

    // ---- Bullet ----

    #[test]
    fn test_bullet_rises_then_dies_above_the_top() {
        let mut b = Bullet::new(100.0, 10.0);
        b.update();
        assert_eq!(b.y, 10.0 - BULLET_SPEED);
        assert!(!b.is_off_screen());
        b.update();
        assert!(b.y < 0.0);
        assert!(b.is_off_screen());
    }

    #[test]
    fn test_bullet_on_the_top_edge_is_alive() {
        assert!(!Bullet::new(100.0, 0.0).is_off_screen());
    }

    // ---- Block ----

    #[test]
    fn test_block_attributes_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let block = Block::new(100.0, &mut rng);
            assert_eq!(block.y, BLOCK_SPAWN_Y);
            assert!(block.speed >= BLOCK_MIN_SPEED && block.speed <= BLOCK_MAX_SPEED);
            assert!(block.size >= BLOCK_MIN_SIZE as f32 && block.size <= BLOCK_MAX_SIZE as f32);
            assert_eq!(block.size.fract(), 0.0);
            assert!(BLOCK_PALETTE.contains(&block.color));
        }
    }

    #[test]
    fn test_block_falls_at_its_own_speed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut block = Block::new(100.0, &mut rng);
        let y0 = block.y;
        block.update();
        assert_eq!(block.y, y0 + block.speed);
    }

    #[test]
    fn test_block_dies_only_past_the_bottom_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut block = Block::new(100.0, &mut rng);
        block.y = FIELD_HEIGHT;
        assert!(!block.is_off_screen());
        block.y = FIELD_HEIGHT + 0.5;
        assert!(block.is_off_screen());
    }
}
