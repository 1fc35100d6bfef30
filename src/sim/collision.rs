use crate::sim::{Block, Bullet};

// Strict on all four bounds: a bullet sitting exactly on an edge is a miss.
pub fn bullet_hits_block(bullet: &Bullet, block: &Block) -> bool {
    bullet.x > block.x
        && bullet.x < block.x + block.size
        && bullet.y > block.y
        && bullet.y < block.y + block.size
}

/// Removes every colliding bullet/block pair and returns how many blocks
/// were destroyed. Each bullet claims at most one block per pass, and a
/// claimed block is invisible to later bullets. Ties go to the block that
/// was pushed first. Removal happens after the scan completes.
pub fn resolve_hits(bullets: &mut Vec<Bullet>, blocks: &mut Vec<Block>) -> u32 {
    let mut bullets_remove: Vec<usize> = Vec::new();
    let mut claimed = vec![false; blocks.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ki, block) in blocks.iter().enumerate() {
            if claimed[ki] {
                continue;
            }
            if bullet_hits_block(bullet, block) {
                claimed[ki] = true;
                bullets_remove.push(bi);
                break;
            }
        }
    }

    // Indices are in ascending order; remove from the back to keep them valid.
    for &bi in bullets_remove.iter().rev() {
        bullets.remove(bi);
    }
    let mut ki = 0;
    blocks.retain(|_| {
        let keep = !claimed[ki];
        ki += 1;
        keep
    });

    bullets_remove.len() as u32
}
