//! Compositor — draws the game state into the pixel buffer.
//!
//! No game logic is performed here; the buffer is rebuilt from scratch
//! every frame.

use crate::buffer::{rgb, PixelBuffer};
use crate::entities::{AlienState, BulletOwner, GameState};
use crate::sprites::{ALIEN_DEATH, BULLET, PLAYER};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: u32 = rgb(0, 128, 0);
pub const C_ALIEN: u32 = rgb(128, 0, 0);
pub const C_PLAYER: u32 = rgb(128, 0, 0);
pub const C_BULLET_PLAYER: u32 = rgb(128, 0, 0);
pub const C_BULLET_ALIEN: u32 = rgb(255, 255, 255);

/// Render one complete frame.
pub fn compose(buffer: &mut PixelBuffer, state: &GameState) {
    buffer.clear(C_BACKGROUND);

    for alien in &state.aliens {
        match alien.state {
            AlienState::Alive(kind) => {
                buffer.draw_sprite(state.alien_sprite(kind), alien.x, alien.y, C_ALIEN)
            }
            AlienState::Dying { .. } => {
                buffer.draw_sprite(&ALIEN_DEATH, alien.x, alien.y, C_ALIEN)
            }
            AlienState::Gone => {}
        }
    }

    for bullet in &state.bullets {
        let color = match bullet.owner {
            BulletOwner::Player => C_BULLET_PLAYER,
            BulletOwner::Alien => C_BULLET_ALIEN,
        };
        buffer.draw_sprite(&BULLET, bullet.x, bullet.y, color);
    }

    let player_sprite = match &state.player_explosion {
        Some(explosion) => explosion.current(),
        None => &PLAYER,
    };
    buffer.draw_sprite(player_sprite, state.player.x, state.player.y, C_PLAYER);
}
