use space_invaders::buffer::PixelBuffer;
use space_invaders::compute::{init_state, tick};
use space_invaders::entities::*;
use space_invaders::input::InputState;
use space_invaders::render::*;
use space_invaders::sprites::{SpriteAnimation, ALIEN_B0, ALIEN_DEATH, BULLET, PLAYER, PLAYER_EXPLOSION_FRAMES};

use rand::rngs::mock::StepRng;

fn make_state() -> GameState {
    let mut s = init_state(Level::Easy);
    s.aliens.clear();
    s
}

fn blank() -> PixelBuffer {
    PixelBuffer::new(224, 256, C_BACKGROUND)
}

/// The frame `compose` should produce: background plus the given draws.
fn expected(draws: &[(&space_invaders::sprites::Sprite, i32, i32, u32)]) -> PixelBuffer {
    let mut b = blank();
    for &(sprite, x, y, color) in draws {
        b.draw_sprite(sprite, x, y, color);
    }
    b
}

#[test]
fn compose_clears_previous_frame() {
    let s = make_state();
    let mut b = blank();
    b.clear(0xDEAD_BEEF);
    compose(&mut b, &s);
    assert_eq!(b, expected(&[(&PLAYER, 107, 32, C_PLAYER)]));
}

#[test]
fn compose_draws_alive_alien_with_current_frame() {
    let mut s = make_state();
    s.aliens.push(Alien { x: 60, y: 150, state: AlienState::Alive(AlienKind::B) });
    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(
        b,
        expected(&[(&ALIEN_B0, 60, 150, C_ALIEN), (&PLAYER, 107, 32, C_PLAYER)])
    );
}

#[test]
fn compose_draws_dying_alien_with_death_sprite() {
    let mut s = make_state();
    s.aliens.push(Alien { x: 60, y: 150, state: AlienState::Dying { ticks_left: 4 } });
    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(
        b,
        expected(&[(&ALIEN_DEATH, 60, 150, C_ALIEN), (&PLAYER, 107, 32, C_PLAYER)])
    );
}

#[test]
fn compose_skips_gone_aliens() {
    let mut s = make_state();
    s.aliens.push(Alien { x: 60, y: 150, state: AlienState::Gone });
    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(b, expected(&[(&PLAYER, 107, 32, C_PLAYER)]));
}

#[test]
fn hit_alien_is_drawn_dying_on_the_same_tick() {
    let mut s = make_state();
    s.aliens.push(Alien { x: 111, y: 128, state: AlienState::Alive(AlienKind::B) });
    s.bullets.push(Bullet { x: 116, y: 124, dir: 2, owner: BulletOwner::Player });
    tick(&mut s, &mut InputState::default(), &mut StepRng::new(u64::MAX, 0));

    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(
        b,
        expected(&[(&ALIEN_DEATH, 110, 128, C_ALIEN), (&PLAYER, 107, 32, C_PLAYER)])
    );
}

#[test]
fn compose_colours_bullets_by_owner() {
    let mut s = make_state();
    s.bullets.push(Bullet { x: 20, y: 100, dir: 2, owner: BulletOwner::Player });
    s.bullets.push(Bullet { x: 30, y: 100, dir: -2, owner: BulletOwner::Alien });
    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(
        b,
        expected(&[
            (&BULLET, 20, 100, C_BULLET_PLAYER),
            (&BULLET, 30, 100, C_BULLET_ALIEN),
            (&PLAYER, 107, 32, C_PLAYER),
        ])
    );
}

#[test]
fn compose_draws_explosion_instead_of_player() {
    let mut s = make_state();
    s.player_explosion = Some(SpriteAnimation::one_shot(&PLAYER_EXPLOSION_FRAMES, 8));
    let mut b = blank();
    compose(&mut b, &s);
    assert_eq!(
        b,
        expected(&[(PLAYER_EXPLOSION_FRAMES[0], 107, 32, C_PLAYER)])
    );
    assert_ne!(b, expected(&[(&PLAYER, 107, 32, C_PLAYER)]));
}
