//! Level setup and the per-tick simulation step.
//!
//! Every function mutates the `GameState` it is handed.  Randomness only
//! enters through the injected RNG, so a seeded RNG replays a game exactly.

use rand::Rng;
use tracing::{debug, info};

use crate::entities::{
    Alien, AlienKind, AlienState, Bullet, BulletOwner, GameState, GameStatus, Level, Player,
};
use crate::input::InputState;
use crate::sprites::{
    overlap, SpriteAnimation, ALIEN_DEATH, ALIEN_FRAME_DURATION, BULLET,
    EXPLOSION_FRAME_DURATION, PLAYER, PLAYER_EXPLOSION_FRAMES,
};

pub const BUFFER_WIDTH: i32 = 224;
pub const BUFFER_HEIGHT: i32 = 256;

pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLS: usize = 11;

/// Ticks a hit alien keeps showing the death sprite.
pub const DEATH_TICKS: u32 = 10;

/// Horizontal pixels per tick for each unit of held direction.
pub const PLAYER_STEP: i32 = 2;
pub const BULLET_SPEED: i32 = 2;

const PLAYER_Y: i32 = 32;
const PLAYER_LIVES: u32 = 3;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// One alien shot per this many ticks, on average.
fn alien_fire_ratio(level: Level) -> u32 {
    match level {
        Level::Easy => 60,
        Level::Medium => 30,
        Level::Hard => 12,
    }
}

/// Bottom two rows are C, the middle two B, the top row A.
fn kind_for_row(row: usize) -> AlienKind {
    match (ALIEN_ROWS - row) / 2 + 1 {
        1 => AlienKind::A,
        2 => AlienKind::B,
        _ => AlienKind::C,
    }
}

fn player_start_x(width: i32) -> i32 {
    width / 2 - PLAYER.width as i32 / 2
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: a 5×11 alien grid over a centred player.
pub fn init_state(level: Level) -> GameState {
    let mut aliens = Vec::with_capacity(ALIEN_ROWS * ALIEN_COLS);
    for row in 0..ALIEN_ROWS {
        for col in 0..ALIEN_COLS {
            let kind = kind_for_row(row);
            let sprite = kind.frames()[0];
            // Centre each alien inside the death sprite's wider footprint.
            let inset = (ALIEN_DEATH.width - sprite.width) as i32 / 2;
            aliens.push(Alien {
                x: 16 * col as i32 + 20 + inset,
                y: 17 * row as i32 + 128,
                state: AlienState::Alive(kind),
            });
        }
    }

    info!(?level, aliens = aliens.len(), "level set up");

    GameState {
        width: BUFFER_WIDTH,
        height: BUFFER_HEIGHT,
        player: Player {
            x: player_start_x(BUFFER_WIDTH),
            y: PLAYER_Y,
            lives: PLAYER_LIVES,
        },
        aliens,
        bullets: Default::default(),
        alien_animations: [AlienKind::A, AlienKind::B, AlienKind::C]
            .map(|kind| SpriteAnimation::looping(kind.frames(), ALIEN_FRAME_DURATION)),
        player_explosion: None,
        score: 0,
        level,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Shift the player by `PLAYER_STEP * dir`, keeping the sprite inside the buffer.
pub fn move_player(state: &mut GameState, dir: i32) {
    if dir == 0 {
        return;
    }
    let max_x = state.width - PLAYER.width as i32;
    state.player.x = (state.player.x + PLAYER_STEP * dir).clamp(0, max_x);
}

/// Spawn a bullet at the player's muzzle.  Returns `false` when the player
/// is exploding or the bullet collection is full; the request is dropped.
pub fn player_fire(state: &mut GameState) -> bool {
    if state.player_explosion.is_some() {
        return false;
    }
    let bullet = Bullet {
        x: state.player.x + PLAYER.width as i32 / 2,
        y: state.player.y + PLAYER.height as i32,
        dir: BULLET_SPEED,
        owner: BulletOwner::Player,
    };
    if state.bullets.try_push(bullet).is_err() {
        debug!("bullet collection full, fire request dropped");
        return false;
    }
    true
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// The fire flag in `input` is consumed whether or not a bullet spawns.
pub fn tick(state: &mut GameState, input: &mut InputState, rng: &mut impl Rng) {
    state.frame += 1;
    let fire = input.take_fire();
    if state.status != GameStatus::Playing {
        return;
    }

    if state.player_explosion.is_none() {
        move_player(state, input.move_dir());
    }

    count_down_deaths(state);
    simulate_bullets(state);
    aliens_fire(state, rng);

    if fire {
        player_fire(state);
    }

    advance_animations(state);

    if state.status == GameStatus::Playing
        && state.aliens.iter().all(|a| a.state == AlienState::Gone)
    {
        state.status = GameStatus::Cleared;
        info!(score = state.score, frame = state.frame, "wave cleared");
    }
}

fn count_down_deaths(state: &mut GameState) {
    for alien in &mut state.aliens {
        if let AlienState::Dying { ticks_left } = alien.state {
            alien.state = if ticks_left <= 1 {
                AlienState::Gone
            } else {
                AlienState::Dying {
                    ticks_left: ticks_left - 1,
                }
            };
        }
    }
}

/// True once the bullet's footprint has left the buffer vertically.
fn out_of_bounds(bullet: &Bullet, height: i32) -> bool {
    bullet.y >= height || bullet.y + BULLET.height as i32 <= 0
}

/// Move every bullet and resolve its hits.  Spent bullets are swap-removed,
/// and the slot is examined again because the last bullet now occupies it.
fn simulate_bullets(state: &mut GameState) {
    let mut bi = 0;
    while bi < state.bullets.len() {
        let bullet = {
            let b = &mut state.bullets[bi];
            b.y += b.dir;
            *b
        };

        let spent = out_of_bounds(&bullet, state.height)
            || match bullet.owner {
                BulletOwner::Player => hit_alien(state, &bullet),
                BulletOwner::Alien => hit_player(state, &bullet),
            };

        if spent {
            state.bullets.swap_remove(bi);
        } else {
            bi += 1;
        }
    }
}

/// Kill the first alive alien the bullet overlaps.
fn hit_alien(state: &mut GameState, bullet: &Bullet) -> bool {
    for ai in 0..state.aliens.len() {
        let AlienState::Alive(kind) = state.aliens[ai].state else {
            continue;
        };
        let sprite = state.alien_sprite(kind);
        let alien = &mut state.aliens[ai];
        if !overlap(&BULLET, bullet.x, bullet.y, sprite, alien.x, alien.y) {
            continue;
        }

        alien.state = AlienState::Dying {
            ticks_left: DEATH_TICKS,
        };
        alien.x -= (ALIEN_DEATH.width - sprite.width) as i32 / 2;
        state.score += kind.points();
        debug!(alien = ai, ?kind, score = state.score, "alien hit");
        return true;
    }
    false
}

fn hit_player(state: &mut GameState, bullet: &Bullet) -> bool {
    if state.player_explosion.is_some() {
        return false;
    }
    let player = &state.player;
    if !overlap(&BULLET, bullet.x, bullet.y, &PLAYER, player.x, player.y) {
        return false;
    }

    state.player.lives = state.player.lives.saturating_sub(1);
    state.player_explosion = Some(SpriteAnimation::one_shot(
        &PLAYER_EXPLOSION_FRAMES,
        EXPLOSION_FRAME_DURATION,
    ));
    debug!(lives = state.player.lives, "player hit");
    true
}

/// Occasionally drop a bullet from the lowest alive alien of a random column.
fn aliens_fire(state: &mut GameState, rng: &mut impl Rng) {
    if !rng.gen_ratio(1, alien_fire_ratio(state.level)) {
        return;
    }
    let column = rng.gen_range(0..ALIEN_COLS);
    // Roster order is row-major from the bottom row up.
    let shooter = state
        .aliens
        .iter()
        .skip(column)
        .step_by(ALIEN_COLS)
        .find(|a| a.is_alive());
    let Some(alien) = shooter else {
        return;
    };
    let AlienState::Alive(kind) = alien.state else {
        return;
    };

    let sprite = state.alien_sprite(kind);
    let bullet = Bullet {
        x: alien.x + sprite.width as i32 / 2,
        y: alien.y - BULLET.height as i32,
        dir: -BULLET_SPEED,
        owner: BulletOwner::Alien,
    };
    if state.bullets.try_push(bullet).is_err() {
        debug!("bullet collection full, alien shot dropped");
    }
}

fn advance_animations(state: &mut GameState) {
    for animation in &mut state.alien_animations {
        animation.advance();
    }

    let finished = state
        .player_explosion
        .as_mut()
        .is_some_and(|explosion| !explosion.advance());
    if !finished {
        return;
    }

    state.player_explosion = None;
    if state.player.lives == 0 {
        state.status = GameStatus::GameOver;
        info!(score = state.score, frame = state.frame, "game over");
    } else {
        state.player.x = player_start_x(state.width);
    }
}
