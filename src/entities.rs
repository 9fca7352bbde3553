//! All game entity types — plain data, no simulation logic.

use arrayvec::ArrayVec;
use clap::ValueEnum;

use crate::sprites::{
    Sprite, SpriteAnimation, ALIEN_A_FRAMES, ALIEN_B_FRAMES, ALIEN_C_FRAMES,
};

/// Upper bound on bullets in flight (player and alien combined).
pub const MAX_BULLETS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienKind {
    A,
    B,
    C,
}

impl AlienKind {
    /// Position of this kind's animation in `GameState::alien_animations`.
    pub fn index(self) -> usize {
        match self {
            AlienKind::A => 0,
            AlienKind::B => 1,
            AlienKind::C => 2,
        }
    }

    pub fn frames(self) -> &'static [&'static Sprite] {
        match self {
            AlienKind::A => &ALIEN_A_FRAMES,
            AlienKind::B => &ALIEN_B_FRAMES,
            AlienKind::C => &ALIEN_C_FRAMES,
        }
    }

    /// Score awarded when this kind is destroyed.
    pub fn points(self) -> u32 {
        match self {
            AlienKind::A => 30,
            AlienKind::B => 20,
            AlienKind::C => 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienState {
    Alive(AlienKind),
    /// Shown as the death sprite until the countdown runs out.
    Dying { ticks_left: u32 },
    Gone,
}

/// Difficulty; selects how often the aliens fire back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// Every alien in the roster is gone.
    Cleared,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Alien,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical pixels per tick; positive is up.
    pub dir: i32,
    pub owner: BulletOwner,
}

// ── Player & aliens ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub state: AlienState,
}

impl Alien {
    pub fn is_alive(&self) -> bool {
        matches!(self.state, AlienState::Alive(_))
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation step mutates.  The roster never changes size
/// after setup, so an alien's index identifies it for the whole session.
#[derive(Clone, Debug)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub player: Player,
    pub aliens: Vec<Alien>,
    pub bullets: ArrayVec<Bullet, MAX_BULLETS>,
    /// One looping animation per `AlienKind`, shared by every alien of that kind.
    pub alien_animations: [SpriteAnimation; 3],
    /// Present while the player's one-shot explosion is playing.
    pub player_explosion: Option<SpriteAnimation>,
    pub score: u32,
    pub level: Level,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameState {
    /// The sprite an alive alien of `kind` shows this tick.
    pub fn alien_sprite(&self, kind: AlienKind) -> &'static Sprite {
        self.alien_animations[kind.index()].current()
    }
}
