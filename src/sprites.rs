//! Sprite stencils, the static asset table, animation clocks and the
//! bounding-box overlap test.

// ── Sprite ────────────────────────────────────────────────────────────────────

/// An immutable on/off stencil. Row 0 of `data` is the top row.
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub data: &'static [u8],
}

impl Sprite {
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }
}

/// True iff the bounding rectangles of the two anchored sprites intersect.
///
/// Only the rectangles are compared; transparent stencil cells still count.
pub fn overlap(a: &Sprite, xa: i32, ya: i32, b: &Sprite, xb: i32, yb: i32) -> bool {
    let (wa, ha) = (a.width as i32, a.height as i32);
    let (wb, hb) = (b.width as i32, b.height as i32);
    xa < xb + wb && xa + wa > xb && ya < yb + hb && ya + ha > yb
}

// ── SpriteAnimation ───────────────────────────────────────────────────────────

/// A frame clock over a fixed sequence of shared sprites.
#[derive(Clone, Debug)]
pub struct SpriteAnimation {
    pub looping: bool,
    pub frame_duration: usize,
    pub time: usize,
    pub frames: &'static [&'static Sprite],
}

impl SpriteAnimation {
    pub fn looping(frames: &'static [&'static Sprite], frame_duration: usize) -> Self {
        Self {
            looping: true,
            frame_duration,
            time: 0,
            frames,
        }
    }

    pub fn one_shot(frames: &'static [&'static Sprite], frame_duration: usize) -> Self {
        Self {
            looping: false,
            ..Self::looping(frames, frame_duration)
        }
    }

    pub fn frame_index(&self) -> usize {
        (self.time / self.frame_duration) % self.frames.len()
    }

    pub fn current(&self) -> &'static Sprite {
        self.frames[self.frame_index()]
    }

    /// Advance by one tick.  Returns `false` once a one-shot animation has
    /// played its last frame; the caller drops it.
    pub fn advance(&mut self) -> bool {
        self.time += 1;
        if self.time >= self.frames.len() * self.frame_duration {
            if !self.looping {
                return false;
            }
            self.time = 0;
        }
        true
    }
}

// ── Asset table ───────────────────────────────────────────────────────────────

pub static ALIEN_A0: Sprite = Sprite {
    width: 8,
    height: 8,
    data: &[
        0,0,0,1,1,0,0,0, // ...@@...
        0,0,1,1,1,1,0,0, // ..@@@@..
        0,1,1,1,1,1,1,0, // .@@@@@@.
        1,1,0,1,1,0,1,1, // @@.@@.@@
        1,1,1,1,1,1,1,1, // @@@@@@@@
        0,1,0,1,1,0,1,0, // .@.@@.@.
        1,0,0,0,0,0,0,1, // @......@
        0,1,0,0,0,0,1,0, // .@....@.
    ],
};

pub static ALIEN_A1: Sprite = Sprite {
    width: 8,
    height: 8,
    data: &[
        0,0,0,1,1,0,0,0, // ...@@...
        0,0,1,1,1,1,0,0, // ..@@@@..
        0,1,1,1,1,1,1,0, // .@@@@@@.
        1,1,0,1,1,0,1,1, // @@.@@.@@
        1,1,1,1,1,1,1,1, // @@@@@@@@
        0,0,1,0,0,1,0,0, // ..@..@..
        0,1,0,1,1,0,1,0, // .@.@@.@.
        1,0,1,0,0,1,0,1, // @.@..@.@
    ],
};

pub static ALIEN_B0: Sprite = Sprite {
    width: 11,
    height: 8,
    data: &[
        0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
        0,0,0,1,0,0,0,1,0,0,0, // ...@...@...
        0,0,1,1,1,1,1,1,1,0,0, // ..@@@@@@@..
        0,1,1,0,1,1,1,0,1,1,0, // .@@.@@@.@@.
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
        1,0,1,1,1,1,1,1,1,0,1, // @.@@@@@@@.@
        1,0,1,0,0,0,0,0,1,0,1, // @.@.....@.@
        0,0,0,1,1,0,1,1,0,0,0, // ...@@.@@...
    ],
};

pub static ALIEN_B1: Sprite = Sprite {
    width: 11,
    height: 8,
    data: &[
        0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
        1,0,0,1,0,0,0,1,0,0,1, // @..@...@..@
        1,0,1,1,1,1,1,1,1,0,1, // @.@@@@@@@.@
        1,1,1,0,1,1,1,0,1,1,1, // @@@.@@@.@@@
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
        0,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@.
        0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
        0,1,0,0,0,0,0,0,0,1,0, // .@.......@.
    ],
};

pub static ALIEN_C0: Sprite = Sprite {
    width: 12,
    height: 8,
    data: &[
        0,0,0,0,1,1,1,1,0,0,0,0, // ....@@@@....
        0,1,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@@.
        1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
        1,1,1,0,0,1,1,0,0,1,1,1, // @@@..@@..@@@
        1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
        0,0,0,1,1,0,0,1,1,0,0,0, // ...@@..@@...
        0,0,1,1,0,1,1,0,1,1,0,0, // ..@@.@@.@@..
        1,1,0,0,0,0,0,0,0,0,1,1, // @@........@@
    ],
};

pub static ALIEN_C1: Sprite = Sprite {
    width: 12,
    height: 8,
    data: &[
        0,0,0,0,1,1,1,1,0,0,0,0, // ....@@@@....
        0,1,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@@.
        1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
        1,1,1,0,0,1,1,0,0,1,1,1, // @@@..@@..@@@
        1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
        0,0,1,1,1,0,0,1,1,1,0,0, // ..@@@..@@@..
        0,1,1,0,0,1,1,0,0,1,1,0, // .@@..@@..@@.
        0,0,1,1,0,0,0,0,1,1,0,0, // ..@@....@@..
    ],
};

pub static ALIEN_DEATH: Sprite = Sprite {
    width: 13,
    height: 7,
    data: &[
        0,1,0,0,1,0,0,0,1,0,0,1,0, // .@..@...@..@.
        0,0,1,0,0,1,0,1,0,0,1,0,0, // ..@..@.@..@..
        0,0,0,1,0,0,0,0,0,1,0,0,0, // ...@.....@...
        1,1,0,0,0,0,0,0,0,0,0,1,1, // @@.........@@
        0,0,0,1,0,0,0,0,0,1,0,0,0, // ...@.....@...
        0,0,1,0,0,1,0,1,0,0,1,0,0, // ..@..@.@..@..
        0,1,0,0,1,0,0,0,1,0,0,1,0, // .@..@...@..@.
    ],
};

pub static PLAYER: Sprite = Sprite {
    width: 11,
    height: 7,
    data: &[
        0,0,0,0,0,1,0,0,0,0,0, // .....@.....
        0,0,0,0,1,1,1,0,0,0,0, // ....@@@....
        0,0,0,0,1,1,1,0,0,0,0, // ....@@@....
        0,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@.
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    ],
};

pub static PLAYER_EXPLOSION0: Sprite = Sprite {
    width: 11,
    height: 7,
    data: &[
        0,0,0,0,0,1,0,0,0,0,0, // .....@.....
        0,0,1,0,0,0,0,1,0,0,0, // ..@....@...
        0,0,0,0,1,0,1,0,0,0,0, // ....@.@....
        1,0,0,1,0,1,0,0,1,0,0, // @..@.@..@..
        0,0,1,1,1,1,1,1,0,0,1, // ..@@@@@@..@
        0,1,1,1,1,1,1,1,1,0,0, // .@@@@@@@@..
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    ],
};

pub static PLAYER_EXPLOSION1: Sprite = Sprite {
    width: 11,
    height: 7,
    data: &[
        1,0,0,0,1,0,0,0,0,0,1, // @...@.....@
        0,0,0,0,0,0,1,0,0,0,0, // ......@....
        0,1,0,1,0,0,0,0,1,0,0, // .@.@....@..
        0,0,0,0,0,1,0,1,0,0,1, // .....@.@..@
        1,0,1,0,1,1,1,0,0,1,0, // @.@.@@@..@.
        0,1,1,1,1,1,1,1,1,0,0, // .@@@@@@@@..
        1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    ],
};

pub static BULLET: Sprite = Sprite {
    width: 1,
    height: 3,
    data: &[
        1, // @
        1, // @
        1, // @
    ],
};

pub static ALIEN_A_FRAMES: [&Sprite; 2] = [&ALIEN_A0, &ALIEN_A1];
pub static ALIEN_B_FRAMES: [&Sprite; 2] = [&ALIEN_B0, &ALIEN_B1];
pub static ALIEN_C_FRAMES: [&Sprite; 2] = [&ALIEN_C0, &ALIEN_C1];
pub static PLAYER_EXPLOSION_FRAMES: [&Sprite; 2] = [&PLAYER_EXPLOSION0, &PLAYER_EXPLOSION1];

/// Ticks each alien frame stays on screen.
pub const ALIEN_FRAME_DURATION: usize = 10;
pub const EXPLOSION_FRAME_DURATION: usize = 8;
