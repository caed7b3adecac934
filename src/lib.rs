//! Gold Miner - a swinging-hook arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hook motion, collisions, round clock, session)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and input live outside this crate. A presentation layer
//! drives a [`sim::GameSession`] with `advance`/`fire` calls and reacts to the
//! events it drains from it.

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, GameSession, Snapshot};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Miner sits centered horizontally, this far below the top edge
    pub const MINER_Y: f32 = 50.0;

    /// Hook defaults
    pub const HOOK_LENGTH: f32 = 40.0;
    pub const MAX_SWING_DEGREES: f32 = 75.0;
    /// Pendulum frequency (Hz)
    pub const SWING_FREQUENCY: f32 = 0.8;
    /// Shooting speed (units/s); returning runs at twice this
    pub const HOOK_SPEED: f32 = 300.0;
    pub const MAX_SHOOT_LENGTH: f32 = 450.0;
    /// Distance below which a returning hook snaps to the origin
    pub const RETURN_SNAP_DISTANCE: f32 = 2.0;
    /// Extra reach of the hook tip added to an item's radius
    pub const HOOK_TIP_BUFFER: f32 = 8.0;

    /// Round defaults
    pub const ROUND_SECONDS: f32 = 60.0;
    pub const FIRST_TARGET_SCORE: u32 = 500;
    pub const LEVEL_UP_DELAY: f32 = 1.0;
    pub const DIAMOND_TIME_BONUS: f32 = 5.0;
    pub const LOW_TIME_THRESHOLD: f32 = 10.0;

    /// Largest frame delta the engine will integrate in one call
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Items never spawn closer than this to the top edge
    pub const ITEM_SPAWN_TOP: f32 = 100.0;
    /// Items never spawn closer than this to the bottom edge
    pub const ITEM_SPAWN_BOTTOM: f32 = 100.0;
    /// Minimum gap kept between item edges by overlap resolution
    pub const ITEM_GAP: f32 = 10.0;
    /// Reclamp margins applied to an item pushed by overlap resolution
    pub const ITEM_CLAMP_SIDE: f32 = 10.0;
    pub const ITEM_CLAMP_TOP: f32 = 80.0;
}

/// Clamp to [0, 1]
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Unit direction of a hook hanging at `angle` radians from vertical (y grows downward)
#[inline]
pub fn swing_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

/// Whether a point lies inside the `[0, w] x [0, h]` rectangle
#[inline]
pub fn in_bounds(pos: Vec2, bounds: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= bounds.x && pos.y >= 0.0 && pos.y <= bounds.y
}
