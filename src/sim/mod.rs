//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `GameSession::advance`
//! - Seeded RNG only
//! - Stable item order (collision priority follows storage order)
//! - No rendering, audio or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod hook;
pub mod item;
pub mod layout;
pub mod state;
pub mod tick;

pub use clock::{ClockTick, RoundClock};
pub use collision::check_collision;
pub use difficulty::{Difficulty, compute_difficulty};
pub use hook::{Hook, HookMode, HookStep};
pub use item::{Item, ItemKind};
pub use layout::{generate_items, resolve_overlaps};
pub use state::{GameEvent, GamePhase, GameSession, Snapshot};
pub use tick::advance;
