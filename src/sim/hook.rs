//! Hook motion
//!
//! The hook cycles swinging → shooting → returning → swinging. While swinging
//! it hangs from the miner as a sine pendulum; once fired it travels in a
//! straight line along the direction it was pointing, then reels back at
//! double speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::item::{Item, ItemKind};
use crate::consts::RETURN_SNAP_DISTANCE;
use crate::tuning::Tuning;
use crate::{in_bounds, swing_direction};

/// Motion state of the hook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HookMode {
    /// Pendulum swing, waiting for fire
    Swinging,
    /// Flying outward along a fixed unit direction
    Shooting { direction: Vec2 },
    /// Reeling back toward the origin
    Returning,
}

impl HookMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookMode::Swinging => "swinging",
            HookMode::Shooting { .. } => "shooting",
            HookMode::Returning => "returning",
        }
    }
}

/// What happened to the hook during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookStep {
    /// Item grabbed this step, with the tip position at the moment of capture
    pub captured: Option<(ItemKind, Vec2)>,
    /// Item hauled all the way back to the origin this step
    pub delivered: Option<Item>,
}

/// The miner's hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    pub mode: HookMode,
    /// Angle from vertical (radians, positive swings toward +x)
    pub angle: f32,
    /// Tip position
    pub pos: Vec2,
    /// Pendulum clock; only runs while swinging
    pub swing_time: f32,
    /// Item being hauled back
    pub caught: Option<Item>,
    origin: Vec2,
}

impl Hook {
    /// A hook hanging straight down at `origin`
    pub fn new(origin: Vec2) -> Self {
        Self {
            mode: HookMode::Swinging,
            angle: 0.0,
            pos: origin,
            swing_time: 0.0,
            caught: None,
            origin,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Distance of the tip from the origin
    pub fn extension(&self) -> f32 {
        self.pos.distance(self.origin)
    }

    pub fn is_swinging(&self) -> bool {
        self.mode == HookMode::Swinging
    }

    /// Launch along the current swing direction
    ///
    /// Returns false (and does nothing) unless the hook is swinging.
    pub fn fire(&mut self) -> bool {
        if !self.is_swinging() {
            return false;
        }
        self.mode = HookMode::Shooting {
            direction: swing_direction(self.angle),
        };
        true
    }

    /// Advance the hook by `dt` seconds
    ///
    /// While shooting, the tip is tested against `items`; a caught item is
    /// moved out of `items` into `caught`.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning, items: &mut Vec<Item>) -> HookStep {
        let dt = dt.max(0.0);
        let mut step = HookStep::default();

        match self.mode {
            HookMode::Swinging => {
                self.swing_time += dt;
                let omega = std::f32::consts::TAU * tuning.swing_frequency;
                self.angle = tuning.max_swing_angle() * (omega * self.swing_time).sin();
                self.pos = self.origin + swing_direction(self.angle) * tuning.hook_length;
            }

            HookMode::Shooting { direction } => {
                self.pos += direction * tuning.hook_speed * dt;

                if self.extension() >= tuning.max_shoot_length {
                    self.pos = self.origin + direction * tuning.max_shoot_length;
                    self.mode = HookMode::Returning;
                }

                if let Some(item) = check_collision(self.pos, items) {
                    log::debug!("Hooked {} at ({:.0}, {:.0})", item.kind.as_str(), self.pos.x, self.pos.y);
                    step.captured = Some((item.kind, self.pos));
                    self.caught = Some(item);
                    self.mode = HookMode::Returning;
                }

                let bounds = tuning.bounds();
                if !in_bounds(self.pos, bounds) {
                    self.pos = self.pos.clamp(Vec2::ZERO, bounds);
                    self.mode = HookMode::Returning;
                }
            }

            HookMode::Returning => {
                let to_origin = self.origin - self.pos;
                let dist = to_origin.length();

                if dist < RETURN_SNAP_DISTANCE {
                    self.pos = self.origin;
                    self.mode = HookMode::Swinging;
                    step.delivered = self.caught.take();
                } else {
                    // Never overshoot the origin
                    let travel = (tuning.hook_speed * 2.0 * dt).min(dist);
                    self.pos += to_origin / dist * travel;
                }
            }
        }

        step
    }
}
