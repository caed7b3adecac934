//! Catchable items

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Gold,
    Diamond,
    Stone,
    /// Costs time instead of scoring
    Bomb,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Gold => "gold",
            ItemKind::Diamond => "diamond",
            ItemKind::Stone => "stone",
            ItemKind::Bomb => "bomb",
        }
    }
}

/// An item lying in the mine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Center position
    pub pos: Vec2,
    /// Diameter; the collision radius is half of it
    pub size: f32,
    /// Score delta, or a time delta (seconds) for bombs
    pub value: i32,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2, size: f32, value: i32) -> Self {
        Self { kind, pos, size, value }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Points added to the score when this item reaches the miner
    pub fn score_delta(&self) -> u32 {
        match self.kind {
            ItemKind::Bomb => 0,
            _ => self.value.max(0) as u32,
        }
    }

    /// Seconds added to (or removed from) the clock when this item reaches the miner
    pub fn time_delta(&self, diamond_bonus: f32) -> f32 {
        match self.kind {
            ItemKind::Bomb => self.value as f32,
            ItemKind::Diamond => diamond_bonus,
            _ => 0.0,
        }
    }
}
