//! Procedural item layout
//!
//! Places a level's items uniformly at random below the miner, then nudges
//! overlapping items apart in a single pass.

use glam::Vec2;
use rand::Rng;

use super::difficulty::compute_difficulty;
use super::item::{Item, ItemKind};
use crate::clamp01;
use crate::consts::*;

/// Gold size range; value scales linearly across it
pub const GOLD_MIN_SIZE: f32 = 15.0;
pub const GOLD_MAX_SIZE: f32 = 35.0;
pub const GOLD_MIN_VALUE: f32 = 50.0;
pub const GOLD_VALUE_SPAN: f32 = 150.0;

pub const DIAMOND_SIZE: f32 = 20.0;
pub const DIAMOND_BASE_VALUE: i32 = 300;
pub const DIAMOND_VALUE_PER_LEVEL: i32 = 50;

pub const STONE_MIN_SIZE: f32 = 10.0;
pub const STONE_MAX_SIZE: f32 = 20.0;
pub const STONE_MIN_VALUE: i32 = 10;
pub const STONE_MAX_VALUE: i32 = 20;

pub const BOMB_SIZE: f32 = 25.0;
/// Seconds a bomb takes off the clock
pub const BOMB_TIME_PENALTY: i32 = -10;

/// Value of a gold nugget of the given size
pub fn gold_value(size: f32) -> i32 {
    let t = clamp01((size - GOLD_MIN_SIZE) / (GOLD_MAX_SIZE - GOLD_MIN_SIZE));
    (GOLD_MIN_VALUE + GOLD_VALUE_SPAN * t).round() as i32
}

/// Value of a diamond on the given level
pub fn diamond_value(level: u32) -> i32 {
    DIAMOND_BASE_VALUE + (level.max(1) - 1) as i32 * DIAMOND_VALUE_PER_LEVEL
}

/// Generate the items for `level` inside a `bounds`-sized canvas
///
/// Items are stored gold first, then diamonds, stones and bombs. That order
/// matters: collision picks the first item in storage order.
pub fn generate_items<R: Rng + ?Sized>(level: u32, bounds: Vec2, rng: &mut R) -> Vec<Item> {
    let difficulty = compute_difficulty(level, 0);
    let mut items = Vec::with_capacity(difficulty.item_count());

    for _ in 0..difficulty.gold {
        let size = GOLD_MIN_SIZE + rng.random::<f32>() * (GOLD_MAX_SIZE - GOLD_MIN_SIZE);
        let pos = spawn_point(rng, bounds, 30.0);
        items.push(Item::new(ItemKind::Gold, pos, size, gold_value(size)));
    }

    for _ in 0..difficulty.diamond {
        let pos = spawn_point(rng, bounds, 20.0);
        items.push(Item::new(ItemKind::Diamond, pos, DIAMOND_SIZE, diamond_value(level)));
    }

    for _ in 0..difficulty.stone {
        let pos = spawn_point(rng, bounds, 15.0);
        let size = STONE_MIN_SIZE + rng.random::<f32>() * (STONE_MAX_SIZE - STONE_MIN_SIZE);
        let value = rng.random_range(STONE_MIN_VALUE..=STONE_MAX_VALUE);
        items.push(Item::new(ItemKind::Stone, pos, size, value));
    }

    for _ in 0..difficulty.bomb {
        let pos = spawn_point(rng, bounds, 15.0);
        items.push(Item::new(ItemKind::Bomb, pos, BOMB_SIZE, BOMB_TIME_PENALTY));
    }

    resolve_overlaps(&mut items, bounds);

    log::debug!(
        "Level {}: generated {} items ({} still overlapping)",
        level,
        items.len(),
        count_overlaps(&items)
    );

    items
}

/// Uniform point with `side` margin left and right, below the spawn top
fn spawn_point<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, side: f32) -> Vec2 {
    let x_span = (bounds.x - 2.0 * side).max(0.0);
    let y_span = (bounds.y - ITEM_SPAWN_TOP - ITEM_SPAWN_BOTTOM).max(0.0);
    let x = rng.random::<f32>() * x_span + side;
    let y = rng.random::<f32>() * y_span + ITEM_SPAWN_TOP;
    Vec2::new(x, y)
}

/// Minimum center distance two items must keep
#[inline]
fn min_separation(a: &Item, b: &Item) -> f32 {
    (a.size + b.size) / 2.0 + ITEM_GAP
}

/// Push later items away from earlier ones they overlap
///
/// One pass over every pair `i < j`: item `j` moves away from item `i` by the
/// missing distance and is clamped back into the canvas. A later push can
/// create a new overlap with an earlier item; those are left alone.
pub fn resolve_overlaps(items: &mut [Item], bounds: Vec2) {
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let anchor = items[i].pos;
            let min_dist = min_separation(&items[i], &items[j]);

            let item = &mut items[j];
            let offset = item.pos - anchor;
            let dist = offset.length();
            if dist >= min_dist {
                continue;
            }

            // Coincident centers push along +x
            let dir = offset.normalize_or(Vec2::X);
            item.pos += dir * (min_dist - dist);
            item.pos = clamp_item(item.pos, item.radius(), bounds);
        }
    }
}

/// Keep an item of radius `r` inside the canvas and below the clamp top
///
/// Uses min-then-max so a canvas too small for the item never panics.
fn clamp_item(pos: Vec2, r: f32, bounds: Vec2) -> Vec2 {
    let x = pos
        .x
        .min(bounds.x - r - ITEM_CLAMP_SIDE)
        .max(r + ITEM_CLAMP_SIDE);
    let y = pos
        .y
        .min(bounds.y - r - ITEM_CLAMP_SIDE)
        .max(r + ITEM_CLAMP_TOP);
    Vec2::new(x, y)
}

/// Number of item pairs closer than their minimum separation
pub fn count_overlaps(items: &[Item]) -> usize {
    let mut count = 0;
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i].pos.distance(items[j].pos) < min_separation(&items[i], &items[j]) {
                count += 1;
            }
        }
    }
    count
}
