//! Hook tip vs item collision
//!
//! The hook tip is treated as a point with a fixed buffer added to each
//! item's radius. Items are scanned in storage order and the first hit wins,
//! regardless of which overlapping item is nearer or worth more.

use glam::Vec2;

use super::item::Item;
use crate::consts::HOOK_TIP_BUFFER;

/// Reach at which the hook tip grabs an item
#[inline]
pub fn catch_radius(item: &Item) -> f32 {
    item.radius() + HOOK_TIP_BUFFER
}

/// Whether the hook tip at `hook_pos` touches `item`
#[inline]
pub fn hook_touches(hook_pos: Vec2, item: &Item) -> bool {
    hook_pos.distance(item.pos) < catch_radius(item)
}

/// Check the hook tip against every item
///
/// On a hit the item is removed from `items` (remaining order preserved) and
/// returned. At most one item is taken per call.
pub fn check_collision(hook_pos: Vec2, items: &mut Vec<Item>) -> Option<Item> {
    let index = items.iter().position(|item| hook_touches(hook_pos, item))?;
    Some(items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::ItemKind;

    fn stone(x: f32, y: f32) -> Item {
        Item::new(ItemKind::Stone, Vec2::new(x, y), 20.0, 15)
    }

    #[test]
    fn test_miss_leaves_items_untouched() {
        let mut items = vec![stone(100.0, 100.0), stone(300.0, 300.0)];
        let before = items.clone();
        assert!(check_collision(Vec2::new(200.0, 200.0), &mut items).is_none());
        assert_eq!(items, before);
    }

    #[test]
    fn test_catch_radius_includes_tip_buffer() {
        let item = stone(100.0, 100.0);
        // radius 10 + buffer 8
        assert_eq!(catch_radius(&item), 18.0);
        assert!(hook_touches(Vec2::new(117.9, 100.0), &item));
        assert!(!hook_touches(Vec2::new(118.0, 100.0), &item));
    }

    #[test]
    fn test_hit_removes_item() {
        let mut items = vec![stone(100.0, 100.0), stone(300.0, 300.0), stone(500.0, 100.0)];
        let caught = check_collision(Vec2::new(305.0, 300.0), &mut items).unwrap();
        assert_eq!(caught.pos, Vec2::new(300.0, 300.0));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(items[1].pos, Vec2::new(500.0, 100.0));
    }

    #[test]
    fn test_first_in_storage_order_wins() {
        // Hook is nearer the second item, but the first one is in reach too
        let far = Item::new(ItemKind::Bomb, Vec2::new(100.0, 100.0), 25.0, -10);
        let near = Item::new(ItemKind::Gold, Vec2::new(115.0, 100.0), 35.0, 200);
        let mut items = vec![far, near];

        let caught = check_collision(Vec2::new(114.0, 100.0), &mut items).unwrap();
        assert_eq!(caught.kind, ItemKind::Bomb);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::Gold);
    }
}
