//! Per-level difficulty curve
//!
//! Item counts grow linearly with the level and are capped per kind. The
//! target score of each level is derived from the score carried over from
//! the previous one.

use serde::{Deserialize, Serialize};

use crate::consts::FIRST_TARGET_SCORE;

/// Extra points every target must demand over the carried score
pub const TARGET_MIN_STEP: u32 = 200;

/// Item counts and target score for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub gold: u32,
    pub diamond: u32,
    pub stone: u32,
    pub bomb: u32,
    pub target_score: u32,
}

impl Difficulty {
    /// Total number of items spawned for this level
    pub fn item_count(&self) -> usize {
        (self.gold + self.diamond + self.stone + self.bomb) as usize
    }
}

/// Difficulty for `level` (1-based), given the score carried into it
pub fn compute_difficulty(level: u32, current_score: u32) -> Difficulty {
    let level = level.max(1);

    let gold = (8 + level).min(16);
    let diamond = (2 + level / 2).min(5);
    let stone = (5 + level).min(12);
    let bomb = (2 + level / 3).min(6);

    Difficulty {
        gold,
        diamond,
        stone,
        bomb,
        target_score: target_score_for(level, current_score),
    }
}

/// Target score for `level`
///
/// Level 1 is fixed. Later levels multiply the carried score by a factor that
/// grows 5% per level, but always ask for at least `TARGET_MIN_STEP` more.
pub fn target_score_for(level: u32, current_score: u32) -> u32 {
    if level <= 1 {
        return FIRST_TARGET_SCORE;
    }

    let base = if current_score == 0 {
        FIRST_TARGET_SCORE
    } else {
        current_score
    };
    let factor = 1.3 + (level - 1) as f64 * 0.05;
    let scaled = (base as f64 * factor).round() as u32;

    scaled.max(base.saturating_add(TARGET_MIN_STEP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_one() {
        let d = compute_difficulty(1, 0);
        assert_eq!(
            d,
            Difficulty {
                gold: 9,
                diamond: 2,
                stone: 6,
                bomb: 2,
                target_score: 500
            }
        );
        assert_eq!(d.item_count(), 19);
        // The carried score is ignored on level 1
        assert_eq!(compute_difficulty(1, 9000).target_score, 500);
    }

    #[test]
    fn test_counts_are_capped() {
        let d = compute_difficulty(40, 0);
        assert_eq!((d.gold, d.diamond, d.stone, d.bomb), (16, 5, 12, 6));
    }

    #[test]
    fn test_integer_division_steps() {
        assert_eq!(compute_difficulty(2, 0).diamond, 3);
        assert_eq!(compute_difficulty(3, 0).diamond, 3);
        assert_eq!(compute_difficulty(2, 0).bomb, 2);
        assert_eq!(compute_difficulty(3, 0).bomb, 3);
    }

    #[test]
    fn test_target_uses_scaled_score() {
        // Level 2: factor 1.35, 1000 * 1.35 = 1350 > 1200
        assert_eq!(target_score_for(2, 1000), 1350);
        // Level 3: factor 1.4, 510 * 1.4 = 714 = 510 + 204
        assert_eq!(target_score_for(3, 510), 714);
    }

    #[test]
    fn test_target_minimum_step() {
        // 500 * 1.35 = 675 falls short of the 200-point step
        assert_eq!(target_score_for(2, 500), 700);
    }

    #[test]
    fn test_zero_score_falls_back() {
        assert_eq!(target_score_for(2, 0), 700);
    }

    proptest! {
        #[test]
        fn prop_target_exceeds_carried_score(level in 2u32..200, score in 1u32..5_000_000) {
            let target = compute_difficulty(level, score).target_score;
            prop_assert!(target > score);
            prop_assert!(target >= score + TARGET_MIN_STEP);
        }

        #[test]
        fn prop_counts_within_caps(level in 1u32..10_000) {
            let d = compute_difficulty(level, 0);
            prop_assert!(d.gold <= 16 && d.diamond <= 5 && d.stone <= 12 && d.bomb <= 6);
            prop_assert!(d.target_score > 0);
        }
    }
}
