//! Per-frame session update
//!
//! Order within one call: hook motion and collision, scoring of a delivered
//! catch, pending level-up, round clock. Every stage sees the same frame
//! delta, so a level-up always starts from the final score and a full clock.

use super::difficulty::compute_difficulty;
use super::hook::Hook;
use super::item::Item;
use super::layout::generate_items;
use super::state::{GameEvent, GamePhase, GameSession};

/// Advance a playing session by `dt` seconds
///
/// Zero, negative and non-finite deltas are ignored. Spikes (e.g. after the
/// host tab was backgrounded) are capped at `Tuning::max_frame_dt`.
pub fn advance(state: &mut GameSession, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = clamp_frame_dt(dt, state.tuning.max_frame_dt);
    if dt <= 0.0 {
        return;
    }

    // Hook motion and collision
    let step = state.hook.advance(dt, &state.tuning, &mut state.items);
    if let Some((kind, pos)) = step.captured {
        state.events.push(GameEvent::ItemCaptured { kind, pos });
    }

    // Scoring happens when the catch reaches the miner
    if let Some(item) = step.delivered {
        bank_item(state, &item);
    }

    // Pending level-up
    if let Some(timer) = state.level_up_timer.as_mut() {
        *timer -= dt;
        if *timer <= 0.0 {
            state.level_up_timer = None;
            level_up(state);
        }
    }

    let tick = state.clock.tick(dt);
    if let Some(seconds_left) = tick.warning {
        state.events.push(GameEvent::LowTimeWarning { seconds_left });
    }
    if tick.expired {
        game_over(state);
    }
}

fn clamp_frame_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if dt > max_dt {
        log::trace!("Frame delta {:.3}s capped to {:.3}s", dt, max_dt);
        return max_dt;
    }
    dt
}

/// Apply a delivered item's score/time effect and check the level target
fn bank_item(state: &mut GameSession, item: &Item) {
    let score_delta = item.score_delta();
    let time_delta = item.time_delta(state.tuning.diamond_time_bonus);

    state.score = state.score.saturating_add(score_delta);
    if time_delta != 0.0 {
        state.clock.add_time(time_delta);
    }

    log::debug!(
        "Banked {}: +{} points, {:+} s (score {}/{}, {:.0} s left)",
        item.kind.as_str(),
        score_delta,
        time_delta,
        state.score,
        state.target_score,
        state.clock.time_left()
    );
    state.events.push(GameEvent::ItemBanked {
        kind: item.kind,
        score_delta,
        time_delta,
    });

    if state.score >= state.target_score && state.level_up_timer.is_none() {
        state.level_up_timer = Some(state.tuning.level_up_delay);
        state.events.push(GameEvent::LevelCleared {
            level: state.level,
            score: state.score,
        });
    }
}

/// Move to the next level: new target, full clock, fresh mine and hook
fn level_up(state: &mut GameSession) {
    state.level += 1;

    let difficulty = compute_difficulty(state.level, state.score);
    state.target_score = difficulty.target_score;
    state.clock.reset(state.tuning.round_seconds);
    state.items = generate_items(state.level, state.tuning.bounds(), &mut state.rng);
    state.hook = Hook::new(state.tuning.hook_origin());

    log::info!(
        "Level {}: target {}, {} items",
        state.level,
        state.target_score,
        state.items.len()
    );
    state.events.push(GameEvent::LevelUp {
        level: state.level,
        target_score: state.target_score,
    });
}

fn game_over(state: &mut GameSession) {
    state.phase = GamePhase::GameOver;
    state.level_up_timer = None;

    log::info!("Game over: level {}, score {}", state.level, state.score);
    state.events.push(GameEvent::GameOver {
        score: state.score,
        level: state.level,
    });
}
