//! Game session state and control surface
//!
//! A [`GameSession`] owns everything that changes during play: the hook, the
//! items still in the mine, the round clock and the score. The presentation
//! layer only reads it (accessors or [`Snapshot`]) and reacts to the
//! [`GameEvent`]s it drains after each frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::difficulty::compute_difficulty;
use super::hook::{Hook, HookMode};
use super::item::{Item, ItemKind};
use super::layout::generate_items;
use super::tick;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start; nothing advances
    Idle,
    /// Active gameplay
    Playing,
    /// Frozen, resumes into Playing
    Paused,
    /// Clock ran out; terminal until restart
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Something the presentation layer may want to play a sound or effect for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hook launched
    HookFired { angle: f32 },
    /// Hook tip grabbed an item
    ItemCaptured { kind: ItemKind, pos: Vec2 },
    /// A caught item reached the miner and its effect was applied
    ItemBanked {
        kind: ItemKind,
        score_delta: u32,
        time_delta: f32,
    },
    /// Target reached; a level-up follows after the transition delay
    LevelCleared { level: u32, score: u32 },
    /// New level started
    LevelUp { level: u32, target_score: u32 },
    /// A whole second ticked away inside the low-time window
    LowTimeWarning { seconds_left: u32 },
    /// Clock ran out
    GameOver { score: u32, level: u32 },
}

/// Read-only view of a session for rendering and HUD text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub target_score: u32,
    pub time_left: f32,
    pub display_time: u32,
    pub low_time: bool,
    pub level_up_pending: bool,
    pub hook_mode: HookMode,
    pub hook_origin: Vec2,
    pub hook_pos: Vec2,
    pub hook_angle: f32,
    pub caught: Option<Item>,
    pub items: Vec<Item>,
}

/// One game from construction until it is dropped
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) tuning: Tuning,
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    /// 1-based
    pub(crate) level: u32,
    pub(crate) score: u32,
    pub(crate) target_score: u32,
    pub(crate) clock: RoundClock,
    pub(crate) hook: Hook,
    /// Items still in the mine, in catch-priority order
    pub(crate) items: Vec<Item>,
    /// Seconds until a scheduled level-up
    pub(crate) level_up_timer: Option<f32>,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create an idle session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create an idle session; the mine stays empty until `start`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Idle,
            level: 1,
            score: 0,
            target_score: compute_difficulty(1, 0).target_score,
            clock: RoundClock::new(tuning.round_seconds, tuning.low_time_threshold),
            hook: Hook::new(tuning.hook_origin()),
            items: Vec::new(),
            level_up_timer: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// Begin (or continue) play
    ///
    /// Idle sessions fill an empty mine first; paused sessions resume; a
    /// finished session is restarted and then started.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Playing => {}
            GamePhase::Paused => {
                self.resume();
            }
            GamePhase::GameOver | GamePhase::Idle => {
                if self.phase == GamePhase::GameOver {
                    self.restart();
                }
                if self.items.is_empty() {
                    self.items = generate_items(self.level, self.tuning.bounds(), &mut self.rng);
                }
                self.phase = GamePhase::Playing;
                log::info!("Level {} started (target {})", self.level, self.target_score);
            }
        }
    }

    /// Advance the session by `dt` seconds; does nothing unless playing
    pub fn advance(&mut self, dt: f32) {
        tick::advance(self, dt);
    }

    /// Launch the hook; ignored unless playing with the hook swinging
    pub fn fire(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.hook.fire() {
            return false;
        }
        self.events.push(GameEvent::HookFired {
            angle: self.hook.angle,
        });
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::Paused;
        log::debug!("Paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::debug!("Resumed");
        true
    }

    /// Pause when playing, resume when paused, otherwise nothing
    pub fn toggle_pause(&mut self) {
        if !self.pause() {
            self.resume();
        }
    }

    /// Throw away the current run and set up a fresh level 1 in Idle
    pub fn restart(&mut self) {
        log::info!(
            "Restarting (was level {}, score {}, {})",
            self.level,
            self.score,
            self.phase.as_str()
        );
        self.level = 1;
        self.score = 0;
        self.target_score = compute_difficulty(1, 0).target_score;
        self.clock.reset(self.tuning.round_seconds);
        self.hook = Hook::new(self.tuning.hook_origin());
        self.items = generate_items(1, self.tuning.bounds(), &mut self.rng);
        self.level_up_timer = None;
        self.phase = GamePhase::Idle;
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Read-only accessors ===

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn time_left(&self) -> f32 {
        self.clock.time_left()
    }

    /// Seconds shown on the HUD (rounded up)
    pub fn display_time(&self) -> u32 {
        self.clock.display_seconds()
    }

    pub fn is_low_time(&self) -> bool {
        self.clock.is_low()
    }

    pub fn level_up_pending(&self) -> bool {
        self.level_up_timer.is_some()
    }

    pub fn hook(&self) -> &Hook {
        &self.hook
    }

    pub fn hook_mode(&self) -> HookMode {
        self.hook.mode
    }

    pub fn hook_position(&self) -> Vec2 {
        self.hook.pos
    }

    pub fn hook_angle(&self) -> f32 {
        self.hook.angle
    }

    pub fn caught_item(&self) -> Option<&Item> {
        self.hook.caught.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            level: self.level,
            score: self.score,
            target_score: self.target_score,
            time_left: self.clock.time_left(),
            display_time: self.clock.display_seconds(),
            low_time: self.clock.is_low(),
            level_up_pending: self.level_up_pending(),
            hook_mode: self.hook.mode,
            hook_origin: self.hook.origin(),
            hook_pos: self.hook.pos,
            hook_angle: self.hook.angle,
            caught: self.hook.caught.clone(),
            items: self.items.clone(),
        }
    }
}
