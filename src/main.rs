//! Gold Miner headless runner
//!
//! Plays a session on autopilot at a fixed 60 Hz and logs what happens.
//! Handy for eyeballing balance changes without a renderer.
//!
//! Usage: `gold-miner [seed] [tuning.json]`
//!        `gold-miner --print-tuning > tuning.json` (starter config)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_some_and(|a| a == "--print-tuning") {
        match gold_miner::Tuning::default().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize tuning: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x601D);

    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => gold_miner::Tuning::default(),
    };

    log::info!("Gold Miner (headless) starting");
    let snapshot = autoplay::run(seed, tuning, autoplay::MAX_SECONDS);

    match serde_json::to_string_pretty(&autoplay::Summary::from(&snapshot)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The engine is driven by the host page on the web; nothing to run here
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<gold_miner::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(gold_miner::Tuning::from_json(&json)?)
}

#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use gold_miner::sim::collision::catch_radius;
    use gold_miner::sim::{GameEvent, GamePhase, GameSession, HookMode, ItemKind, Snapshot};
    use gold_miner::{Tuning, swing_direction};
    use serde::Serialize;

    /// Simulation rate of the runner
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Stop after this much simulated time even if the game is still going
    pub const MAX_SECONDS: f32 = 15.0 * 60.0;

    /// Final state printed when the run ends
    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub phase: GamePhase,
        pub level: u32,
        pub score: u32,
        pub target_score: u32,
        pub items_left: usize,
    }

    impl From<&Snapshot> for Summary {
        fn from(s: &Snapshot) -> Self {
            Self {
                phase: s.phase,
                level: s.level,
                score: s.score,
                target_score: s.target_score,
                items_left: s.items.len(),
            }
        }
    }

    /// Play until the clock runs out or `max_seconds` of game time pass
    pub fn run(seed: u64, tuning: Tuning, max_seconds: f32) -> Snapshot {
        let mut session = GameSession::with_tuning(seed, tuning);
        session.start();
        log::info!("Seed {} (rerun with the same seed to replay)", session.seed());

        let max_frames = (max_seconds / FRAME_DT) as u64;
        for _ in 0..max_frames {
            if session.phase() != GamePhase::Playing {
                break;
            }
            if should_fire(&session) {
                session.fire();
            }
            session.advance(FRAME_DT);

            for event in session.drain_events() {
                report(&event);
            }
        }

        session.snapshot()
    }

    /// Fire when the swing lines up with something worth catching
    fn should_fire(session: &GameSession) -> bool {
        if session.hook_mode() != HookMode::Swinging {
            return false;
        }
        let origin = session.hook().origin();
        let dir = swing_direction(session.hook_angle());
        let reach = session.tuning().max_shoot_length;

        // First item along the ray decides; bombs are only worth it with time to spare
        session
            .items()
            .iter()
            .filter_map(|item| {
                let along = (item.pos - origin).dot(dir);
                let off = (item.pos - origin - dir * along).length();
                (along > 0.0 && along < reach && off < catch_radius(item) * 0.8)
                    .then_some((along, item.kind))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .is_some_and(|(_, kind)| kind != ItemKind::Bomb || session.time_left() > 30.0)
    }

    fn report(event: &GameEvent) {
        match event {
            GameEvent::ItemBanked {
                kind,
                score_delta,
                time_delta,
            } => log::info!("{}: +{} points, {:+} s", kind.as_str(), score_delta, time_delta),
            GameEvent::LevelCleared { level, score } => {
                log::info!("Level {} cleared with {} points", level, score)
            }
            GameEvent::LevelUp {
                level,
                target_score,
            } => log::info!("Level {} (target {})", level, target_score),
            GameEvent::LowTimeWarning { seconds_left } => log::info!("{} s left", seconds_left),
            GameEvent::GameOver { score, level } => {
                log::info!("Game over on level {} with {} points", level, score)
            }
            other => log::debug!("{:?}", other),
        }
    }
}
