//! Per-frame orchestration
//!
//! [`Game`] owns one session's [`World`] plus everything that outlives a
//! session (leaderboard store, settings). The platform calls [`Game::frame`]
//! from its animation-frame callback and keeps scheduling only while it
//! returns [`LoopControl::Continue`].

use crate::highscores::{Leaderboard, normalize_initials};
use crate::persistence::KeyValueStore;
use crate::renderer::Surface;
use crate::renderer::scene::{Hud, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, InputState, World, tick};
use crate::tuning::Tuning;
use crate::ui::restart_button;

/// Asks the player for leaderboard initials
///
/// `None` means the player declined.
pub trait InitialsPrompt {
    fn ask(&mut self, message: &str) -> Option<String>;
}

impl<F: FnMut(&str) -> Option<String>> InitialsPrompt for F {
    fn ask(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}

pub const INITIALS_PROMPT: &str = "Congratulations! Enter your initials for the high score table:";

/// Whether the scheduler should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Number of frames averaged for the FPS counter
const FPS_WINDOW: usize = 60;

pub struct Game<K: KeyValueStore> {
    pub world: World,
    pub input: InputState,
    pub settings: Settings,
    store: K,
    /// Loaded on the first ended frame
    leaderboard: Option<Leaderboard>,
    /// Qualification already handled for this session
    high_score_checked: bool,
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl<K: KeyValueStore> Game<K> {
    /// New game; tuning and settings come from the store
    pub fn new(store: K, seed: u64) -> Self {
        let tuning = Tuning::load(&store);
        let settings = Settings::load(&store);
        log::info!("Starting run with seed {}", seed);
        Self {
            world: World::new(tuning, seed),
            input: InputState::new(),
            settings,
            store,
            leaderboard: None,
            high_score_checked: false,
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.leaderboard.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.world.session.is_running()
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Run one frame at `timestamp_ms`
    ///
    /// The first frame of a session has zero elapsed time.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        surface: &mut dyn Surface,
        prompt: &mut dyn InitialsPrompt,
    ) -> LoopControl {
        let dt_ms = self.last_time.map_or(0.0, |last| timestamp_ms - last);
        self.last_time = Some(timestamp_ms);
        self.track_fps(timestamp_ms);

        for event in tick(&mut self.world, &self.input, dt_ms) {
            if let GameEvent::GameOver { score, .. } = event {
                log::info!("Game over with score {}", score);
            }
        }

        if !self.world.session.is_running() {
            self.check_high_score(prompt);
        }

        let hud = Hud {
            leaderboard: self.leaderboard.as_ref(),
            fps: self.settings.show_fps.then_some(self.fps),
            show_hitboxes: self.settings.show_hitboxes,
        };
        draw_frame(surface, &self.world, &hud);

        if self.world.session.is_running() {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }

    /// Offer the final score to the leaderboard, once per session
    fn check_high_score(&mut self, prompt: &mut dyn InitialsPrompt) {
        if self.high_score_checked {
            return;
        }
        self.high_score_checked = true;

        let mut leaderboard = Leaderboard::load(&mut self.store);
        let score = self.world.session.display_score();

        if leaderboard.qualifies(score) {
            let answer = prompt.ask(INITIALS_PROMPT);
            match answer.as_deref().and_then(normalize_initials) {
                Some(initials) => {
                    if let Some(rank) = leaderboard.record(score, &initials) {
                        log::info!("{} placed #{} with {}", initials, rank, score);
                    }
                    leaderboard.save(&mut self.store);
                }
                None => log::info!("High score entry declined"),
            }
        }

        self.leaderboard = Some(leaderboard);
    }

    /// Throw away the session and start a fresh one
    pub fn restart(&mut self, seed: u64) {
        self.world = World::new(self.world.tuning.clone(), seed);
        self.input = InputState::new();
        self.high_score_checked = false;
        self.last_time = None;
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Handle a click at canvas coordinates. Returns true if it restarted.
    ///
    /// The restart button only responds once the run has ended.
    pub fn click(&mut self, x: f32, y: f32, seed: u64) -> bool {
        if self.world.session.is_running() {
            return false;
        }
        if !restart_button(self.world.width()).contains(x, y) {
            return false;
        }
        self.restart(seed);
        true
    }

    pub fn toggle_hitboxes(&mut self) {
        self.settings.toggle_hitboxes();
        self.settings.save(&mut self.store);
    }

    pub fn toggle_fps(&mut self) {
        self.settings.toggle_fps();
        self.settings.save(&mut self.store);
    }

    fn track_fps(&mut self, timestamp_ms: f64) {
        self.frame_times[self.frame_index] = timestamp_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = timestamp_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}
