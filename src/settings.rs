//! Player preferences
//!
//! Persisted separately from the leaderboard.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, load_json, save_json};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Outline the collision circles of the actor and obstacles
    pub show_hitboxes: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "endless_runner_settings";

    pub fn toggle_hitboxes(&mut self) {
        self.show_hitboxes = !self.show_hitboxes;
        log::info!("Hitboxes: {}", self.show_hitboxes);
    }

    pub fn toggle_fps(&mut self) {
        self.show_fps = !self.show_fps;
        log::info!("FPS counter: {}", self.show_fps);
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json(store, Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        save_json(store, Self::STORAGE_KEY, self);
        log::info!("Settings saved");
    }
}
