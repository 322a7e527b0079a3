//! Runtime holder for navigation settings; can be changed while running.

use crate::kernel::services::ports::config::NavigationConfig;
use crate::kernel::services::ports::settings::{default_chord_rules, ChordRule, Settings};

pub struct ConfigService {
    navigation: NavigationConfig,
    chords: Vec<ChordRule>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            chords: default_chord_rules(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            navigation: NavigationConfig::from_settings(&settings.navigation),
            chords: settings.navigation.chords.clone(),
        }
    }

    pub fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    pub fn chords(&self) -> &[ChordRule] {
        &self.chords
    }

    pub fn set_extended_navigation(&mut self, extended: bool) {
        self.navigation.extended = extended;
    }

    /// Returns the new value.
    pub fn toggle_extended_navigation(&mut self) -> bool {
        self.navigation.extended = !self.navigation.extended;
        tracing::info!(extended = self.navigation.extended, "extended navigation toggled");
        self.navigation.extended
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
