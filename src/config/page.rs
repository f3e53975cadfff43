//! Page behavior: typing animation and interaction effects

use crate::effects::magnetic::DEFAULT_STRENGTH;
use crate::typing::TypingTiming;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Typing
// ─────────────────────────────────────────────────────────────────────────────

/// Hero headline timing
#[derive(Debug, Clone, PartialEq)]
pub struct TypingConfig {
    /// Milliseconds per typed character (deleting runs at half this)
    pub speed_ms: u64,
    /// Milliseconds a finished phrase stays on screen
    pub delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        let hero = TypingTiming::HERO;
        Self {
            speed_ms: hero.speed.as_millis() as u64,
            delay_ms: hero.delay.as_millis() as u64,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTyping {
    pub speed_ms: Option<u64>,
    pub delay_ms: Option<u64>,
}

impl TypingConfig {
    pub fn from_file(file: Option<FileTyping>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            // Zero speed would spin the driver
            speed_ms: file.speed_ms.unwrap_or(defaults.speed_ms).max(1),
            delay_ms: file.delay_ms.unwrap_or(defaults.delay_ms),
        }
    }

    pub fn timing(&self) -> TypingTiming {
        TypingTiming::new(
            Duration::from_millis(self.speed_ms),
            Duration::from_millis(self.delay_ms),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Effects
// ─────────────────────────────────────────────────────────────────────────────

/// Hero buttons pull harder than generic elements
const HERO_MAGNETIC_STRENGTH: f32 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct EffectsConfig {
    /// Pull strength for the hero buttons
    pub magnetic_strength: f32,
    /// Pull strength for everything else that reacts to the pointer
    pub element_strength: f32,
    /// Cursor glow and trail (always off on compact terminals)
    pub cursor_trail: bool,
    /// Ambient particles behind the hero
    pub particles: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            magnetic_strength: HERO_MAGNETIC_STRENGTH,
            element_strength: DEFAULT_STRENGTH,
            cursor_trail: true,
            particles: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileEffects {
    pub magnetic_strength: Option<f32>,
    pub element_strength: Option<f32>,
    pub cursor_trail: Option<bool>,
    pub particles: Option<bool>,
}

impl EffectsConfig {
    pub fn from_file(file: Option<FileEffects>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            magnetic_strength: file.magnetic_strength.unwrap_or(defaults.magnetic_strength),
            element_strength: file.element_strength.unwrap_or(defaults.element_strength),
            cursor_trail: file.cursor_trail.unwrap_or(defaults.cursor_trail),
            particles: file.particles.unwrap_or(defaults.particles),
        }
    }
}
