//! Cursor trail: a glow that follows the pointer plus fading particles
//!
//! Rendering is a pure function of the recorded samples and the current time;
//! nothing here touches the terminal.

use super::easing::ease_out;
use super::spring::{Spring2, SpringConfig, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Samples kept in the trail (the newest plus eight before it)
pub const TRAIL_LEN: usize = 9;

const PARTICLE_LIFETIME: Duration = Duration::from_secs(1);
const MAX_START_DELAY_SECS: f32 = 0.3;
const START_OPACITY: f32 = 0.8;

#[derive(Debug, Clone)]
struct TrailSample {
    position: Vec2,
    born: Instant,
    delay: Duration,
}

/// One particle as it should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFrame {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct CursorTrail {
    enabled: bool,
    samples: VecDeque<TrailSample>,
    glow: Spring2,
    rng: StdRng,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic jitter for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            enabled: true,
            samples: VecDeque::with_capacity(TRAIL_LEN),
            glow: Spring2::new(SpringConfig::CURSOR),
            rng,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Touch-sized viewports get no trail; disabling drops recorded samples
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.samples.clear();
        }
        self.enabled = enabled;
    }

    pub fn pointer_move(&mut self, position: Vec2, now: Instant) {
        if !self.enabled {
            return;
        }
        self.glow.set_target(position);

        if self.samples.len() == TRAIL_LEN {
            self.samples.pop_front();
        }
        let delay = Duration::from_secs_f32(self.rng.gen_range(0.0..MAX_START_DELAY_SECS));
        self.samples.push_back(TrailSample {
            position,
            born: now,
            delay,
        });
    }

    pub fn step(&mut self, dt: Duration) {
        if self.enabled {
            self.glow.step(dt);
        }
    }

    /// Glow center, or `None` while disabled
    pub fn glow(&self) -> Option<Vec2> {
        self.enabled.then(|| self.glow.position())
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Visible particles at `now`; fully faded ones are skipped
    pub fn frames(&self, now: Instant) -> Vec<TrailFrame> {
        if !self.enabled {
            return Vec::new();
        }
        self.samples
            .iter()
            .filter_map(|sample| {
                let start = sample.born + sample.delay;
                let age = now.saturating_duration_since(start);
                let progress = age.as_secs_f32() / PARTICLE_LIFETIME.as_secs_f32();
                if progress >= 1.0 {
                    return None;
                }
                let fade = ease_out(progress);
                Some(TrailFrame {
                    position: sample.position,
                    scale: 1.0 - fade,
                    opacity: START_OPACITY * (1.0 - fade),
                })
            })
            .collect()
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}
