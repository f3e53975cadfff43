//! Ambient particle field behind the hero section
//!
//! Particles are generated once at mount. Each frame is a pure function of the
//! elapsed time since mount, so redraws never mutate the field.

use super::easing::there_and_back;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Particle count used by the hero
pub const DEFAULT_PARTICLES: usize = 20;

const MIN_OPACITY: f32 = 0.3;
const MAX_OPACITY: f32 = 0.8;

/// Static parameters of one particle, picked at mount
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Size in the 2..6 range (drives glyph choice)
    pub size: f32,
    /// Horizontal position, percent of the field width
    pub x: f32,
    /// Vertical position, percent of the field height
    pub y: f32,
    pub delay: Duration,
    pub duration: Duration,
    /// Peak vertical drift, percent of the field height
    pub drift: f32,
    /// Peak scale at the middle of the loop
    pub peak_scale: f32,
}

/// One particle as drawn at a given instant; positions are fractions in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            size: rng.gen::<f32>() * 4.0 + 2.0,
            x: rng.gen::<f32>() * 100.0,
            y: rng.gen::<f32>() * 100.0,
            delay: Duration::from_secs_f32(rng.gen::<f32>() * 5.0),
            duration: Duration::from_secs_f32(rng.gen::<f32>() * 10.0 + 10.0),
            drift: rng.gen::<f32>() * 200.0 - 100.0,
            peak_scale: rng.gen::<f32>() * 2.0 + 0.5,
        }
    }

    /// Loop phase at `elapsed`, or `None` while still waiting out the delay
    fn phase(&self, elapsed: Duration) -> Option<f32> {
        let active = elapsed.checked_sub(self.delay)?;
        let period = self.duration.as_secs_f32();
        Some((active.as_secs_f32() % period) / period)
    }

    pub fn frame(&self, elapsed: Duration) -> ParticleFrame {
        let weight = self.phase(elapsed).map(there_and_back).unwrap_or(0.0);
        let y = (self.y + self.drift * weight) / 100.0;
        ParticleFrame {
            x: self.x / 100.0,
            y: y.clamp(0.0, 1.0),
            size: self.size,
            scale: 1.0 + (self.peak_scale - 1.0) * weight,
            opacity: MIN_OPACITY + (MAX_OPACITY - MIN_OPACITY) * weight,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Unmounted field; renders nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
        }
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::generate(count, &mut StdRng::seed_from_u64(seed))
    }

    pub fn is_mounted(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame(&self, elapsed: Duration) -> Vec<ParticleFrame> {
        self.particles.iter().map(|p| p.frame(elapsed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_renders_nothing() {
        let field = ParticleField::empty();
        assert!(!field.is_mounted());
        assert!(field.frame(Duration::from_secs(3)).is_empty());
    }

    #[test]
    fn generated_parameters_stay_in_range() {
        let field = ParticleField::seeded(DEFAULT_PARTICLES, 42);
        assert_eq!(field.particles().len(), DEFAULT_PARTICLES);
        for p in field.particles() {
            assert!((2.0..=6.0).contains(&p.size));
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
            assert!(p.delay <= Duration::from_secs(5));
            assert!(p.duration >= Duration::from_secs(10));
            assert!(p.duration <= Duration::from_secs(20));
            assert!((-100.0..=100.0).contains(&p.drift));
            assert!((0.5..=2.5).contains(&p.peak_scale));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::seeded(5, 7);
        let b = ParticleField::seeded(5, 7);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn particle_rests_until_delay_passes() {
        let particle = Particle {
            size: 3.0,
            x: 50.0,
            y: 40.0,
            delay: Duration::from_secs(2),
            duration: Duration::from_secs(10),
            drift: 20.0,
            peak_scale: 2.0,
        };
        let waiting = particle.frame(Duration::from_secs(1));
        assert_eq!(waiting.y, 0.4);
        assert_eq!(waiting.scale, 1.0);
        assert_eq!(waiting.opacity, MIN_OPACITY);

        // midpoint of the loop: full drift and peak scale
        let mid = particle.frame(Duration::from_secs(7));
        assert!((mid.y - 0.6).abs() < 1e-4);
        assert!((mid.scale - 2.0).abs() < 1e-4);
        assert!((mid.opacity - MAX_OPACITY).abs() < 1e-4);
    }
}
