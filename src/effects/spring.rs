//! Damped spring integration for pointer-driven motion

use std::ops::{Add, Mul, Sub};
use std::time::Duration;

/// Largest integration step; longer frames are subdivided to stay stable
const MAX_STEP: f32 = 1.0 / 120.0;

/// Distance and speed under which a spring snaps onto its target
const REST_EPSILON: f32 = 0.01;

/// 2D point / vector in cell-space (fractional cells)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Physical parameters of a spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Magnetic hover: snappy with little overshoot
    pub const MAGNETIC: SpringConfig = SpringConfig {
        stiffness: 200.0,
        damping: 20.0,
        mass: 1.0,
    };

    /// Cursor glow: softer follow
    pub const CURSOR: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 25.0,
        mass: 0.8,
    };
}

/// A 2D spring chasing a target point
#[derive(Debug, Clone)]
pub struct Spring2 {
    config: SpringConfig,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
}

impl Spring2 {
    pub fn new(config: SpringConfig) -> Self {
        Self::at(config, Vec2::ZERO)
    }

    /// Spring resting at `position`
    pub fn at(config: SpringConfig, position: Vec2) -> Self {
        Self {
            config,
            position,
            velocity: Vec2::ZERO,
            target: position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).length() < REST_EPSILON
            && self.velocity.length() < REST_EPSILON
    }

    /// Advance the simulation by `dt` (semi-implicit Euler)
    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;

            let displacement = self.position - self.target;
            let force = displacement * -self.config.stiffness - self.velocity * self.config.damping;
            let accel = force * (1.0 / self.config.mass);
            self.velocity = self.velocity + accel * h;
            self.position = self.position + self.velocity * h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_converges_on_target() {
        let mut spring = Spring2::new(SpringConfig::MAGNETIC);
        spring.set_target(Vec2::new(4.0, -2.0));
        for _ in 0..120 {
            spring.step(Duration::from_millis(16));
        }
        assert!(spring.is_settled());
        assert_eq!(spring.position(), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn spring_moves_toward_target_immediately() {
        let mut spring = Spring2::new(SpringConfig::CURSOR);
        spring.set_target(Vec2::new(10.0, 0.0));
        spring.step(Duration::from_millis(16));
        let p = spring.position();
        assert!(p.x > 0.0 && p.x < 10.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = Spring2::at(SpringConfig::MAGNETIC, Vec2::new(1.0, 1.0));
        spring.set_target(Vec2::new(5.0, 5.0));
        spring.step(Duration::ZERO);
        assert_eq!(spring.position(), Vec2::new(1.0, 1.0));
    }
}
