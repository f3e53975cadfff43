//! Magnetic hover: elements lean toward the pointer while it is over them

use super::spring::{Spring2, SpringConfig, Vec2};
use std::time::Duration;

/// Default pull strength for generic elements
pub const DEFAULT_STRENGTH: f32 = 0.2;

/// Axis-aligned bounds of a tracked element, in cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// `(pointer - center) * strength`
pub fn magnetic_offset(pointer: Vec2, bounds: Bounds, strength: f32) -> Vec2 {
    (pointer - bounds.center()) * strength
}

/// Per-element hover state; lives only as long as the gesture matters
#[derive(Debug, Clone)]
pub struct MagneticHover {
    strength: f32,
    spring: Spring2,
    hovering: bool,
}

impl MagneticHover {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            spring: Spring2::new(SpringConfig::MAGNETIC),
            hovering: false,
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Pointer moved while over the element
    pub fn pointer_move(&mut self, pointer: Vec2, bounds: Bounds) {
        self.hovering = true;
        self.spring
            .set_target(magnetic_offset(pointer, bounds, self.strength));
    }

    /// Pointer left: spring back home
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.spring.set_target(Vec2::ZERO);
    }

    /// Feed any pointer position; routes to move/leave based on the bounds
    pub fn track(&mut self, pointer: Vec2, bounds: Bounds) {
        if bounds.contains(pointer) {
            self.pointer_move(pointer, bounds);
        } else if self.hovering {
            self.pointer_leave();
        }
    }

    pub fn step(&mut self, dt: Duration) {
        self.spring.step(dt);
    }

    /// Current rendered offset
    pub fn offset(&self) -> Vec2 {
        self.spring.position()
    }

    /// Offset the spring is heading for
    pub fn target(&self) -> Vec2 {
        self.spring.target()
    }
}

impl Default for MagneticHover {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH)
    }
}
