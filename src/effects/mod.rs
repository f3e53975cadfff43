//! Pointer-driven and ambient motion for the page
//!
//! Every effect here is pure state: input events and elapsed time go in,
//! offsets and frames come out. The TUI decides how to draw them.

pub mod cursor;
pub mod easing;
pub mod magnetic;
pub mod particles;
pub mod spring;

pub use cursor::{CursorTrail, TrailFrame};
pub use magnetic::{Bounds, MagneticHover};
pub use particles::{ParticleField, ParticleFrame};
pub use spring::Vec2;
