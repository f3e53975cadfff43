//! Easing curves shared by the animated pieces of the page.
//!
//! All functions take a normalized progress `t` and clamp it into `[0, 1]`.

/// Symmetric ease-in-out (smoothstep)
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Decelerating ease-out (cubic)
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Three-keyframe loop `[from, to, from]` with ease-in-out on each half.
///
/// Returns the eased weight of `to`: 0 at the ends, 1 at the midpoint.
pub fn there_and_back(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        ease_in_out(t * 2.0)
    } else {
        1.0 - ease_in_out((t - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_out(7.0), 1.0);
    }

    #[test]
    fn there_and_back_peaks_in_the_middle() {
        assert_eq!(there_and_back(0.0), 0.0);
        assert_eq!(there_and_back(0.5), 1.0);
        assert!(there_and_back(1.0).abs() < f32::EPSILON);
        assert!(there_and_back(0.25) > 0.0 && there_and_back(0.25) < 1.0);
    }
}
