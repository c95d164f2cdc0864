//! Easing curves applied to linear time progress.

use core::f32::consts::PI;

/// Sine-shaped ease-in/ease-out of a linear progress value.
///
/// Input is clamped to [0, 1]; the ends map exactly to 0 and 1 so callers can
/// compare the eased value against `1.0` to detect completion.
pub fn sin_bezier(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    ((PI * (t - 0.5)).sin() + 1.0) * 0.5
}
