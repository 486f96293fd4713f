//! Interpolation for style vectors.
//!
//! The `Interpolate` trait is the mechanism that produces intermediate
//! styles while a reveal is in flight. Each component of a `StyleVector`
//! is interpolated independently.

use super::types::StyleVector;

/// Trait for types that can be interpolated between two values.
///
/// # Arguments
/// * `to` - Target value to interpolate towards
/// * `t` - Interpolation factor (0.0 = self, 1.0 = to)
///
/// # Returns
/// Interpolated value between self and to at factor t.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value.
    ///
    /// When t = 0.0, returns self.
    /// When t = 1.0, returns to.
    /// Values between 0.0 and 1.0 return intermediate values.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

/// Linear interpolation helper for f32 values.
#[inline]
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Interpolate for StyleVector {
    /// Interpolate style vectors component-wise.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_f32(self.opacity, to.opacity, t),
            translate_x: lerp_f32(self.translate_x, to.translate_x, t),
            translate_y: lerp_f32(self.translate_y, to.translate_y, t),
            scale: lerp_f32(self.scale, to.scale, t),
        }
    }
}
