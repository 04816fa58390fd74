// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capability contract shared by the fixed-dimension vector types.
//!
//! [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and [`Vec4`](crate::Vec4)
//! implement [`Vector`] fully at compile time; there is no runtime "not
//! implemented" path. Binary operations only accept an operand of the same
//! dimension, enforced by the type system rather than checked at runtime.

use crate::error::MathError;

/// In-place float32 vector arithmetic with chaining.
///
/// Arithmetic methods mutate `self` and return `&mut Self` so calls compose:
///
/// ```
/// use prism_math::{Vec2, Vector};
/// let mut v = Vec2::new(1.0, 2.0);
/// v.add(&Vec2::new(3.0, 4.0)).multiply_scalar(0.5);
/// assert_eq!(v.to_array(), [2.0, 3.0]);
/// ```
///
/// Values are `Copy`; copying is always a deep value copy, never aliasing.
pub trait Vector: Copy {
    /// Adds `other` component-wise.
    fn add(&mut self, other: &Self) -> &mut Self;

    /// Adds `scalar` to every component.
    fn add_scalar(&mut self, scalar: f32) -> &mut Self;

    /// Subtracts `other` component-wise.
    fn subtract(&mut self, other: &Self) -> &mut Self;

    /// Multiplies component-wise by `other`.
    fn multiply(&mut self, other: &Self) -> &mut Self;

    /// Multiplies every component by `scalar`.
    fn multiply_scalar(&mut self, scalar: f32) -> &mut Self;

    /// Divides component-wise by `other`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when any component of
    /// `other` is exactly zero; `self` is left unmodified in that case.
    fn divide(&mut self, other: &Self) -> Result<&mut Self, MathError>;

    /// Dot product with `other`.
    fn dot(&self, other: &Self) -> f32;

    /// Moves each component toward `target` by the fraction `t`:
    /// `self[i] += t * (target[i] - self[i])`.
    fn lerp(&mut self, target: &Self, t: f32) -> &mut Self;

    /// Truncates each component toward zero via an `i32` round trip.
    ///
    /// This is integer truncation, valid only within the 32-bit integer
    /// range; it is not a general floating floor.
    fn floor(&mut self) -> &mut Self;

    /// Returns `true` when every component is exactly zero.
    fn is_null(&self) -> bool;

    /// Returns the components as a slice.
    fn as_slice(&self) -> &[f32];

    /// Subtracts `scalar` from every component.
    fn subtract_scalar(&mut self, scalar: f32) -> &mut Self {
        self.add_scalar(-scalar)
    }

    /// Divides every component by `scalar`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `scalar` is exactly
    /// zero; otherwise multiplies by the reciprocal.
    fn divide_scalar(&mut self, scalar: f32) -> Result<&mut Self, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.multiply_scalar(1.0 / scalar))
    }

    /// Vector length: `sqrt(dot(self, self))`.
    fn magnitude(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scales the vector to unit length by its reciprocal magnitude.
    ///
    /// A vector whose magnitude is exactly zero becomes the all-zero
    /// vector (subtracting itself); this is not an error.
    fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            let copy = *self;
            return self.subtract(&copy);
        }
        self.multiply_scalar(1.0 / magnitude)
    }

    /// Distance to `other`: the magnitude of `other - self`.
    fn distance_to(&self, other: &Self) -> f32 {
        let mut delta = *other;
        delta.subtract(self);
        delta.magnitude()
    }
}
