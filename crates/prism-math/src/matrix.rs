// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capability contract shared by the square matrix types.
//!
//! [`Mat3`](crate::Mat3) and [`Mat4`](crate::Mat4) implement [`Matrix`]
//! fully at compile time. Both store column-major `f32` data: each
//! contiguous block of 3 or 4 floats is one basis column. Every multiply and
//! invert index formula, and the flat GPU buffer export, depend on that
//! layout.

/// In-place column-major matrix algebra with chaining.
pub trait Matrix: Copy {
    /// The vector dimension this matrix translates and scales.
    type Vector;

    /// Returns the identity matrix.
    fn identity() -> Self;

    /// Builds a translation matrix.
    fn translation(vector: &Self::Vector) -> Self;

    /// Builds a non-uniform scale matrix.
    fn scale(vector: &Self::Vector) -> Self;

    /// Inverts the matrix in place.
    ///
    /// A singular matrix (determinant exactly zero) degrades to the zero
    /// matrix rather than failing; callers that need to distinguish the
    /// degenerate case can test the result against zero.
    fn invert(&mut self) -> &mut Self;

    /// Composes with `other` in place: `self := self · other`.
    ///
    /// Applying the result to a column vector applies `other`'s transform
    /// first, then `self`'s. Every factory in the kernel holds to this
    /// convention.
    fn multiply(&mut self, other: &Self) -> &mut Self;

    /// Multiplies every element by `scalar`.
    fn multiply_scalar(&mut self, scalar: f32) -> &mut Self;

    /// Transposes in place by swapping the off-diagonal pairs.
    fn transpose(&mut self) -> &mut Self;
}
