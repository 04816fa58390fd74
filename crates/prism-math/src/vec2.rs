use core::fmt;

use crate::error::MathError;
use crate::mat3::Mat3;
use crate::vector::Vector;

/// 2D float32 vector with in-place arithmetic.
///
/// Components are stored as a contiguous `[f32; 2]`; copies are deep value
/// copies. See [`Vector`] for the shared capability contract.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Applies the affine 2D transform carried by a 3×3 matrix.
    ///
    /// Treats `self` as a point with an implicit homogeneous `w = 1`, so the
    /// matrix translation column participates.
    pub fn multiply_matrix(&mut self, matrix: &Mat3) -> &mut Self {
        let x = self.data[0];
        let y = self.data[1];

        self.data[0] = matrix[0] * x + matrix[3] * y + matrix[6];
        self.data[1] = matrix[1] * x + matrix[4] * y + matrix[7];

        self
    }
}

impl Vector for Vec2 {
    fn add(&mut self, other: &Self) -> &mut Self {
        self.data[0] += other.data[0];
        self.data[1] += other.data[1];
        self
    }

    fn add_scalar(&mut self, scalar: f32) -> &mut Self {
        self.data[0] += scalar;
        self.data[1] += scalar;
        self
    }

    fn subtract(&mut self, other: &Self) -> &mut Self {
        self.data[0] -= other.data[0];
        self.data[1] -= other.data[1];
        self
    }

    fn multiply(&mut self, other: &Self) -> &mut Self {
        self.data[0] *= other.data[0];
        self.data[1] *= other.data[1];
        self
    }

    fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        self.data[0] *= scalar;
        self.data[1] *= scalar;
        self
    }

    fn divide(&mut self, other: &Self) -> Result<&mut Self, MathError> {
        if other.data[0] == 0.0 || other.data[1] == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        self.data[0] /= other.data[0];
        self.data[1] /= other.data[1];
        Ok(self)
    }

    fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    fn lerp(&mut self, target: &Self, t: f32) -> &mut Self {
        self.data[0] += t * (target.data[0] - self.data[0]);
        self.data[1] += t * (target.data[1] - self.data[1]);
        self
    }

    fn floor(&mut self) -> &mut Self {
        self.data[0] = self.data[0] as i32 as f32;
        self.data[1] = self.data[1] as i32 as f32;
        self
    }

    fn is_null(&self) -> bool {
        self.data[0] == 0.0 && self.data[1] == 0.0
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2}", self.data[0], self.data[1])
    }
}
