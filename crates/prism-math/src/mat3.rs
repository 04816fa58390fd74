use crate::error::MathError;
use crate::matrix::Matrix;
use crate::vec2::Vec2;

/// Column-major 3×3 matrix for 2D affine transforms.
///
/// Each contiguous block of three floats is one basis column; the third
/// column carries the 2D translation. Flat indices in the invert and
/// multiply formulas below address that layout directly.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 3 + row]
    }

    /// Builds a counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Builds a 2D orthographic projection from a viewport extent.
    ///
    /// Maps pixel space `[0, w] × [0, h]` to clip space, flipping Y so the
    /// top of the viewport lands at `+1`. Fails with
    /// [`MathError::DegenerateExtent`] when either extent component is
    /// exactly zero.
    pub fn orthographic(extent: &Vec2) -> Result<Self, MathError> {
        if extent[0] == 0.0 || extent[1] == 0.0 {
            return Err(MathError::DegenerateExtent);
        }
        Ok(Self::new([
            2.0 / extent[0], 0.0, 0.0, //
            0.0, -2.0 / extent[1], 0.0, //
            -1.0, 1.0, 1.0,
        ]))
    }

    /// Exports the matrix for a GPU uniform buffer: 12 floats, each 3-float
    /// column padded with one trailing zero to satisfy 16-byte column
    /// alignment.
    pub fn to_gpu_layout(self) -> [f32; 12] {
        [
            self.data[0], self.data[1], self.data[2], 0.0, //
            self.data[3], self.data[4], self.data[5], 0.0, //
            self.data[6], self.data[7], self.data[8], 0.0,
        ]
    }

    /// Zeroes all elements.
    pub fn reset(&mut self) -> &mut Self {
        self.data = [0.0; 9];
        self
    }
}

impl Matrix for Mat3 {
    type Vector = Vec2;

    fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    fn translation(vector: &Vec2) -> Self {
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            vector[0], vector[1], 1.0,
        ])
    }

    fn scale(vector: &Vec2) -> Self {
        Self::new([
            vector[0], 0.0, 0.0, //
            0.0, vector[1], 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Inverts via the adjugate over the determinant.
    fn invert(&mut self) -> &mut Self {
        let [a00, a10, a20, a01, a11, a21, a02, a12, a22] = self.data;

        let b00 = a22 * a11 - a21 * a12;
        let b01 = a21 * a02 - a22 * a01;
        let b02 = a12 * a01 - a11 * a02;
        let d = a00 * b00 + a10 * b01 + a20 * b02;

        // Singular input degrades to the zero matrix instead of failing.
        if d == 0.0 {
            return self.reset();
        }

        self.data = [
            b00,
            a20 * a12 - a22 * a10,
            a21 * a10 - a20 * a11,
            b01,
            a22 * a00 - a20 * a02,
            a20 * a01 - a21 * a00,
            b02,
            a10 * a02 - a12 * a00,
            a11 * a00 - a10 * a01,
        ];
        self.multiply_scalar(1.0 / d)
    }

    fn multiply(&mut self, other: &Self) -> &mut Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * other.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        self.data = out;
        self
    }

    fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        for element in &mut self.data {
            *element *= scalar;
        }
        self
    }

    fn transpose(&mut self) -> &mut Self {
        self.data.swap(1, 3);
        self.data.swap(2, 6);
        self.data.swap(5, 7);
        self
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl core::ops::MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: &Self) {
        self.multiply(rhs);
    }
}
