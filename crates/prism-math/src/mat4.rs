use core::f32::consts::FRAC_PI_2;

use crate::error::MathError;
use crate::matrix::Matrix;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::vector::Vector;

/// Coordinate-system convention for the perspective projection.
///
/// Carries the `±1` sign that flips the two depth-range terms of the
/// projection matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    /// Left-handed clip space (`+1`).
    Left,
    /// Right-handed clip space (`-1`).
    Right,
}

impl Handedness {
    /// The sign applied to the projection's depth-range terms.
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Column-major 4×4 matrix for 3D affine and projective transforms.
///
/// Each contiguous block of four floats is one basis column; the fourth
/// column carries the translation. The flat-index formulas in `invert` and
/// the vector transform methods address this layout directly, and the GPU
/// buffer export hands the same 16 floats through unmodified.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Builds a rotation around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation from Euler angles: X, then Y, then Z, composed via
    /// sequential multiplies.
    pub fn rotation(euler: &Vec3) -> Self {
        let mut matrix = Self::rotation_x(euler[0]);
        matrix.multiply(&Self::rotation_y(euler[1]));
        matrix.multiply(&Self::rotation_z(euler[2]));
        matrix
    }

    /// Builds a view matrix looking from `eye` toward the point `target`.
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let mut z = *target;
        z.subtract(eye).normalize();
        Self::view_from_forward(eye, &z, up)
    }

    /// Builds a view matrix looking from `eye` toward the point `target`
    /// under the opposite (right-handed) sign convention.
    pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let mut z = *eye;
        z.subtract(target).normalize();
        Self::view_from_forward(eye, &z, up)
    }

    /// Builds a view matrix from `eye` along an already-normalized
    /// `forward` direction; no target subtraction takes place.
    pub fn look_toward(eye: &Vec3, forward: &Vec3, up: &Vec3) -> Self {
        Self::view_from_forward(eye, forward, up)
    }

    /// Orthonormal basis `z, x, y` from the forward vector and `up`; basis
    /// vectors fill the rows, negated eye dot products fill the translation
    /// row.
    fn view_from_forward(eye: &Vec3, z: &Vec3, up: &Vec3) -> Self {
        let mut x = up.cross(z);
        x.normalize();
        let y = z.cross(&x);

        Self::new([
            x[0], y[0], z[0], 0.0, //
            x[1], y[1], z[1], 0.0, //
            x[2], y[2], z[2], 0.0, //
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
        ])
    }

    /// Builds an orthographic projection from the six clip planes.
    ///
    /// Depth maps `near` to 0 and `far` to 1. Fails with
    /// [`MathError::DegenerateExtent`] when any opposing plane pair has a
    /// separation of exactly zero.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, MathError> {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        if width == 0.0 || height == 0.0 || depth == 0.0 {
            return Err(MathError::DegenerateExtent);
        }
        Ok(Self::new([
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, 2.0 / height, 0.0, 0.0, //
            0.0, 0.0, 1.0 / depth, 0.0, //
            -(right + left) / width,
            -(top + bottom) / height,
            -near / depth,
            1.0,
        ]))
    }

    /// Builds an orthographic projection from a centered extent.
    ///
    /// Special case of [`Mat4::orthographic`] with `left = -right`,
    /// `bottom = -top` and `near = 0`: a volume `extent.x` wide and
    /// `extent.y` tall centered on the view axis, `extent.z` deep.
    pub fn orthographic_extent(extent: &Vec3) -> Result<Self, MathError> {
        let half_width = extent[0] * 0.5;
        let half_height = extent[1] * 0.5;
        Self::orthographic(
            -half_width,
            half_width,
            -half_height,
            half_height,
            0.0,
            extent[2],
        )
    }

    /// Builds a perspective projection with the default `π/2` bias.
    ///
    /// `fov` is the vertical field of view in radians; `handedness` flips
    /// the sign of the two depth-range terms. Fails with
    /// [`MathError::DegenerateExtent`] when `far - near` is exactly zero.
    pub fn perspective(
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
        handedness: Handedness,
    ) -> Result<Self, MathError> {
        Self::perspective_with_bias(fov, aspect_ratio, near, far, handedness, FRAC_PI_2)
    }

    /// Builds a perspective projection with an explicit bias term.
    ///
    /// The focal scale is `f = tan(bias - fov/2)` — a cotangent-style
    /// formulation (with the default `bias = π/2` it equals
    /// `cot(fov/2)`), kept verbatim from the reference formulation rather
    /// than the textbook `1/tan(fov/2)`.
    pub fn perspective_with_bias(
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
        handedness: Handedness,
        bias: f32,
    ) -> Result<Self, MathError> {
        let range = far - near;
        if range == 0.0 {
            return Err(MathError::DegenerateExtent);
        }
        let f = (bias - fov * 0.5).tan();
        let sign = handedness.sign();

        Ok(Self::new([
            f / aspect_ratio, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, far / range, sign, //
            0.0, 0.0, -sign * near * far / range, 0.0,
        ]))
    }

    /// Builds a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quaternion(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Exports the matrix for a GPU uniform buffer. Already 16 column-major
    /// floats, so this is an identity passthrough.
    pub fn to_gpu_layout(self) -> [f32; 16] {
        self.data
    }

    /// Zeroes all elements.
    pub fn reset(&mut self) -> &mut Self {
        self.data = [0.0; 16];
        self
    }
}

impl Matrix for Mat4 {
    type Vector = Vec3;

    fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    fn translation(vector: &Vec3) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            vector[0], vector[1], vector[2], 1.0,
        ])
    }

    fn scale(vector: &Vec3) -> Self {
        Self::new([
            vector[0], 0.0, 0.0, 0.0, //
            0.0, vector[1], 0.0, 0.0, //
            0.0, 0.0, vector[2], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Inverts via full cofactor expansion over six precomputed 2×2
    /// sub-determinants.
    fn invert(&mut self) -> &mut Self {
        let [
            a00, a01, a02, a03, //
            a10, a11, a12, a13, //
            a20, a21, a22, a23, //
            a30, a31, a32, a33,
        ] = self.data;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let d = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;

        // Singular input degrades to the zero matrix instead of failing.
        if d == 0.0 {
            return self.reset();
        }

        self.data = [
            a11 * b11 - a12 * b10 + a13 * b09,
            a02 * b10 - a01 * b11 - a03 * b09,
            a31 * b05 - a32 * b04 + a33 * b03,
            a22 * b04 - a21 * b05 - a23 * b03,
            a12 * b08 - a10 * b11 - a13 * b07,
            a00 * b11 - a02 * b08 + a03 * b07,
            a32 * b02 - a30 * b05 - a33 * b01,
            a20 * b05 - a22 * b02 + a23 * b01,
            a10 * b10 - a11 * b08 + a13 * b06,
            a01 * b08 - a00 * b10 - a03 * b06,
            a30 * b04 - a31 * b02 + a33 * b00,
            a21 * b02 - a20 * b04 - a23 * b00,
            a11 * b07 - a10 * b09 - a12 * b06,
            a00 * b09 - a01 * b07 + a02 * b06,
            a31 * b01 - a30 * b03 - a32 * b00,
            a20 * b03 - a21 * b01 + a22 * b00,
        ];
        self.multiply_scalar(1.0 / d)
    }

    fn multiply(&mut self, other: &Self) -> &mut Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * other.at(k, col);
                }
                out[col * 4 + row] = sum;
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
        self.data.swap(1, 4);
        self.data.swap(2, 8);
        self.data.swap(3, 12);
        self.data.swap(6, 9);
        self.data.swap(7, 13);
        self.data.swap(11, 14);
        self
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        self.multiply(rhs);
    }
}
