use crate::mat4::Mat4;
use crate::vec3::Vec3;

/// Rotation quaternion with named `(x, y, z, w)` fields; `w` is the scalar
/// part.
///
/// Unit length after [`Quat::normalize`] is expected but not enforced;
/// unnormalized quaternions are legal intermediate values. Unlike the
/// vector and matrix families, quaternion operations return new values
/// rather than mutating in place.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// First imaginary component.
    pub x: f32,
    /// Second imaginary component.
    pub y: f32,
    /// Third imaginary component.
    pub z: f32,
    /// Scalar component.
    pub w: f32,
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity rotation `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Builds a rotation from XYZ intrinsic Tait-Bryan angles in radians.
    pub fn from_euler_angles(euler: &Vec3) -> Self {
        let c1 = (euler[0] * 0.5).cos();
        let c2 = (euler[1] * 0.5).cos();
        let c3 = (euler[2] * 0.5).cos();
        let s1 = (euler[0] * 0.5).sin();
        let s2 = (euler[1] * 0.5).sin();
        let s3 = (euler[2] * 0.5).sin();

        Self::new(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Builds a rotation of `angle` radians around `axis`.
    ///
    /// The axis is taken as given and assumed normalized.
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();

        Self::new(
            axis[0] * sin_half,
            axis[1] * sin_half,
            axis[2] * sin_half,
            cos_half,
        )
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product `self ⊗ other`. Non-commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.x;
        let ay = self.y;
        let az = self.z;
        let aw = self.w;

        let bx = other.x;
        let by = other.y;
        let bz = other.z;
        let bw = other.w;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `vector` through the quaternion sandwich
    /// `conjugate(q) ⊗ (v, 0) ⊗ q`.
    ///
    /// The conjugate sits on the *left*, so for a unit quaternion this is
    /// the reverse of [`Vec3::multiply_quaternion`]'s rotation direction;
    /// the two deliberately mirror each other.
    pub fn rotate_vector(&self, vector: &Vec3) -> Vec3 {
        let qv = Self::new(vector[0], vector[1], vector[2], 0.0);
        let rotated = self.conjugate().multiply(&qv).multiply(self);

        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Quaternion norm: `sqrt(x² + y² + z² + w²)`.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scales all fields by the reciprocal length.
    ///
    /// A zero-length quaternion yields the all-zero quaternion — a
    /// degenerate value, deliberately not the identity.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        let inv = 1.0 / length;

        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Extracts XYZ Tait-Bryan angles via atan2/asin.
    ///
    /// The asin term is unguarded: inputs within rounding error of a ±90°
    /// pitch can produce NaN when the argument drifts past ±1.
    pub fn to_euler_angles(&self) -> Vec3 {
        let xsq = self.x * self.x;
        let ysq = self.y * self.y;
        let zsq = self.z * self.z;

        Vec3::new(
            (2.0 * (self.x * self.w - self.y * self.z)).atan2(1.0 - 2.0 * (xsq + zsq)),
            (2.0 * (self.y * self.w + self.x * self.z)).atan2(1.0 - 2.0 * (ysq + zsq)),
            (2.0 * (self.x * self.y + self.z * self.w)).asin(),
        )
    }

    /// Expands the quaternion into a column-major rotation matrix using the
    /// standard doubled cross terms.
    ///
    /// The quaternion is expanded as given; callers are expected to pass
    /// unit quaternions.
    pub fn to_mat4(&self) -> Mat4 {
        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;
        let xy = self.x * self.y;
        let xz = self.x * self.z;
        let yz = self.y * self.z;
        let wx = self.w * self.x;
        let wy = self.w * self.y;
        let wz = self.w * self.z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}
