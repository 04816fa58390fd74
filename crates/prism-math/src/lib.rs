//! prism-math: float32 linear algebra for real-time render code.
//!
//! The kernel provides 2/3/4-component vectors, 3×3/4×4 column-major
//! matrices, rotation quaternions, and the scalar helpers the rest of Prism
//! is built on. Everything rounds to `f32`; repeated operations accumulate
//! rounding the way the runtime's float32 mode does, and NaN/∞ propagate per
//! IEEE-754 with no special handling.
//!
//! Design notes:
//! - Vector and matrix arithmetic mutates in place and returns `&mut Self`
//!   for chaining; quaternion operations return new values.
//! - Matrices are column-major: each contiguous block of 3 or 4 floats is
//!   one basis column. GPU buffer exports depend on this layout.
//! - The only fallible operations are division (by an exact zero) and the
//!   projection factories (zero-length extent); see [`MathError`]. Singular
//!   matrix inversion degrades to the zero matrix instead of failing.
//! - Purely synchronous value computation; share-and-mutate across threads
//!   requires external synchronization or a copy.

mod error;
mod mat3;
mod mat4;
mod matrix;
mod ops;
mod quat;
mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod vector;

pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::{Handedness, Mat4};
pub use matrix::Matrix;
pub use ops::{cross, distance, dot, inverse, length, transpose, Cross};
pub use quat::Quat;
pub use scalar::{clamp, lerp, max, min};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use vector::Vector;

pub use core::f32::consts::{FRAC_1_SQRT_2, PI, SQRT_2};
